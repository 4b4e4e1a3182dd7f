//! # Crop Health Analysis
//!
//! Shapes the observation into the diagnosis prompt and forwards it to the
//! completion client. The response is free text and passed through as-is.

use domains::models::CropObservation;
use domains::ports::CompletionClient;
use domains::Result;

/// The prompt sent to the LLM for a crop health check.
pub fn health_prompt(observation: &CropObservation) -> String {
    format!(
        "Analyze the crop health based on the following data:\n\
         - Crop: {}\n\
         - Color: {}\n\
         - Leaf Spots: {}\n\
         - Growth Speed: {}\n\
         - Soil Condition: {}\n\
         Give a brief health status, possible issues, and an overall score out of 100.",
        observation.crop_name,
        observation.color,
        observation.leaf_spots,
        observation.growth_speed,
        observation.soil_condition,
    )
}

pub async fn analyze_crop(
    client: &dyn CompletionClient,
    observation: &CropObservation,
) -> Result<String> {
    client.complete(&health_prompt(observation)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::ports::MockCompletionClient;

    fn observation() -> CropObservation {
        CropObservation {
            crop_name: "Tomato".to_string(),
            color: "Yellowing".to_string(),
            leaf_spots: "Brown patches".to_string(),
            growth_speed: "Slow".to_string(),
            soil_condition: "Dry".to_string(),
        }
    }

    #[test]
    fn prompt_interpolates_every_field() {
        let prompt = health_prompt(&observation());
        assert!(prompt.contains("- Crop: Tomato"));
        assert!(prompt.contains("- Color: Yellowing"));
        assert!(prompt.contains("- Leaf Spots: Brown patches"));
        assert!(prompt.contains("- Growth Speed: Slow"));
        assert!(prompt.contains("- Soil Condition: Dry"));
        assert!(prompt.ends_with("overall score out of 100."));
    }

    #[tokio::test]
    async fn completion_text_is_passed_through() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .withf(|prompt: &str| prompt.contains("Tomato"))
            .returning(|_| Ok("Health status: fair. Score: 62/100.".to_string()));

        let text = analyze_crop(&client, &observation()).await.unwrap();
        assert_eq!(text, "Health status: fair. Score: 62/100.");
    }
}
