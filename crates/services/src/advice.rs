//! # Seasonal Advice Rules
//!
//! The deterministic advice/dosage lookup. Pure: the same weather and
//! resource always produce the same strings.

use domains::models::{Recommendation, ResourceKind, WeatherSample};

/// Advice and dosage for one resource under one month's weather.
pub fn recommend(weather: &WeatherSample, resource: ResourceKind) -> Recommendation {
    let (advice, amount) = match resource {
        ResourceKind::WaterUsage => {
            if weather.rainfall_mm < 10 {
                ("Increase irrigation this month.", "300-500 liters per acre")
            } else if weather.rainfall_mm > 25 {
                (
                    "Reduce watering due to heavy rainfall.",
                    "100-200 liters per acre",
                )
            } else {
                ("Maintain standard irrigation.", "250-300 liters per acre")
            }
        }
        ResourceKind::Fertilizer => {
            if weather.temperature_c > 30 {
                (
                    "Apply fertilizer in early morning or evening.",
                    "50 kg/acre of NPK (10:26:26)",
                )
            } else if weather.temperature_c < 20 {
                ("Use slow-release fertilizer.", "60 kg/acre of Urea")
            } else {
                (
                    "Standard fertilizer application is ideal.",
                    "45 kg/acre of balanced fertilizer",
                )
            }
        }
        ResourceKind::Pesticide => {
            if weather.rainfall_mm > 20 {
                ("Delay spraying until after rain.", "1.5 liters/acre")
            } else {
                ("Spray pesticides in dry conditions.", "1 liter/acre")
            }
        }
    };

    Recommendation {
        resource,
        advice: advice.to_string(),
        amount: amount.to_string(),
    }
}
