//! # Seasonal Plan Builder
//!
//! Twelve synthetic months, each tagged with its stage in the fixed
//! cropping cycle and annotated with one recommendation per requested
//! resource. The weather is mock data, drawn fresh on every call; nothing
//! is shared between calls.

use chrono::NaiveDate;
use rand::Rng;
use rand::RngExt;

use domains::models::{FarmingStage, MonthPlan, ResourceKind, WeatherSample};

use crate::advice::recommend;

/// Temperature is drawn uniformly from [20, 35) °C and rainfall from
/// [0, 30) mm, both integer-floored.
fn synthesize_weather<R: Rng>(rng: &mut R, date: NaiveDate) -> WeatherSample {
    WeatherSample {
        date,
        temperature_c: rng.random_range(20..35),
        rainfall_mm: rng.random_range(0..30),
    }
}

/// Builds the 12-month plan for `start_year`, one entry per calendar month,
/// with recommendations in the order the resources were requested.
pub fn build_plan(start_year: i32, resources: &[ResourceKind]) -> Vec<MonthPlan> {
    let mut rng = rand::rng();

    (0..12)
        .map(|month_index| {
            let date =
                NaiveDate::from_ymd_opt(start_year, month_index as u32 + 1, 1).unwrap_or_default();
            let weather = synthesize_weather(&mut rng, date);

            MonthPlan {
                date,
                temperature: weather.temperature_c,
                rainfall: weather.rainfall_mm,
                stage: FarmingStage::for_month(month_index),
                recommendations: resources
                    .iter()
                    .map(|&resource| recommend(&weather, resource))
                    .collect(),
            }
        })
        .collect()
}
