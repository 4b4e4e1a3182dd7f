//! # Domain Models
//!
//! Core entities of Farmhub. Forum aggregates use UUID v7 for time-ordered,
//! globally unique identification; comments and replies carry their own ids
//! so nothing is ever addressed by array position.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Forum ────────────────────────────────────────────────────────────────────

/// A top-level discussion post.
///
/// `reply_count` is derived: the total number of comments on the post,
/// recomputed whenever the aggregate is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
    pub reply_count: usize,
    pub comments: Vec<Comment>,
}

impl ForumPost {
    pub fn new(title: String, author: String, tags: Vec<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            title,
            author,
            tags,
            created_at: Utc::now(),
            like_count: 0,
            reply_count: 0,
            comments: Vec::new(),
        }
    }
}

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub replies: Vec<Reply>,
}

impl Comment {
    pub fn new(author: String, text: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            author,
            text,
            created_at: Utc::now(),
            replies: Vec::new(),
        }
    }
}

/// A reply to a comment. Replies do not nest further.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: Uuid,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Reply {
    pub fn new(author: String, text: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            author,
            text,
            created_at: Utc::now(),
        }
    }
}

// ── Seasonal planning ────────────────────────────────────────────────────────

/// One synthetic month of weather. Request-scoped, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherSample {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub rainfall_mm: i32,
}

/// The fixed 12-stage cropping cycle, assigned by month index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FarmingStage {
    #[serde(rename = "Land Preparation")]
    LandPreparation,
    Sowing,
    #[serde(rename = "Early Growth")]
    EarlyGrowth,
    Irrigation,
    Fertilization,
    #[serde(rename = "Pest Control")]
    PestControl,
    Weeding,
    Flowering,
    #[serde(rename = "Fruit/Bulb Development")]
    FruitBulbDevelopment,
    #[serde(rename = "Final Irrigation")]
    FinalIrrigation,
    Ripening,
    Harvesting,
}

pub const STAGE_CYCLE: [FarmingStage; 12] = [
    FarmingStage::LandPreparation,
    FarmingStage::Sowing,
    FarmingStage::EarlyGrowth,
    FarmingStage::Irrigation,
    FarmingStage::Fertilization,
    FarmingStage::PestControl,
    FarmingStage::Weeding,
    FarmingStage::Flowering,
    FarmingStage::FruitBulbDevelopment,
    FarmingStage::FinalIrrigation,
    FarmingStage::Ripening,
    FarmingStage::Harvesting,
];

impl FarmingStage {
    pub fn for_month(index: usize) -> Self {
        STAGE_CYCLE[index % STAGE_CYCLE.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FarmingStage::LandPreparation => "Land Preparation",
            FarmingStage::Sowing => "Sowing",
            FarmingStage::EarlyGrowth => "Early Growth",
            FarmingStage::Irrigation => "Irrigation",
            FarmingStage::Fertilization => "Fertilization",
            FarmingStage::PestControl => "Pest Control",
            FarmingStage::Weeding => "Weeding",
            FarmingStage::Flowering => "Flowering",
            FarmingStage::FruitBulbDevelopment => "Fruit/Bulb Development",
            FarmingStage::FinalIrrigation => "Final Irrigation",
            FarmingStage::Ripening => "Ripening",
            FarmingStage::Harvesting => "Harvesting",
        }
    }
}

impl std::fmt::Display for FarmingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A plannable resource category. The wire names are fixed; anything else
/// is rejected at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    #[serde(rename = "Water Usage")]
    WaterUsage,
    Fertilizer,
    Pesticide,
}

/// Advice and dosage for one (month, resource) pair. Derived, stateless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub resource: ResourceKind,
    pub advice: String,
    pub amount: String,
}

/// One entry of the 12-month seasonal plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthPlan {
    pub date: NaiveDate,
    pub temperature: i32,
    pub rainfall: i32,
    pub stage: FarmingStage,
    pub recommendations: Vec<Recommendation>,
}

// ── Crop health analysis ─────────────────────────────────────────────────────

/// A farmer's observation of a crop, forwarded to the LLM for diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropObservation {
    pub crop_name: String,
    pub color: String,
    pub leaf_spots: String,
    pub growth_speed: String,
    pub soil_condition: String,
}

// ── Weather outlook ──────────────────────────────────────────────────────────

/// Geographic coordinates resolved from a location string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// A resolved place, as returned by the geocoding step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodedLocation {
    pub name: String,
    pub region: String,
    pub country: String,
    pub coordinates: Coordinates,
}

/// One day of the multi-day forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub condition: String,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub avg_temp_c: f64,
    pub total_precip_mm: f64,
    pub avg_humidity: f64,
    pub max_wind_kph: f64,
}

// ── Market prices ────────────────────────────────────────────────────────────

/// Filters for a wholesale price query. All optional; `limit` bounds the
/// number of records returned.
#[derive(Debug, Clone, Default)]
pub struct MarketQuery {
    pub commodity: Option<String>,
    pub state: Option<String>,
    pub limit: Option<u32>,
}

/// One wholesale price record from the government data source. Prices are
/// kept as the source's strings (₹/quintal) rather than reinterpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRecord {
    pub state: String,
    pub district: String,
    pub market: String,
    pub commodity: String,
    pub variety: String,
    pub arrival_date: String,
    pub min_price: String,
    pub max_price: String,
    pub modal_price: String,
}
