//! # Weather Provider Client
//!
//! Two-step lookup against weatherapi.com: resolve the location string via
//! the search endpoint, then fetch the multi-day forecast for the
//! coordinates.

use async_trait::async_trait;
use chrono::NaiveDate;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use domains::models::{Coordinates, ForecastDay, GeocodedLocation};
use domains::ports::ForecastProvider;
use domains::{AppError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

pub struct WeatherApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl WeatherApiClient {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn unavailable(err: reqwest::Error) -> AppError {
    AppError::Upstream(format!("weather unavailable: {err}"))
}

#[derive(Deserialize)]
struct SearchMatch {
    name: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    country: String,
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct ForecastResponse {
    forecast: ForecastBlock,
}

#[derive(Deserialize)]
struct ForecastBlock {
    forecastday: Vec<ForecastDayEntry>,
}

#[derive(Deserialize)]
struct ForecastDayEntry {
    date: NaiveDate,
    day: DaySummary,
}

#[derive(Deserialize)]
struct DaySummary {
    maxtemp_c: f64,
    mintemp_c: f64,
    avgtemp_c: f64,
    totalprecip_mm: f64,
    avghumidity: f64,
    maxwind_kph: f64,
    condition: Condition,
}

#[derive(Deserialize)]
struct Condition {
    text: String,
}

impl From<ForecastDayEntry> for ForecastDay {
    fn from(entry: ForecastDayEntry) -> Self {
        ForecastDay {
            date: entry.date,
            condition: entry.day.condition.text,
            max_temp_c: entry.day.maxtemp_c,
            min_temp_c: entry.day.mintemp_c,
            avg_temp_c: entry.day.avgtemp_c,
            total_precip_mm: entry.day.totalprecip_mm,
            avg_humidity: entry.day.avghumidity,
            max_wind_kph: entry.day.maxwind_kph,
        }
    }
}

#[async_trait]
impl ForecastProvider for WeatherApiClient {
    async fn geocode(&self, location: &str) -> Result<GeocodedLocation> {
        let matches: Vec<SearchMatch> = self
            .http
            .get(format!("{}/search.json", self.base_url))
            .query(&[("key", self.api_key.expose_secret()), ("q", location)])
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?
            .json()
            .await
            .map_err(unavailable)?;

        let best = matches
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("location", location.to_string()))?;

        Ok(GeocodedLocation {
            name: best.name,
            region: best.region,
            country: best.country,
            coordinates: Coordinates {
                lat: best.lat,
                lon: best.lon,
            },
        })
    }

    async fn forecast(&self, coordinates: Coordinates, days: u8) -> Result<Vec<ForecastDay>> {
        let query = format!("{},{}", coordinates.lat, coordinates.lon);
        let days = days.to_string();
        let response: ForecastResponse = self
            .http
            .get(format!("{}/forecast.json", self.base_url))
            .query(&[
                ("key", self.api_key.expose_secret()),
                ("q", query.as_str()),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?
            .json()
            .await
            .map_err(unavailable)?;

        Ok(response
            .forecast
            .forecastday
            .into_iter()
            .map(ForecastDay::from)
            .collect())
    }
}
