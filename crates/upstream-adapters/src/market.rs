//! # Market Price Client
//!
//! Queries the data.gov.in daily mandi price resource. Records come back as
//! strings and stay strings; this adapter filters and relays, nothing more.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use domains::models::{MarketQuery, MarketRecord};
use domains::ports::MarketDataSource;
use domains::Result;

use crate::upstream;

pub const DEFAULT_BASE_URL: &str = "https://api.data.gov.in";
/// Daily wholesale market prices resource.
pub const DEFAULT_RESOURCE_ID: &str = "c6e3688b-d2a7-479a-9b06-02b6a6a0a7b2";
const DEFAULT_LIMIT: u32 = 50;

pub struct DataGovMarketClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    resource_id: String,
}

impl DataGovMarketClient {
    pub fn new(api_key: SecretString, resource_id: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            resource_id: resource_id.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Deserialize)]
struct RecordsResponse {
    #[serde(default)]
    records: Vec<RawRecord>,
}

/// The source's own field names; mapped to the domain record on the way out.
#[derive(Deserialize)]
struct RawRecord {
    #[serde(default)]
    state: String,
    #[serde(default)]
    district: String,
    #[serde(default)]
    market: String,
    #[serde(default)]
    commodity: String,
    #[serde(default)]
    variety: String,
    #[serde(default)]
    arrival_date: String,
    #[serde(default)]
    min_price: String,
    #[serde(default)]
    max_price: String,
    #[serde(default)]
    modal_price: String,
}

impl From<RawRecord> for MarketRecord {
    fn from(raw: RawRecord) -> Self {
        MarketRecord {
            state: raw.state,
            district: raw.district,
            market: raw.market,
            commodity: raw.commodity,
            variety: raw.variety,
            arrival_date: raw.arrival_date,
            min_price: raw.min_price,
            max_price: raw.max_price,
            modal_price: raw.modal_price,
        }
    }
}

#[async_trait]
impl MarketDataSource for DataGovMarketClient {
    async fn latest_prices(&self, query: &MarketQuery) -> Result<Vec<MarketRecord>> {
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT).to_string();

        let mut params = vec![
            ("api-key".to_string(), self.api_key.expose_secret().to_string()),
            ("format".to_string(), "json".to_string()),
            ("limit".to_string(), limit),
        ];
        if let Some(commodity) = &query.commodity {
            params.push(("filters[commodity]".to_string(), commodity.clone()));
        }
        if let Some(state) = &query.state {
            params.push(("filters[state]".to_string(), state.clone()));
        }

        let response: RecordsResponse = self
            .http
            .get(format!("{}/resource/{}", self.base_url, self.resource_id))
            .query(&params)
            .send()
            .await
            .map_err(upstream)?
            .error_for_status()
            .map_err(upstream)?
            .json()
            .await
            .map_err(upstream)?;

        Ok(response.records.into_iter().map(MarketRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_parse_with_source_field_names() {
        let body: RecordsResponse = serde_json::from_str(
            r#"{
                "records": [{
                    "state": "Punjab",
                    "district": "Ludhiana",
                    "market": "Khanna",
                    "commodity": "Onion",
                    "variety": "Red",
                    "arrival_date": "05/04/2024",
                    "min_price": "1200",
                    "max_price": "1600",
                    "modal_price": "1400"
                }]
            }"#,
        )
        .unwrap();

        let record: MarketRecord = body.records.into_iter().next().unwrap().into();
        assert_eq!(record.commodity, "Onion");
        assert_eq!(record.modal_price, "1400");
    }

    #[test]
    fn missing_records_key_means_empty() {
        let body: RecordsResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(body.records.is_empty());
    }
}
