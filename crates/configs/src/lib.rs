//! # configs
//!
//! Process configuration, read once at startup from `FARMHUB__*`
//! environment variables (a `.env` file is honored in development) into an
//! explicit settings struct. Request-handling code never touches the
//! environment.
//!
//! Every external dependency section is optional: leaving its variables
//! unset disables the owning feature instead of failing startup.

use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: Option<DatabaseSettings>,
    pub llm: Option<LlmSettings>,
    pub weather: Option<WeatherSettings>,
    pub market: Option<MarketSettings>,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct LlmSettings {
    pub api_key: SecretString,
    #[serde(default = "default_llm_model")]
    pub model: String,
}

#[derive(Debug, Deserialize)]
pub struct WeatherSettings {
    pub api_key: SecretString,
}

#[derive(Debug, Deserialize)]
pub struct MarketSettings {
    pub api_key: SecretString,
    #[serde(default = "default_market_resource")]
    pub resource_id: String,
}

fn default_llm_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_market_resource() -> String {
    "c6e3688b-d2a7-479a-9b06-02b6a6a0a7b2".to_string()
}

impl Settings {
    /// Loads settings from the environment. Variables use the `FARMHUB__`
    /// prefix with `__` as the section separator, e.g.
    /// `FARMHUB__DATABASE__URL`, `FARMHUB__LLM__API_KEY`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001)?
            .add_source(
                config::Environment::with_prefix("FARMHUB")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}
