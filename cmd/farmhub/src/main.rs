//! # Farmhub Binary
//!
//! The entry point: load settings once, construct whichever adapters are
//! configured, and serve the API. A missing credential disables its
//! feature; it never prevents startup.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use api_adapters::{router, AppState};
use configs::Settings;
use domains::ports::{CompletionClient, ForecastProvider, ForumRepo, MarketDataSource};
use domains::Provisioned;
use storage_adapters::SqliteForumRepo;
use upstream_adapters::{DataGovMarketClient, GroqChatClient, WeatherApiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;

    let forum: Provisioned<Arc<dyn ForumRepo>> = match &settings.database {
        Some(database) => {
            let repo = SqliteForumRepo::connect(&database.url)
                .await
                .map_err(|err| anyhow::anyhow!("database init failed: {err}"))?;
            info!(url = %database.url, "forum store connected");
            Provisioned::Configured(Arc::new(repo))
        }
        None => {
            warn!("FARMHUB__DATABASE__URL not set - forum features disabled");
            Provisioned::Unconfigured
        }
    };

    let llm: Provisioned<Arc<dyn CompletionClient>> = match settings.llm {
        Some(llm) => {
            info!(model = %llm.model, "LLM client configured");
            Provisioned::Configured(Arc::new(GroqChatClient::new(llm.api_key, llm.model)))
        }
        None => {
            warn!("FARMHUB__LLM__API_KEY not set - AI crop analysis disabled");
            Provisioned::Unconfigured
        }
    };

    let weather: Provisioned<Arc<dyn ForecastProvider>> = match settings.weather {
        Some(weather) => Provisioned::Configured(Arc::new(WeatherApiClient::new(weather.api_key))),
        None => {
            warn!("FARMHUB__WEATHER__API_KEY not set - weather outlook disabled");
            Provisioned::Unconfigured
        }
    };

    let market: Provisioned<Arc<dyn MarketDataSource>> = match settings.market {
        Some(market) => Provisioned::Configured(Arc::new(DataGovMarketClient::new(
            market.api_key,
            market.resource_id,
        ))),
        None => {
            warn!("FARMHUB__MARKET__API_KEY not set - market prices disabled");
            Provisioned::Unconfigured
        }
    };

    let app = router(AppState::new(forum, llm, weather, market));

    let address = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&address).await?;
    info!("farmhub server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
        info!("received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
