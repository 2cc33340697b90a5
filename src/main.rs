use std::sync::Arc;

use anyhow::Result;
use skycast::api::AppState;
use skycast::{AppConfig, OpenWeatherClient, SystemClock, WeatherService, web};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skycast=info".into()),
        )
        .init();

    // Load .env if present (for local development)
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let client = OpenWeatherClient::new(&config)?;
    let service = WeatherService::new(Arc::new(client), Arc::new(SystemClock));

    web::run(config.port, AppState::new(service)).await
}
