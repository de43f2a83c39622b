// AgriChat V1 Backend Entry Point
// Farmer query in, templated multilingual answer out.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use agrichat_core::config::AppConfig;
use agrichat_core::error::AppError;
use agrichat_core::feeds::market::AgmarknetFeed;
use agrichat_core::feeds::weather::OpenMeteoFeed;
use agrichat_core::rate_limiter::RateLimiter;
use agrichat_core::service::{AgriAssistant, AssistantOptions};
use agrichat_core::web::{self, AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let market = AgmarknetFeed::new(
        &config.market_base_url,
        config.market_api_key.clone(),
        config.feed_timeout,
    )?;
    let weather = OpenMeteoFeed::new(&config.weather_base_url, config.feed_timeout)?;

    let assistant = AgriAssistant::new(
        Arc::new(market),
        Arc::new(weather),
        AssistantOptions {
            default_location: config.default_location.clone(),
            rng_seed: config.rng_seed,
        },
    );
    let limiter = RateLimiter::new(config.rate_limit, config.rate_window);
    let state = Arc::new(AppState::new(assistant, limiter));

    // Periodically drop idle rate-limiter entries.
    let prune_state = Arc::clone(&state);
    let prune_interval = config.rate_window.max(Duration::from_secs(60));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(prune_interval);
        loop {
            ticker.tick().await;
            prune_state
                .limiter
                .lock()
                .expect("limiter lock poisoned")
                .prune();
        }
    });

    let app = web::router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
