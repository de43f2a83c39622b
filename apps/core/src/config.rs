//! Environment-backed configuration.
//!
//! Every knob has a default so the binary starts with no environment at
//! all; malformed values are a startup error rather than a silent default.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::error::AppError;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:7878";
const DEFAULT_MARKET_URL: &str = "https://api.data.gov.in/";
const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/";
const DEFAULT_FEED_TIMEOUT_SECS: u64 = 5;
const DEFAULT_LOCATION: &str = "Delhi";
const DEFAULT_RATE_LIMIT: usize = 30;
const DEFAULT_RATE_WINDOW_SECS: u64 = 60;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Base URL of the mandi price API.
    pub market_base_url: Url,
    /// data.gov.in API key; without one the feed typically returns no data.
    pub market_api_key: Option<String>,
    /// Base URL of the weather API.
    pub weather_base_url: Url,
    /// Per-request budget for feed fetches.
    pub feed_timeout: Duration,
    /// Location used when a query names none.
    pub default_location: String,
    /// Requests allowed per client per window on the chat endpoint.
    pub rate_limit: usize,
    pub rate_window: Duration,
    /// Seed for fallback-value jitter; unset means seeded from entropy.
    pub rng_seed: Option<u64>,
}

fn var_or<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::Config(format!("invalid value for {}: {:?}", name, raw))),
        Err(_) => Ok(default),
    }
}

fn url_var(name: &str, default: &str) -> Result<Url, AppError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| AppError::Config(format!("invalid URL in {}: {}", name, e)))
}

impl AppConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        let rng_seed = match env::var("AGRICHAT_RNG_SEED") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|_| {
                AppError::Config(format!("invalid value for AGRICHAT_RNG_SEED: {:?}", raw))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            bind_addr: env::var("AGRICHAT_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            market_base_url: url_var("AGRICHAT_MARKET_URL", DEFAULT_MARKET_URL)?,
            market_api_key: env::var("AGRICHAT_MARKET_API_KEY").ok(),
            weather_base_url: url_var("AGRICHAT_WEATHER_URL", DEFAULT_WEATHER_URL)?,
            feed_timeout: Duration::from_secs(var_or(
                "AGRICHAT_FEED_TIMEOUT_SECS",
                DEFAULT_FEED_TIMEOUT_SECS,
            )?),
            default_location: env::var("AGRICHAT_DEFAULT_LOCATION")
                .unwrap_or_else(|_| DEFAULT_LOCATION.to_string()),
            rate_limit: var_or("AGRICHAT_RATE_LIMIT", DEFAULT_RATE_LIMIT)?,
            rate_window: Duration::from_secs(var_or(
                "AGRICHAT_RATE_WINDOW_SECS",
                DEFAULT_RATE_WINDOW_SECS,
            )?),
            rng_seed,
        })
    }
}
