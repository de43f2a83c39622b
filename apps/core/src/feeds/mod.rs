//! # Feeds Module
//!
//! Best-effort external data collaborators: mandi prices and weather.
//! Each feed is a trait so the service layer can be tested with stubs, and
//! each returns an explicit `Result` so "no data" (`Ok(None)`) is
//! distinguishable from "fetch failed" (`Err`). The service substitutes
//! static fallback data in both cases; callers never see a failure.

pub mod market;
pub mod weather;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors from a feed fetch attempt.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, connection reset).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// Upstream payload could not be decoded into the expected shape.
    #[error("failed to decode upstream payload: {0}")]
    Decode(String),

    /// The request did not complete within the configured budget.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

/// Geographic coordinates supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One mandi price observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    /// Canonical crop key.
    pub crop: String,
    /// Mandi (wholesale market) name.
    pub mandi: String,
    /// City the mandi belongs to.
    pub location: String,
    /// Modal price in ₹ per quintal.
    pub price_per_quintal: f64,
    /// Percent change against the previous observation.
    pub change_percent: f64,
}

/// Current weather conditions for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub condition: String,
}

/// Mandi price lookup. Best-effort: `Ok(None)` means no data available.
#[async_trait]
pub trait MarketFeed: Send + Sync {
    async fn latest_quote(
        &self,
        crop: &str,
        location: &str,
    ) -> Result<Option<MarketQuote>, FetchError>;
}

/// Weather lookup. Best-effort: `Ok(None)` means no data available.
#[async_trait]
pub trait WeatherFeed: Send + Sync {
    async fn current(
        &self,
        location: &str,
        coords: Option<Coordinates>,
    ) -> Result<Option<WeatherReport>, FetchError>;
}
