//! Test Module
//!
//! Integration-style tests for the chatbot backend.
//!
//! ## Test Categories
//! - `service_tests`: full analyze→fetch→synthesize pipeline with stub feeds
//! - `web_tests`: axum router behavior (validation, rate limiting, payloads)

pub mod service_tests;

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::feeds::{
    Coordinates, FetchError, MarketFeed, MarketQuote, WeatherFeed, WeatherReport,
};
use crate::service::{AgriAssistant, AssistantOptions};

/// Market feed returning a canned quote, counting calls.
pub struct StubMarket {
    pub quote: Option<MarketQuote>,
    pub calls: AtomicUsize,
}

impl StubMarket {
    pub fn with_quote(quote: MarketQuote) -> Self {
        Self {
            quote: Some(quote),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self {
            quote: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl MarketFeed for StubMarket {
    async fn latest_quote(
        &self,
        _crop: &str,
        _location: &str,
    ) -> Result<Option<MarketQuote>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.quote.clone())
    }
}

/// Market feed that always fails.
pub struct FailingMarket;

#[async_trait]
impl MarketFeed for FailingMarket {
    async fn latest_quote(
        &self,
        _crop: &str,
        _location: &str,
    ) -> Result<Option<MarketQuote>, FetchError> {
        Err(FetchError::Status(503))
    }
}

/// Weather feed returning a canned report.
pub struct StubWeather {
    pub report: Option<WeatherReport>,
}

#[async_trait]
impl WeatherFeed for StubWeather {
    async fn current(
        &self,
        _location: &str,
        _coords: Option<Coordinates>,
    ) -> Result<Option<WeatherReport>, FetchError> {
        Ok(self.report.clone())
    }
}

/// Weather feed that always fails.
pub struct FailingWeather;

#[async_trait]
impl WeatherFeed for FailingWeather {
    async fn current(
        &self,
        _location: &str,
        _coords: Option<Coordinates>,
    ) -> Result<Option<WeatherReport>, FetchError> {
        Err(FetchError::Status(500))
    }
}

/// Assistant with no live data and a fixed seed.
pub fn offline_assistant(seed: u64) -> AgriAssistant {
    AgriAssistant::new(
        Arc::new(FailingMarket),
        Arc::new(FailingWeather),
        AssistantOptions {
            default_location: "Delhi".to_string(),
            rng_seed: Some(seed),
        },
    )
}
