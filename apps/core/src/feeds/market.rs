//! Mandi price feed: data.gov.in Agmarknet client plus static fallback.

use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;
use url::Url;

use super::{FetchError, MarketFeed, MarketQuote};
use crate::assistant::crops;

/// Agmarknet daily-price resource on data.gov.in.
const AGMARKNET_RESOURCE: &str = "resource/9ef84268-d588-465a-a308-a864a43d0070";

/// HTTP client for the Agmarknet daily price resource.
pub struct AgmarknetFeed {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
    timeout: Duration,
}

impl AgmarknetFeed {
    pub fn new(
        base_url: &Url,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            client: Client::new(),
            endpoint: base_url.join(AGMARKNET_RESOURCE)?,
            api_key,
            timeout,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RecordsEnvelope {
    #[serde(default)]
    records: Vec<MandiRecord>,
}

#[derive(Debug, Deserialize)]
struct MandiRecord {
    #[serde(default)]
    market: String,
    #[serde(default)]
    modal_price: String,
    #[serde(default)]
    min_price: String,
}

impl MandiRecord {
    fn into_quote(self, crop: &str, location: &str) -> Result<MarketQuote, FetchError> {
        let modal: f64 = self
            .modal_price
            .trim()
            .parse()
            .map_err(|_| FetchError::Decode(format!("bad modal_price {:?}", self.modal_price)))?;

        // Change is reported against the day's low; the resource carries no
        // previous-day price.
        let change_percent = match self.min_price.trim().parse::<f64>() {
            Ok(min) if min > 0.0 => ((modal - min) / min * 1000.0).round() / 10.0,
            _ => 0.0,
        };

        let mandi = if self.market.trim().is_empty() {
            format!("{location} Mandi")
        } else {
            self.market
        };

        Ok(MarketQuote {
            crop: crop.to_string(),
            mandi,
            location: location.to_string(),
            price_per_quintal: modal,
            change_percent,
        })
    }
}

#[async_trait]
impl MarketFeed for AgmarknetFeed {
    async fn latest_quote(
        &self,
        crop: &str,
        location: &str,
    ) -> Result<Option<MarketQuote>, FetchError> {
        let commodity = crops::find(crop)
            .map(|info| info.display_en)
            .unwrap_or(crop);

        let mut request = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("format", "json"),
                ("limit", "1"),
                ("filters[commodity]", commodity),
                ("filters[district]", location),
            ])
            .timeout(self.timeout);
        if let Some(key) = &self.api_key {
            request = request.query(&[("api-key", key.as_str())]);
        }

        let response = timeout(self.timeout, request.send())
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))??;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let envelope: RecordsEnvelope = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        let Some(record) = envelope.records.into_iter().next() else {
            debug!(crop, location, "agmarknet returned no records");
            return Ok(None);
        };

        record.into_quote(crop, location).map(Some)
    }
}

// --- Fallback synthesis ---

/// Base prices in ₹ per quintal, jittered per request.
static BASE_PRICES: &[(&str, f64)] = &[
    ("wheat", 2250.0),
    ("rice", 2850.0),
    ("maize", 2050.0),
    ("cotton", 7000.0),
    ("sugarcane", 340.0),
    ("soybean", 4650.0),
    ("mustard", 5500.0),
    ("potato", 1200.0),
    ("onion", 1800.0),
    ("tomato", 1600.0),
];

/// Location multipliers applied on top of the base price.
static LOCATION_MULTIPLIERS: &[(&str, f64)] = &[
    ("Delhi", 1.0),
    ("Mumbai", 1.15),
    ("Pune", 1.08),
    ("Jaipur", 0.95),
    ("Lucknow", 0.92),
    ("Bhopal", 0.9),
    ("Patna", 0.88),
    ("Nagpur", 0.97),
    ("Indore", 0.93),
    ("Chandigarh", 1.05),
];

/// Known mandi names; everything else becomes "{city} Mandi".
static MANDI_NAMES: &[(&str, &str)] = &[
    ("Delhi", "Azadpur Mandi"),
    ("Mumbai", "Vashi APMC"),
    ("Pune", "Gultekdi Market Yard"),
    ("Lucknow", "Sitapur Road Mandi"),
    ("Jaipur", "Muhana Mandi"),
];

fn base_price(crop: &str) -> f64 {
    BASE_PRICES
        .iter()
        .find(|(name, _)| *name == crop)
        .map(|(_, price)| *price)
        .unwrap_or(2000.0)
}

fn location_multiplier(location: &str) -> f64 {
    LOCATION_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(1.0)
}

/// Mandi display name for a city.
pub fn mandi_name(location: &str) -> String {
    MANDI_NAMES
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, mandi)| mandi.to_string())
        .unwrap_or_else(|| format!("{location} Mandi"))
}

/// Synthesize a plausible quote when no live data is available.
///
/// price = base × location multiplier × jitter; all randomness comes from
/// the injected generator so seeded runs are reproducible.
pub fn fallback_quote(crop: &str, location: &str, rng: &mut impl Rng) -> MarketQuote {
    let jitter = rng.gen_range(0.95..=1.05);
    let price = (base_price(crop) * location_multiplier(location) * jitter).round();
    let change_percent = (rng.gen_range(-5.0..=5.0f64) * 10.0).round() / 10.0;

    MarketQuote {
        crop: crop.to_string(),
        mandi: mandi_name(location),
        location: location.to_string(),
        price_per_quintal: price,
        change_percent,
    }
}
