//! Weather feed: Open-Meteo client plus static per-city fallback.

use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;
use url::Url;

use super::{Coordinates, FetchError, WeatherFeed, WeatherReport};

const FORECAST_PATH: &str = "v1/forecast";
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code";

/// HTTP client for the Open-Meteo current-weather endpoint.
///
/// Requires caller-supplied coordinates; there is deliberately no
/// city-to-coordinates table here, so without coordinates the feed reports
/// "no data" and the service falls back to the static city table.
pub struct OpenMeteoFeed {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl OpenMeteoFeed {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, url::ParseError> {
        Ok(Self {
            client: Client::new(),
            endpoint: base_url.join(FORECAST_PATH)?,
            timeout,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ForecastEnvelope {
    current: Option<CurrentBlock>,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    weather_code: u16,
}

/// Map WMO weather codes to the condition vocabulary used by templates.
fn condition_from_code(code: u16) -> &'static str {
    match code {
        0 => "Clear",
        1..=3 => "Partly cloudy",
        45 | 48 => "Fog",
        51..=57 => "Drizzle",
        61..=82 => "Rain",
        95..=99 => "Thunderstorm",
        _ => "Cloudy",
    }
}

#[async_trait]
impl WeatherFeed for OpenMeteoFeed {
    async fn current(
        &self,
        location: &str,
        coords: Option<Coordinates>,
    ) -> Result<Option<WeatherReport>, FetchError> {
        let Some(coords) = coords else {
            debug!(location, "no coordinates supplied, weather feed skipped");
            return Ok(None);
        };

        let request = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
            ])
            .timeout(self.timeout);

        let response = timeout(self.timeout, request.send())
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))??;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let envelope: ForecastEnvelope = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(envelope.current.map(|current| WeatherReport {
            location: location.to_string(),
            temperature_c: current.temperature_2m,
            humidity_percent: current.relative_humidity_2m,
            condition: condition_from_code(current.weather_code).to_string(),
        }))
    }
}

// --- Fallback synthesis ---

/// Typical conditions per known city: (temp °C, humidity %, condition).
static CITY_WEATHER: &[(&str, f64, f64, &str)] = &[
    ("Delhi", 32.0, 45.0, "Clear"),
    ("Mumbai", 29.0, 78.0, "Humid"),
    ("Pune", 27.0, 55.0, "Partly cloudy"),
    ("Jaipur", 34.0, 35.0, "Clear"),
    ("Lucknow", 31.0, 60.0, "Partly cloudy"),
    ("Bhopal", 30.0, 50.0, "Clear"),
    ("Patna", 31.0, 65.0, "Partly cloudy"),
    ("Nagpur", 33.0, 48.0, "Clear"),
    ("Indore", 29.0, 52.0, "Partly cloudy"),
    ("Chandigarh", 28.0, 58.0, "Partly cloudy"),
];

static RANDOM_CONDITIONS: &[&str] = &["Clear", "Partly cloudy", "Cloudy", "Rain"];

/// Synthesize a plausible report when no live data is available. Known
/// cities use the fixed table; anything else gets values within plausible
/// ranges drawn from the injected generator.
pub fn fallback_report(location: &str, rng: &mut impl Rng) -> WeatherReport {
    if let Some((_, temp, humidity, condition)) = CITY_WEATHER
        .iter()
        .find(|(city, _, _, _)| *city == location)
    {
        return WeatherReport {
            location: location.to_string(),
            temperature_c: *temp,
            humidity_percent: *humidity,
            condition: condition.to_string(),
        };
    }

    let condition = RANDOM_CONDITIONS[rng.gen_range(0..RANDOM_CONDITIONS.len())];
    WeatherReport {
        location: location.to_string(),
        temperature_c: (rng.gen_range(18.0..=38.0f64) * 10.0).round() / 10.0,
        humidity_percent: rng.gen_range(40.0..=90.0f64).round(),
        condition: condition.to_string(),
    }
}
