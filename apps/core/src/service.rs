//! AgriAssistant - orchestrates analysis, data fetch and synthesis.
//!
//! One explicitly constructed service object; all lookup tables and feeds
//! are injected at construction time, so independent instances can coexist
//! and tests need no shared state.

use chrono::Utc;
use lru::LruCache;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use crate::assistant::synthesizer::CONFIDENCE;
use crate::assistant::{Intent, Language, QueryAnalyzer, ResponseSynthesizer};
use crate::feeds::{market, weather, Coordinates, MarketFeed, MarketQuote, WeatherFeed};
use crate::models::{ChatRequest, ChatResponse};

const SOURCE_TEMPLATE: &str = "template";
const SOURCE_MARKET_LIVE: &str = "live:agmarknet";
const SOURCE_MARKET_FALLBACK: &str = "fallback:price-table";
const SOURCE_WEATHER_LIVE: &str = "live:open-meteo";
const SOURCE_WEATHER_FALLBACK: &str = "fallback:weather-table";

const DEFAULT_CROP: &str = "wheat";
const QUOTE_CACHE_CAPACITY: usize = 64;

/// Construction options for [`AgriAssistant`].
#[derive(Debug, Clone)]
pub struct AssistantOptions {
    /// Location used when neither the query nor the caller names one.
    pub default_location: String,
    /// Seed for fallback-value jitter; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for AssistantOptions {
    fn default() -> Self {
        Self {
            default_location: "Delhi".to_string(),
            rng_seed: None,
        }
    }
}

/// The chatbot service: analyze, fetch best-effort data, synthesize.
///
/// Fail-soft by contract: every input produces some response. Feed errors
/// are logged and replaced with fallback data, never propagated.
pub struct AgriAssistant {
    analyzer: QueryAnalyzer,
    synthesizer: ResponseSynthesizer,
    market: Arc<dyn MarketFeed>,
    weather: Arc<dyn WeatherFeed>,
    quote_cache: Mutex<LruCache<(String, String), MarketQuote>>,
    rng: Mutex<StdRng>,
    default_location: String,
}

impl AgriAssistant {
    pub fn new(
        market: Arc<dyn MarketFeed>,
        weather: Arc<dyn WeatherFeed>,
        options: AssistantOptions,
    ) -> Self {
        let rng = match options.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let capacity = NonZeroUsize::new(QUOTE_CACHE_CAPACITY).expect("non-zero cache capacity");

        Self {
            analyzer: QueryAnalyzer::new(),
            synthesizer: ResponseSynthesizer::new(),
            market,
            weather,
            quote_cache: Mutex::new(LruCache::new(capacity)),
            rng: Mutex::new(rng),
            default_location: options.default_location,
        }
    }

    /// Handle one chat request end to end.
    pub async fn handle(&self, request: &ChatRequest) -> ChatResponse {
        let language = Language::from_tag(request.language.as_deref().unwrap_or("en"));
        let analysis = self.analyzer.analyze(&request.query, language);
        debug!(
            intent = %analysis.intent,
            crop = ?analysis.entities.crop,
            location = ?analysis.entities.location,
            %language,
            "query analyzed"
        );

        // Caller-supplied location wins over the extracted entity.
        let location = request
            .location_name
            .clone()
            .or_else(|| analysis.entities.location.clone())
            .unwrap_or_else(|| self.default_location.clone());
        let coords = match (request.latitude, request.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        };

        let (text, source) = match analysis.intent {
            Intent::Greeting => (self.synthesizer.greeting(language), SOURCE_TEMPLATE),
            Intent::MarketPrice => {
                let crop = analysis.entities.crop.as_deref().unwrap_or(DEFAULT_CROP);
                self.market_price(crop, &location, language).await
            }
            Intent::Weather => self.weather_report(&location, coords, language).await,
            Intent::CropRecommendation => (
                self.synthesizer.crop_recommendation(&location, language),
                SOURCE_TEMPLATE,
            ),
            Intent::PestControl => (
                self.synthesizer
                    .pest_control(analysis.entities.crop.as_deref(), language),
                SOURCE_TEMPLATE,
            ),
            Intent::Fertilizer => (
                self.synthesizer
                    .fertilizer(analysis.entities.crop.as_deref(), language),
                SOURCE_TEMPLATE,
            ),
            Intent::GovernmentScheme => (
                self.synthesizer.government_scheme(language),
                SOURCE_TEMPLATE,
            ),
            Intent::General => (self.synthesizer.general(language), SOURCE_TEMPLATE),
        };

        ChatResponse {
            response: text,
            confidence: CONFIDENCE,
            language: language.code().to_string(),
            timestamp: Utc::now(),
            source: source.to_string(),
        }
    }

    async fn market_price(
        &self,
        crop: &str,
        location: &str,
        language: Language,
    ) -> (String, &'static str) {
        let cache_key = (crop.to_string(), location.to_string());
        let cached = {
            let mut cache = self.quote_cache.lock().expect("quote cache lock poisoned");
            cache.get(&cache_key).cloned()
        };
        if let Some(quote) = cached {
            debug!(crop, location, "serving cached quote");
            return (
                self.synthesizer
                    .market_price(crop, location, &quote, language),
                SOURCE_MARKET_LIVE,
            );
        }

        match self.market.latest_quote(crop, location).await {
            Ok(Some(quote)) => {
                self.quote_cache
                    .lock()
                    .expect("quote cache lock poisoned")
                    .put(cache_key, quote.clone());
                (
                    self.synthesizer
                        .market_price(crop, location, &quote, language),
                    SOURCE_MARKET_LIVE,
                )
            }
            Ok(None) => {
                debug!(crop, location, "market feed had no data, using fallback");
                self.market_fallback(crop, location, language)
            }
            Err(error) => {
                warn!(crop, location, %error, "market feed failed, using fallback");
                self.market_fallback(crop, location, language)
            }
        }
    }

    fn market_fallback(
        &self,
        crop: &str,
        location: &str,
        language: Language,
    ) -> (String, &'static str) {
        let quote = {
            let mut rng = self.rng.lock().expect("rng lock poisoned");
            market::fallback_quote(crop, location, &mut *rng)
        };
        (
            self.synthesizer
                .market_price(crop, location, &quote, language),
            SOURCE_MARKET_FALLBACK,
        )
    }

    async fn weather_report(
        &self,
        location: &str,
        coords: Option<Coordinates>,
        language: Language,
    ) -> (String, &'static str) {
        match self.weather.current(location, coords).await {
            Ok(Some(report)) => (
                self.synthesizer.weather(location, &report, language),
                SOURCE_WEATHER_LIVE,
            ),
            Ok(None) => {
                debug!(location, "weather feed had no data, using fallback");
                self.weather_fallback(location, language)
            }
            Err(error) => {
                warn!(location, %error, "weather feed failed, using fallback");
                self.weather_fallback(location, language)
            }
        }
    }

    fn weather_fallback(&self, location: &str, language: Language) -> (String, &'static str) {
        let report = {
            let mut rng = self.rng.lock().expect("rng lock poisoned");
            weather::fallback_report(location, &mut *rng)
        };
        (
            self.synthesizer.weather(location, &report, language),
            SOURCE_WEATHER_FALLBACK,
        )
    }
}
