use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Represents an incoming chat request from the HTTP surface.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    /// The raw farmer query text.
    #[validate(length(min = 1, message = "query must not be empty"))]
    pub query: String,
    /// Language tag ("en", "hi", "hinglish"). Unrecognized tags fall back to English.
    #[serde(default)]
    pub language: Option<String>,
    /// Caller-supplied location name, overriding any location found in the query.
    #[serde(default)]
    pub location_name: Option<String>,
    /// Optional latitude for the weather feed.
    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    /// Optional longitude for the weather feed.
    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

/// Represents the rendered chatbot answer returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The rendered natural-language response text. Never empty.
    pub response: String,
    /// Confidence score in [0, 1].
    pub confidence: f32,
    /// Resolved language code the response was rendered in.
    pub language: String,
    /// UTC timestamp of response generation (RFC 3339).
    pub timestamp: DateTime<Utc>,
    /// Tag naming the data path that produced the answer
    /// (`live:*`, `fallback:*`, or `template`).
    pub source: String,
}

/// Health endpoint payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_rejected() {
        let request = ChatRequest {
            query: String::new(),
            language: None,
            location_name: None,
            latitude: None,
            longitude: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let request = ChatRequest {
            query: "weather today".to_string(),
            language: Some("en".to_string()),
            location_name: None,
            latitude: Some(123.0),
            longitude: Some(77.2),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_minimal_request_deserializes() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"query":"hello"}"#).expect("valid request");
        assert_eq!(request.query, "hello");
        assert!(request.language.is_none());
        assert!(request.validate().is_ok());
    }
}
