//! Output structures for query analysis.

use serde::{Deserialize, Serialize};

use super::intent::Intent;
use super::language::Language;

/// Entities extracted from a query. Fixed shape: at most one crop and one
/// location, each a canonical lexicon key when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMap {
    /// Canonical crop key (e.g. "wheat"), if any crop variant matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<String>,
    /// Canonical city name (e.g. "Delhi"), if any city variant matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Result of analyzing one query. Derived deterministically from the input;
/// immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Exactly one value from the closed intent set.
    pub intent: Intent,
    /// Extracted entities.
    pub entities: EntityMap,
    /// The language the query was analyzed in (after tag fallback).
    pub language: Language,
}
