//! Query Analyzer - orchestrates intent classification and entity extraction.

use super::analysis::AnalysisResult;
use super::entities::EntityExtractor;
use super::intent::{IntentClassifier, KeywordIntentClassifier};
use super::language::Language;

/// Analyzes a raw query into an intent plus crop/location entities.
///
/// Stateless: shares only its read-only lexicons, so concurrent callers
/// need no coordination.
pub struct QueryAnalyzer {
    classifier: Box<dyn IntentClassifier>,
    extractor: EntityExtractor,
}

impl Default for QueryAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryAnalyzer {
    /// Create an analyzer with the keyword classifier.
    pub fn new() -> Self {
        Self::with_classifier(Box::new(KeywordIntentClassifier::new()))
    }

    /// Create an analyzer with a custom classifier implementation.
    pub fn with_classifier(classifier: Box<dyn IntentClassifier>) -> Self {
        Self {
            classifier,
            extractor: EntityExtractor::new(),
        }
    }

    /// Analyze a query. Deterministic; never fails. Empty input yields the
    /// general intent with an empty entity map.
    pub fn analyze(&self, query: &str, language: Language) -> AnalysisResult {
        let lowered = query.to_lowercase();
        AnalysisResult {
            intent: self.classifier.classify(&lowered, language),
            entities: self.extractor.extract(&lowered),
            language,
        }
    }
}
