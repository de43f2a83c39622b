//! # Assistant Module
//!
//! The query analysis and response synthesis pipeline.
//! Analyzes a farmer query BEFORE any data fetch to decide what is being
//! asked and which crop/location it concerns, then renders a templated
//! per-language answer.
//!
//! ## Components
//! - `language`: closed language tag set (en / hi / hinglish)
//! - `intent`: keyword-based intent classification (fixed priority order)
//! - `entities`: crop/location extraction over fixed lexicons
//! - `analysis`: output data structures
//! - `analyzer`: main orchestrator
//! - `crops`: static crop reference table
//! - `synthesizer`: per-language response templates

pub mod analysis;
pub mod analyzer;
pub mod crops;
pub mod entities;
pub mod intent;
pub mod language;
pub mod synthesizer;

pub use analysis::{AnalysisResult, EntityMap};
pub use analyzer::QueryAnalyzer;
pub use crops::{CropInfo, Season};
pub use entities::EntityExtractor;
pub use intent::{Intent, IntentClassifier, KeywordIntentClassifier};
pub use language::Language;
pub use synthesizer::{ResponseSynthesizer, CONFIDENCE};
