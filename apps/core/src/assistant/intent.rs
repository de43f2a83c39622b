//! Intent classification using keyword substring matching.
//!
//! Fast list-based intent detection for EN, HI and Hinglish queries.
//! No ML model required - pure substring matching over static lists.
//!
//! Matching stops at the first intent whose keyword list has a hit, so the
//! enumeration order of `INTENT_KEYWORDS` is part of the observable
//! behavior. A query containing both a price keyword and a weather keyword
//! always resolves to market_price because it is checked first.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::language::Language;

/// Detected intent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Greeting (hello, namaste, etc.)
    Greeting,
    /// Mandi price inquiry (price, bhav, mandi, etc.)
    MarketPrice,
    /// Weather inquiry (weather, barish, mausam, etc.)
    Weather,
    /// What-to-grow advice (kharif, rabi, fasal, etc.)
    CropRecommendation,
    /// Pest and disease help (pest, keet, rog, etc.)
    PestControl,
    /// Fertilizer advice (urea, khad, npk, etc.)
    Fertilizer,
    /// Government scheme info (yojana, subsidy, loan, etc.)
    GovernmentScheme,
    /// Unmatched/default
    General,
}

impl Intent {
    pub const ALL: [Intent; 8] = [
        Intent::Greeting,
        Intent::MarketPrice,
        Intent::Weather,
        Intent::CropRecommendation,
        Intent::PestControl,
        Intent::Fertilizer,
        Intent::GovernmentScheme,
        Intent::General,
    ];

    /// Returns a stable wire label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::MarketPrice => "market_price",
            Intent::Weather => "weather",
            Intent::CropRecommendation => "crop_recommendation",
            Intent::PestControl => "pest_control",
            Intent::Fertilizer => "fertilizer",
            Intent::GovernmentScheme => "government_scheme",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-language keyword lists for one intent.
struct IntentKeywords {
    intent: Intent,
    en: &'static [&'static str],
    hi: &'static [&'static str],
    hinglish: &'static [&'static str],
}

impl IntentKeywords {
    fn for_language(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::En => self.en,
            Language::Hi => self.hi,
            Language::Hinglish => self.hinglish,
        }
    }
}

/// Keyword lists in classification priority order. First hit wins.
static INTENT_KEYWORDS: &[IntentKeywords] = &[
    IntentKeywords {
        intent: Intent::Greeting,
        en: &[
            "hello",
            "hey",
            "greetings",
            "good morning",
            "good evening",
            "namaste",
            "namaskar",
        ],
        hi: &["नमस्ते", "नमस्कार", "प्रणाम", "राम राम"],
        hinglish: &["namaste", "namaskar", "hello", "ram ram", "salaam"],
    },
    IntentKeywords {
        intent: Intent::MarketPrice,
        en: &["price", "rate", "mandi", "market", "msp", "cost", "sell"],
        hi: &["कीमत", "भाव", "दाम", "मंडी", "बाजार", "बेच"],
        hinglish: &["price", "bhav", "daam", "kimat", "mandi", "rate", "bech"],
    },
    IntentKeywords {
        intent: Intent::Weather,
        en: &[
            "weather",
            "rain",
            "temperature",
            "forecast",
            "humidity",
            "climate",
            "monsoon",
        ],
        hi: &["मौसम", "बारिश", "तापमान", "वर्षा", "मानसून", "गर्मी", "ठंड"],
        hinglish: &[
            "mausam", "barish", "baarish", "weather", "garmi", "thand", "monsoon",
        ],
    },
    IntentKeywords {
        intent: Intent::CropRecommendation,
        en: &[
            "which crop",
            "grow",
            "sow",
            "plant",
            "cultivat",
            "kharif",
            "rabi",
            "season",
            "recommend",
        ],
        hi: &["फसल", "उगा", "बो", "खरीफ", "रबी", "सीजन", "कौन सी"],
        hinglish: &[
            "fasal",
            "ugau",
            "kaun si fasal",
            "kharif",
            "rabi",
            "bona",
            "lagau",
        ],
    },
    IntentKeywords {
        intent: Intent::PestControl,
        en: &[
            "pest",
            "insect",
            "disease",
            "fungus",
            "bug",
            "spray",
            "worm",
            "infestation",
        ],
        hi: &["कीट", "रोग", "बीमारी", "इल्ली", "फफूंद", "दवा"],
        hinglish: &["keet", "keeda", "rog", "bimari", "spray", "dawai"],
    },
    IntentKeywords {
        intent: Intent::Fertilizer,
        en: &[
            "fertilizer",
            "fertiliser",
            "urea",
            "manure",
            "npk",
            "nutrient",
            "compost",
            "dap",
        ],
        hi: &["खाद", "उर्वरक", "यूरिया", "डीएपी", "पोषक"],
        hinglish: &["khad", "urea", "fertilizer", "dap", "npk"],
    },
    IntentKeywords {
        intent: Intent::GovernmentScheme,
        en: &[
            "scheme",
            "subsidy",
            "loan",
            "insurance",
            "pm-kisan",
            "pm kisan",
            "credit card",
            "yojana",
        ],
        hi: &["योजना", "सब्सिडी", "ऋण", "बीमा", "सरकारी", "किसान क्रेडिट"],
        hinglish: &["yojana", "sarkari", "subsidy", "loan", "bima", "pm kisan"],
    },
];

/// Classification seam: maps a raw query to exactly one intent.
///
/// Isolated behind a trait so the keyword matcher can later be swapped for a
/// real classifier without touching the synthesizer.
pub trait IntentClassifier: Send + Sync {
    fn classify(&self, query: &str, language: Language) -> Intent;
}

/// Intent classifier using per-language keyword substring lists.
#[derive(Debug, Default)]
pub struct KeywordIntentClassifier;

impl KeywordIntentClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl IntentClassifier for KeywordIntentClassifier {
    fn classify(&self, query: &str, language: Language) -> Intent {
        let query = query.to_lowercase();
        if query.trim().is_empty() {
            return Intent::General;
        }

        for group in INTENT_KEYWORDS {
            let keywords = group.for_language(language);
            if keywords.iter().any(|keyword| query.contains(keyword)) {
                return group.intent;
            }
        }

        Intent::General
    }
}
