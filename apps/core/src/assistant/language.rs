//! Language tags supported by the assistant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported query/response language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Hindi (Devanagari script)
    Hi,
    /// Hinglish (romanized Hindi mixed with English)
    Hinglish,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Hinglish];

    /// Parse a caller-supplied tag. Unrecognized tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "hi" | "hindi" => Language::Hi,
            "hinglish" => Language::Hinglish,
            _ => Language::En,
        }
    }

    /// Returns the language code used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Hinglish => "hinglish",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
