//! Crop and location entity extraction.
//!
//! Scans the lower-cased query against fixed variant lexicons (including
//! Devanagari and transliterated spellings) and canonicalizes the first hit.
//! Extraction is independent of the detected intent.

use super::analysis::EntityMap;

/// Canonical crop key plus every spelling that maps to it.
struct CropVariants {
    canonical: &'static str,
    variants: &'static [&'static str],
}

// Enumeration order is part of the contract: the first variant hit wins.
static CROP_LEXICON: &[CropVariants] = &[
    CropVariants {
        canonical: "wheat",
        variants: &["wheat", "gehu", "gehun", "गेहूं", "गेहूँ"],
    },
    CropVariants {
        canonical: "rice",
        variants: &["rice", "paddy", "chawal", "dhan", "चावल", "धान"],
    },
    CropVariants {
        canonical: "maize",
        variants: &["maize", "corn", "makka", "makki", "मक्का"],
    },
    CropVariants {
        canonical: "cotton",
        variants: &["cotton", "kapas", "कपास"],
    },
    CropVariants {
        canonical: "sugarcane",
        variants: &["sugarcane", "ganna", "गन्ना"],
    },
    CropVariants {
        canonical: "soybean",
        variants: &["soybean", "soyabean", "सोयाबीन"],
    },
    CropVariants {
        canonical: "mustard",
        variants: &["mustard", "sarso", "sarson", "सरसों"],
    },
    CropVariants {
        canonical: "potato",
        variants: &["potato", "aloo", "alu", "आलू"],
    },
    CropVariants {
        canonical: "onion",
        variants: &["onion", "pyaz", "pyaaz", "प्याज"],
    },
    CropVariants {
        canonical: "tomato",
        variants: &["tomato", "tamatar", "टमाटर"],
    },
];

/// Canonical city name plus its spellings.
struct CityVariants {
    canonical: &'static str,
    variants: &'static [&'static str],
}

static CITY_LEXICON: &[CityVariants] = &[
    CityVariants {
        canonical: "Delhi",
        variants: &["delhi", "dilli", "दिल्ली"],
    },
    CityVariants {
        canonical: "Mumbai",
        variants: &["mumbai", "मुंबई"],
    },
    CityVariants {
        canonical: "Pune",
        variants: &["pune", "पुणे"],
    },
    CityVariants {
        canonical: "Jaipur",
        variants: &["jaipur", "जयपुर"],
    },
    CityVariants {
        canonical: "Lucknow",
        variants: &["lucknow", "लखनऊ"],
    },
    CityVariants {
        canonical: "Bhopal",
        variants: &["bhopal", "भोपाल"],
    },
    CityVariants {
        canonical: "Patna",
        variants: &["patna", "पटना"],
    },
    CityVariants {
        canonical: "Nagpur",
        variants: &["nagpur", "नागपुर"],
    },
    CityVariants {
        canonical: "Indore",
        variants: &["indore", "इंदौर"],
    },
    CityVariants {
        canonical: "Chandigarh",
        variants: &["chandigarh", "चंडीगढ़"],
    },
];

/// Extracts crop and location entities from a query.
#[derive(Debug, Default)]
pub struct EntityExtractor;

impl EntityExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Scan for the first crop variant occurring in the query.
    pub fn crop(&self, query_lower: &str) -> Option<&'static str> {
        // "price" contains "rice"; blank it out so the bare rice variant
        // cannot fire inside market queries.
        let scrubbed = query_lower.replace("price", " ");
        CROP_LEXICON.iter().find_map(|entry| {
            entry
                .variants
                .iter()
                .any(|variant| scrubbed.contains(variant))
                .then_some(entry.canonical)
        })
    }

    /// Scan for the first known city occurring in the query.
    pub fn location(&self, query_lower: &str) -> Option<&'static str> {
        CITY_LEXICON.iter().find_map(|entry| {
            entry
                .variants
                .iter()
                .any(|variant| query_lower.contains(variant))
                .then_some(entry.canonical)
        })
    }

    /// Extract both entities. Absent values are simply not set, never
    /// present-but-null.
    pub fn extract(&self, query_lower: &str) -> EntityMap {
        EntityMap {
            crop: self.crop(query_lower).map(str::to_string),
            location: self.location(query_lower).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_variants_canonicalize() {
        let extractor = EntityExtractor::new();

        assert_eq!(extractor.crop("gehun ka bhav"), Some("wheat"));
        assert_eq!(extractor.crop("गेहूं की कीमत"), Some("wheat"));
        assert_eq!(extractor.crop("paddy cultivation"), Some("rice"));
        assert_eq!(extractor.crop("makka for fodder"), Some("maize"));
        assert_eq!(extractor.crop("sarson ka khet"), Some("mustard"));
        assert_eq!(extractor.crop("tamatar mandi"), Some("tomato"));
    }

    #[test]
    fn test_price_does_not_trigger_the_rice_variant() {
        let extractor = EntityExtractor::new();

        // "price" contains the substring "rice"; the scan must still find
        // the crop the query actually names, including crops listed after
        // rice in the lexicon.
        assert_eq!(extractor.crop("tomato price in delhi"), Some("tomato"));
        assert_eq!(extractor.crop("maize price today"), Some("maize"));
        assert_eq!(extractor.crop("potato price"), Some("potato"));
        assert_eq!(
            extractor.crop("what is the current price of wheat in delhi mandi?"),
            Some("wheat")
        );
        // A genuine rice mention still matches.
        assert_eq!(extractor.crop("price of rice in delhi"), Some("rice"));
        // "price" alone names no crop.
        assert_eq!(extractor.crop("mandi price today"), None);
    }

    #[test]
    fn test_location_variants_canonicalize() {
        let extractor = EntityExtractor::new();

        assert_eq!(extractor.location("weather in delhi"), Some("Delhi"));
        assert_eq!(extractor.location("दिल्ली में बारिश"), Some("Delhi"));
        assert_eq!(extractor.location("lucknow mandi bhav"), Some("Lucknow"));
        assert_eq!(extractor.location("मुंबई का मौसम"), Some("Mumbai"));
    }

    #[test]
    fn test_unknown_values_are_absent() {
        let extractor = EntityExtractor::new();

        let entities = extractor.extract("how to get a loan");
        assert!(entities.crop.is_none());
        assert!(entities.location.is_none());

        let entities = extractor.extract("");
        assert!(entities.crop.is_none());
        assert!(entities.location.is_none());
    }

    #[test]
    fn test_at_most_one_of_each() {
        let extractor = EntityExtractor::new();

        // Two crops and two cities in one query: first match of each wins.
        let entities = extractor.extract("wheat or rice in delhi or mumbai?");
        assert_eq!(entities.crop.as_deref(), Some("wheat"));
        assert_eq!(entities.location.as_deref(), Some("Delhi"));
    }
}
