//! Response Synthesizer - per-language templated answers.
//!
//! Selects a template for the detected intent, fills placeholders with
//! entity values and feed (or fallback) numbers, and returns the rendered
//! string. Never fails and never returns an empty string; missing entities
//! fall back to defaults chosen by the service layer.

use super::crops;
use super::language::Language;
use crate::feeds::{MarketQuote, WeatherReport};

/// Confidence reported with every response.
///
/// The source system returned ~0.95 regardless of match quality; preserved
/// as-is for behavioral parity.
pub const CONFIDENCE: f32 = 0.95;

/// Kharif/Rabi crop picks per region, first matching entry wins.
struct RegionCrops {
    region: &'static str,
    kharif: &'static [&'static str],
    rabi: &'static [&'static str],
}

static REGION_CROPS: &[RegionCrops] = &[
    RegionCrops {
        region: "Delhi",
        kharif: &["rice", "maize"],
        rabi: &["wheat", "mustard"],
    },
    RegionCrops {
        region: "Mumbai",
        kharif: &["rice", "cotton"],
        rabi: &["onion", "tomato"],
    },
    RegionCrops {
        region: "Pune",
        kharif: &["soybean", "cotton"],
        rabi: &["onion", "wheat"],
    },
    RegionCrops {
        region: "Jaipur",
        kharif: &["maize", "cotton"],
        rabi: &["mustard", "wheat"],
    },
    RegionCrops {
        region: "Lucknow",
        kharif: &["rice", "sugarcane"],
        rabi: &["wheat", "potato"],
    },
    RegionCrops {
        region: "Bhopal",
        kharif: &["soybean", "maize"],
        rabi: &["wheat", "mustard"],
    },
    RegionCrops {
        region: "Patna",
        kharif: &["rice", "maize"],
        rabi: &["wheat", "potato"],
    },
];

// Default picks for locations without a table entry.
static DEFAULT_KHARIF: &[&str] = &["rice", "maize"];
static DEFAULT_RABI: &[&str] = &["wheat", "mustard"];

/// Per-crop pest advice (en, hi, hinglish).
static PEST_ADVICE: &[(&str, [&'static str; 3])] = &[
    (
        "wheat",
        [
            "watch for aphids and yellow rust; spray neem oil early, and use propiconazole only if rust spreads",
            "माहू और पीला रतुआ देखें; शुरुआत में नीम का तेल छिड़कें, रतुआ फैलने पर ही प्रोपिकोनाज़ोल का प्रयोग करें",
            "aphid aur yellow rust dekhein; pehle neem oil spray karein, rust failne par hi propiconazole use karein",
        ],
    ),
    (
        "rice",
        [
            "stem borer and leaf folder are common; use pheromone traps and avoid excess nitrogen",
            "तना छेदक और पत्ती मोड़क आम हैं; फेरोमोन ट्रैप लगाएं और अधिक नाइट्रोजन से बचें",
            "stem borer aur leaf folder common hain; pheromone trap lagayein aur zyada nitrogen se bachein",
        ],
    ),
    (
        "cotton",
        [
            "check for pink bollworm; install pheromone traps and remove infested bolls before spraying",
            "गुलाबी सुंडी की जांच करें; फेरोमोन ट्रैप लगाएं और छिड़काव से पहले ग्रसित टिंडे हटाएं",
            "pink bollworm check karein; pheromone trap lagayein aur spray se pehle kharab tinde hatayein",
        ],
    ),
    (
        "tomato",
        [
            "look for fruit borer and early blight; stake plants and spray mancozeb at first blight spots",
            "फल छेदक और अगेती झुलसा देखें; पौधों को सहारा दें और पहले धब्बों पर मैंकोजेब छिड़कें",
            "fruit borer aur early blight dekhein; paudhon ko sahara dein aur pehle spots par mancozeb spray karein",
        ],
    ),
];

/// Per-crop fertilizer advice (en, hi, hinglish).
static FERTILIZER_ADVICE: &[(&str, [&'static str; 3])] = &[
    (
        "wheat",
        [
            "apply 50 kg DAP per acre at sowing and 45 kg urea in two splits after first and second irrigation",
            "बुवाई पर 50 किलो डीएपी प्रति एकड़ और पहली-दूसरी सिंचाई के बाद दो बार में 45 किलो यूरिया डालें",
            "sowing par 50 kg DAP per acre aur pehli-dusri sinchai ke baad do baar mein 45 kg urea daalein",
        ],
    ),
    (
        "rice",
        [
            "use 50 kg DAP per acre at transplanting and 50 kg urea in three splits; add zinc sulphate if leaves yellow",
            "रोपाई पर 50 किलो डीएपी प्रति एकड़ और तीन बार में 50 किलो यूरिया दें; पत्तियां पीली हों तो जिंक सल्फेट डालें",
            "ropai par 50 kg DAP per acre aur teen baar mein 50 kg urea dein; patti peeli ho to zinc sulphate daalein",
        ],
    ),
    (
        "mustard",
        [
            "apply 35 kg urea and 50 kg SSP per acre at sowing; sulphur improves oil content",
            "बुवाई पर 35 किलो यूरिया और 50 किलो एसएसपी प्रति एकड़ डालें; सल्फर से तेल की मात्रा बढ़ती है",
            "sowing par 35 kg urea aur 50 kg SSP per acre daalein; sulphur se tel ki matra badhti hai",
        ],
    ),
];

/// Renders templated responses for each intent.
///
/// Pure and stateless; the only shared data are the static tables above.
#[derive(Debug, Default)]
pub struct ResponseSynthesizer;

impl ResponseSynthesizer {
    pub fn new() -> Self {
        Self
    }

    fn crop_display(crop: &str, language: Language) -> String {
        match crops::find(crop) {
            Some(info) => match language {
                Language::Hi => info.display_hi.to_string(),
                _ => info.display_en.to_string(),
            },
            None => crop.to_string(),
        }
    }

    fn condition_hi(condition: &str) -> &'static str {
        match condition {
            "Clear" | "Sunny" => "साफ़",
            "Partly cloudy" => "आंशिक बादल",
            "Cloudy" => "बादल",
            "Fog" => "कोहरा",
            "Rain" | "Drizzle" => "बारिश",
            "Thunderstorm" => "आंधी-तूफ़ान",
            "Humid" => "उमस",
            _ => "सामान्य",
        }
    }

    /// Render the mandi-price answer from a quote (live or fallback).
    pub fn market_price(
        &self,
        crop: &str,
        location: &str,
        quote: &MarketQuote,
        language: Language,
    ) -> String {
        let display = Self::crop_display(crop, language);
        let msp = crops::find(crop).and_then(|info| info.msp_per_quintal);

        let mut text = match language {
            Language::En => format!(
                "Current rate for {display} at {mandi}, {location}: ₹{price:.0} per quintal ({change:+.1}% since yesterday).",
                mandi = quote.mandi,
                price = quote.price_per_quintal,
                change = quote.change_percent,
            ),
            Language::Hi => format!(
                "{location} की {mandi} में {display} का भाव ₹{price:.0} प्रति क्विंटल है ({change:+.1}% कल से)।",
                mandi = quote.mandi,
                price = quote.price_per_quintal,
                change = quote.change_percent,
            ),
            Language::Hinglish => format!(
                "{location} ke {mandi} mein {display} ka bhav ₹{price:.0} per quintal hai ({change:+.1}% kal se).",
                mandi = quote.mandi,
                price = quote.price_per_quintal,
                change = quote.change_percent,
            ),
        };

        if let Some(msp) = msp {
            let msp_line = match language {
                Language::En => format!(" MSP for {display} is ₹{msp} per quintal."),
                Language::Hi => {
                    format!(" {display} का न्यूनतम समर्थन मूल्य ₹{msp} प्रति क्विंटल है।")
                }
                Language::Hinglish => format!(" {display} ka MSP ₹{msp} per quintal hai."),
            };
            text.push_str(&msp_line);
        }

        text
    }

    /// Render the weather answer from a report (live or fallback).
    pub fn weather(&self, location: &str, report: &WeatherReport, language: Language) -> String {
        match language {
            Language::En => format!(
                "Weather in {location}: {condition}, {temp:.0}°C with {humidity:.0}% humidity. Plan field work accordingly.",
                condition = report.condition,
                temp = report.temperature_c,
                humidity = report.humidity_percent,
            ),
            Language::Hi => format!(
                "{location} में मौसम: {condition}, तापमान {temp:.0}°C, नमी {humidity:.0}%। खेत का काम इसी अनुसार करें।",
                condition = Self::condition_hi(&report.condition),
                temp = report.temperature_c,
                humidity = report.humidity_percent,
            ),
            Language::Hinglish => format!(
                "{location} mein mausam {condition} hai, temperature {temp:.0}°C aur humidity {humidity:.0}% hai. Kheti ka kaam isi hisaab se karein.",
                condition = report.condition,
                temp = report.temperature_c,
                humidity = report.humidity_percent,
            ),
        }
    }

    /// Render the what-to-grow answer for a location.
    pub fn crop_recommendation(&self, location: &str, language: Language) -> String {
        let entry = REGION_CROPS.iter().find(|entry| entry.region == location);
        let (kharif, rabi) = match entry {
            Some(entry) => (entry.kharif, entry.rabi),
            None => (DEFAULT_KHARIF, DEFAULT_RABI),
        };

        let join = |keys: &[&str]| -> String {
            keys.iter()
                .map(|key| Self::crop_display(key, language))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let kharif_names = join(kharif);
        let rabi_names = join(rabi);

        match language {
            Language::En => format!(
                "For {location}, good Kharif options are {kharif_names}; in the Rabi season consider {rabi_names}. Exact sowing windows depend on monsoon arrival and soil moisture.",
            ),
            Language::Hi => format!(
                "{location} के लिए खरीफ में {kharif_names} अच्छे विकल्प हैं; रबी सीजन में {rabi_names} पर विचार करें। बुवाई का सही समय मानसून और मिट्टी की नमी पर निर्भर करता है।",
            ),
            Language::Hinglish => format!(
                "{location} ke liye Kharif mein {kharif_names} ache options hain; Rabi season mein {rabi_names} consider karein. Sahi sowing time monsoon aur mitti ki nami par depend karta hai.",
            ),
        }
    }

    fn advice_from(
        table: &[(&str, [&'static str; 3])],
        crop: Option<&str>,
        language: Language,
    ) -> Option<String> {
        let crop = crop?;
        let entry = table.iter().find(|(name, _)| *name == crop)?;
        let advice = match language {
            Language::En => entry.1[0],
            Language::Hi => entry.1[1],
            Language::Hinglish => entry.1[2],
        };
        let display = Self::crop_display(crop, language);
        Some(match language {
            Language::En => format!("For {display}: {advice}."),
            Language::Hi => format!("{display} के लिए: {advice}।"),
            Language::Hinglish => format!("{display} ke liye: {advice}."),
        })
    }

    /// Render pest-control advice; generic guidance when the crop is
    /// unknown or has no table entry.
    pub fn pest_control(&self, crop: Option<&str>, language: Language) -> String {
        if let Some(text) = Self::advice_from(PEST_ADVICE, crop, language) {
            return text;
        }
        match language {
            Language::En => "Inspect the field edges first, identify the pest before spraying, and prefer neem-based treatment; contact your local Krishi Vigyan Kendra for a confirmed diagnosis.".to_string(),
            Language::Hi => "पहले खेत के किनारों की जांच करें, छिड़काव से पहले कीट की पहचान करें और नीम आधारित उपचार को प्राथमिकता दें; पक्की पहचान के लिए नजदीकी कृषि विज्ञान केंद्र से संपर्क करें।".to_string(),
            Language::Hinglish => "Pehle khet ke kinaron ki jaanch karein, spray se pehle keet ki pehchaan karein aur neem-based upchaar ko priority dein; pakki pehchaan ke liye najdiki Krishi Vigyan Kendra se sampark karein.".to_string(),
        }
    }

    /// Render fertilizer advice; generic soil-test guidance otherwise.
    pub fn fertilizer(&self, crop: Option<&str>, language: Language) -> String {
        if let Some(text) = Self::advice_from(FERTILIZER_ADVICE, crop, language) {
            return text;
        }
        match language {
            Language::En => "Get a soil test before fixing doses; as a baseline use balanced NPK, add well-rotted farmyard manure, and split urea applications instead of one heavy dose.".to_string(),
            Language::Hi => "मात्रा तय करने से पहले मिट्टी की जांच कराएं; संतुलित एनपीके दें, सड़ी हुई गोबर खाद मिलाएं और यूरिया एक साथ देने की बजाय बांटकर दें।".to_string(),
            Language::Hinglish => "Dose fix karne se pehle soil test karayein; balanced NPK dein, sadi hui gobar khad milayein aur urea ek saath dene ki bajaye baant kar dein.".to_string(),
        }
    }

    /// Render the government scheme listing.
    pub fn government_scheme(&self, language: Language) -> String {
        match language {
            Language::En => "Key schemes for farmers: PM-Kisan (₹6,000 per year income support), Kisan Credit Card (crop loans up to ₹3 lakh at subsidised interest), and PM Fasal Bima Yojana (crop insurance against weather loss). Apply through your nearest CSC or bank branch.".to_string(),
            Language::Hi => "किसानों के लिए मुख्य योजनाएं: पीएम-किसान (₹6,000 प्रति वर्ष सहायता), किसान क्रेडिट कार्ड (₹3 लाख तक सस्ता फसली ऋण) और पीएम फसल बीमा योजना (मौसम से नुकसान पर फसल बीमा)। नजदीकी सीएससी या बैंक शाखा से आवेदन करें।".to_string(),
            Language::Hinglish => "Kisano ke liye mukhya yojanayein: PM-Kisan (₹6,000 per saal sahayata), Kisan Credit Card (₹3 lakh tak sasta fasli loan) aur PM Fasal Bima Yojana (mausam se nuksan par fasal bima). Najdiki CSC ya bank branch se apply karein.".to_string(),
        }
    }

    /// Render the greeting. One fixed string per language: the greeting set
    /// is finite and identical inputs always produce identical output.
    pub fn greeting(&self, language: Language) -> String {
        match language {
            Language::En => "Hello! I can help you with crop choices, mandi prices, weather, pest control, fertilizers and government schemes. What would you like to know?".to_string(),
            Language::Hi => "नमस्ते! मैं फसल चुनाव, मंडी भाव, मौसम, कीट नियंत्रण, खाद और सरकारी योजनाओं में आपकी मदद कर सकता हूँ। आप क्या जानना चाहेंगे?".to_string(),
            Language::Hinglish => "Namaste! Main fasal chunav, mandi bhav, mausam, keet niyantran, khad aur sarkari yojanaon mein aapki madad kar sakta hoon. Aap kya jaanna chahenge?".to_string(),
        }
    }

    /// Render the default answer for unmatched queries.
    pub fn general(&self, language: Language) -> String {
        match language {
            Language::En => "I did not quite catch that. You can ask me about mandi prices (\"wheat price in Delhi\"), weather, which crop to grow, pest control, fertilizers, or government schemes.".to_string(),
            Language::Hi => "मैं समझ नहीं पाया। आप मुझसे मंडी भाव (\"दिल्ली में गेहूं का भाव\"), मौसम, कौन सी फसल उगाएं, कीट नियंत्रण, खाद या सरकारी योजनाओं के बारे में पूछ सकते हैं।".to_string(),
            Language::Hinglish => "Main samajh nahi paya. Aap mujhse mandi bhav (\"Delhi mein gehu ka bhav\"), mausam, kaun si fasal ugayein, keet control, khad ya sarkari yojana ke baare mein pooch sakte hain.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quote() -> MarketQuote {
        MarketQuote {
            crop: "wheat".to_string(),
            mandi: "Azadpur Mandi".to_string(),
            location: "Delhi".to_string(),
            price_per_quintal: 2310.0,
            change_percent: 1.2,
        }
    }

    fn sample_report() -> WeatherReport {
        WeatherReport {
            location: "Delhi".to_string(),
            temperature_c: 31.0,
            humidity_percent: 55.0,
            condition: "Partly cloudy".to_string(),
        }
    }

    #[test]
    fn test_market_template_mentions_crop_price_and_location() {
        let synth = ResponseSynthesizer::new();
        let text = synth.market_price("wheat", "Delhi", &sample_quote(), Language::En);

        assert!(text.to_lowercase().contains("wheat"));
        assert!(text.contains('₹'));
        assert!(text.contains("Delhi"));
        assert!(text.contains("2275"), "MSP should be included: {}", text);
    }

    #[test]
    fn test_market_template_hindi_uses_display_name() {
        let synth = ResponseSynthesizer::new();
        let text = synth.market_price("wheat", "Delhi", &sample_quote(), Language::Hi);

        assert!(text.contains("गेहूं"));
        assert!(text.contains('₹'));
    }

    #[test]
    fn test_market_template_skips_msp_when_absent() {
        let synth = ResponseSynthesizer::new();
        let quote = MarketQuote {
            crop: "onion".to_string(),
            ..sample_quote()
        };
        let text = synth.market_price("onion", "Delhi", &quote, Language::En);

        assert!(!text.contains("MSP"));
    }

    #[test]
    fn test_weather_template() {
        let synth = ResponseSynthesizer::new();

        let en = synth.weather("Delhi", &sample_report(), Language::En);
        assert!(en.contains("31"));
        assert!(en.contains("55"));
        assert!(en.contains("Partly cloudy"));

        let hi = synth.weather("Delhi", &sample_report(), Language::Hi);
        assert!(hi.contains("आंशिक बादल"));
    }

    #[test]
    fn test_crop_recommendation_uses_region_table() {
        let synth = ResponseSynthesizer::new();

        let delhi = synth.crop_recommendation("Delhi", Language::En);
        assert!(delhi.contains("Rice"));
        assert!(delhi.contains("Wheat"));

        // Unknown locations get the default picks, not an error.
        let other = synth.crop_recommendation("Shimla", Language::En);
        assert!(other.contains("Shimla"));
        assert!(other.contains("Wheat"));
    }

    #[test]
    fn test_pest_and_fertilizer_fall_back_to_generic() {
        let synth = ResponseSynthesizer::new();

        let specific = synth.pest_control(Some("cotton"), Language::En);
        assert!(specific.contains("bollworm"));

        let generic = synth.pest_control(None, Language::En);
        assert!(generic.contains("Krishi Vigyan Kendra"));

        let generic_fert = synth.fertilizer(Some("sugarcane"), Language::Hinglish);
        assert!(generic_fert.contains("soil test"));
    }

    #[test]
    fn test_greeting_is_in_fixed_finite_set() {
        let synth = ResponseSynthesizer::new();

        let all: Vec<String> = Language::ALL
            .iter()
            .map(|language| synth.greeting(*language))
            .collect();
        assert_eq!(all.len(), 3);
        // Same language always yields the same greeting.
        assert_eq!(synth.greeting(Language::En), all[0]);
    }

    #[test]
    fn test_every_template_is_non_empty_for_every_language() {
        let synth = ResponseSynthesizer::new();
        let quote = sample_quote();
        let report = sample_report();

        for language in Language::ALL {
            let rendered = [
                synth.market_price("wheat", "Delhi", &quote, language),
                synth.weather("Delhi", &report, language),
                synth.crop_recommendation("Delhi", language),
                synth.pest_control(Some("wheat"), language),
                synth.pest_control(None, language),
                synth.fertilizer(Some("wheat"), language),
                synth.fertilizer(None, language),
                synth.government_scheme(language),
                synth.greeting(language),
                synth.general(language),
            ];
            for text in rendered {
                assert!(!text.is_empty(), "empty template for {}", language);
            }
        }
    }
}
