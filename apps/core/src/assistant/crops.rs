//! Static crop reference table.
//!
//! Read-only, built into the binary, shared by all requests. Keys match the
//! canonical crop names produced by entity extraction.

use serde::{Deserialize, Serialize};

/// Primary growing season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Monsoon sowing (June-July)
    Kharif,
    /// Winter sowing (October-November)
    Rabi,
    /// Summer sowing (March-April)
    Zaid,
    /// Year-round / long duration
    Annual,
}

impl Season {
    pub fn label(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
            Season::Annual => "Annual",
        }
    }
}

/// Irrigation requirement bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterNeed {
    Low,
    Medium,
    High,
}

/// One row of the crop reference table.
#[derive(Debug, Clone, Serialize)]
pub struct CropInfo {
    /// Canonical key ("wheat", "rice", ...).
    pub name: &'static str,
    /// English display name.
    pub display_en: &'static str,
    /// Hindi display name.
    pub display_hi: &'static str,
    pub season: Season,
    /// Typical yield in quintals per acre.
    pub yield_quintal_per_acre: f64,
    /// Government minimum support price in ₹ per quintal, where one exists.
    pub msp_per_quintal: Option<u32>,
    /// Sowing-to-harvest duration in days.
    pub duration_days: u16,
    pub water_need: WaterNeed,
}

static CROPS: &[CropInfo] = &[
    CropInfo {
        name: "wheat",
        display_en: "Wheat",
        display_hi: "गेहूं",
        season: Season::Rabi,
        yield_quintal_per_acre: 18.0,
        msp_per_quintal: Some(2275),
        duration_days: 140,
        water_need: WaterNeed::Medium,
    },
    CropInfo {
        name: "rice",
        display_en: "Rice",
        display_hi: "चावल",
        season: Season::Kharif,
        yield_quintal_per_acre: 22.0,
        msp_per_quintal: Some(2300),
        duration_days: 130,
        water_need: WaterNeed::High,
    },
    CropInfo {
        name: "maize",
        display_en: "Maize",
        display_hi: "मक्का",
        season: Season::Kharif,
        yield_quintal_per_acre: 20.0,
        msp_per_quintal: Some(2090),
        duration_days: 100,
        water_need: WaterNeed::Medium,
    },
    CropInfo {
        name: "cotton",
        display_en: "Cotton",
        display_hi: "कपास",
        season: Season::Kharif,
        yield_quintal_per_acre: 8.0,
        msp_per_quintal: Some(7121),
        duration_days: 170,
        water_need: WaterNeed::Medium,
    },
    CropInfo {
        name: "sugarcane",
        display_en: "Sugarcane",
        display_hi: "गन्ना",
        season: Season::Annual,
        yield_quintal_per_acre: 320.0,
        msp_per_quintal: Some(315),
        duration_days: 360,
        water_need: WaterNeed::High,
    },
    CropInfo {
        name: "soybean",
        display_en: "Soybean",
        display_hi: "सोयाबीन",
        season: Season::Kharif,
        yield_quintal_per_acre: 10.0,
        msp_per_quintal: Some(4600),
        duration_days: 95,
        water_need: WaterNeed::Low,
    },
    CropInfo {
        name: "mustard",
        display_en: "Mustard",
        display_hi: "सरसों",
        season: Season::Rabi,
        yield_quintal_per_acre: 7.0,
        msp_per_quintal: Some(5650),
        duration_days: 120,
        water_need: WaterNeed::Low,
    },
    CropInfo {
        name: "potato",
        display_en: "Potato",
        display_hi: "आलू",
        season: Season::Rabi,
        yield_quintal_per_acre: 90.0,
        msp_per_quintal: None,
        duration_days: 90,
        water_need: WaterNeed::Medium,
    },
    CropInfo {
        name: "onion",
        display_en: "Onion",
        display_hi: "प्याज",
        season: Season::Rabi,
        yield_quintal_per_acre: 100.0,
        msp_per_quintal: None,
        duration_days: 120,
        water_need: WaterNeed::Medium,
    },
    CropInfo {
        name: "tomato",
        display_en: "Tomato",
        display_hi: "टमाटर",
        season: Season::Zaid,
        yield_quintal_per_acre: 110.0,
        msp_per_quintal: None,
        duration_days: 75,
        water_need: WaterNeed::Medium,
    },
];

/// All crops in the reference table.
pub fn all() -> &'static [CropInfo] {
    CROPS
}

/// Look up a crop by its canonical key.
pub fn find(name: &str) -> Option<&'static CropInfo> {
    CROPS.iter().find(|crop| crop.name == name)
}
