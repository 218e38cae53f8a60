//! Bushfire and flood hazard ratings for the overlay layer
//!
//! Providers publish these in wildly inconsistent spellings ("12.5", "BALFZ",
//! "flow path"); the `from_raw` normalizers fold every observed variant into
//! the fixed vocabularies and degrade to `Unknown` otherwise.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Bare numeric BAL form, e.g. "12.5" or "19"
    static ref BARE_NUMBER: Regex = Regex::new(r"^\d+(\.\d+)?$").unwrap();

    /// Run of whitespace inside a flood tag
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Bushfire Attack Level site rating, from LOW to FZ (flame zone, most severe)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bal {
    #[serde(rename = "BAL-LOW")]
    Low,
    #[serde(rename = "BAL-12.5")]
    B12_5,
    #[serde(rename = "BAL-19")]
    B19,
    #[serde(rename = "BAL-29")]
    B29,
    #[serde(rename = "BAL-40")]
    B40,
    #[serde(rename = "BAL-FZ")]
    Fz,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Bal {
    /// Normalize a raw provider value ("12.5", "BALLOW", "BAL 19") to a rating.
    pub fn from_raw(raw: &str) -> Self {
        let mut s: String = raw.to_uppercase().split_whitespace().collect();
        if BARE_NUMBER.is_match(&s) {
            s = format!("BAL-{s}");
        }
        if s == "FZ" || s == "BALFZ" {
            s = "BAL-FZ".to_string();
        }
        if !s.starts_with("BAL-") && s.starts_with("BAL") {
            s = format!("BAL-{}", &s[3..]);
        }
        match s.as_str() {
            "BAL-LOW" => Bal::Low,
            "BAL-12.5" => Bal::B12_5,
            "BAL-19" => Bal::B19,
            "BAL-29" => Bal::B29,
            "BAL-40" => Bal::B40,
            "BAL-FZ" => Bal::Fz,
            _ => Bal::Unknown,
        }
    }

    /// The canonical rating code ("BAL-12.5", "UNKNOWN")
    pub fn code(&self) -> &'static str {
        match self {
            Bal::Low => "BAL-LOW",
            Bal::B12_5 => "BAL-12.5",
            Bal::B19 => "BAL-19",
            Bal::B29 => "BAL-29",
            Bal::B40 => "BAL-40",
            Bal::Fz => "BAL-FZ",
            Bal::Unknown => "UNKNOWN",
        }
    }

    /// Ratings that rule out the exempt pathway outright
    pub fn is_extreme(&self) -> bool {
        matches!(self, Bal::B40 | Bal::Fz)
    }
}

impl std::fmt::Display for Bal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Flood hazard class published by the overlay providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloodCategory {
    None,
    FloodControl,
    Floodway,
    FlowPath,
    Storage,
    HighHazard,
    HighRisk,
    Unknown,
}

impl FloodCategory {
    /// Normalize a raw provider tag ("flow path", "FLOODCONTROL") to a class.
    /// Empty and unrecognized inputs both map to `Unknown`.
    pub fn from_raw(raw: &str) -> Self {
        let upper = raw.to_uppercase();
        let s = WHITESPACE_RUN.replace_all(&upper, "_");
        match s.as_ref() {
            "" => FloodCategory::Unknown,
            "NONE" => FloodCategory::None,
            "FLOOD_CONTROL" | "FLOODCONTROL" | "FLOOD_CONTROL_LOT" => FloodCategory::FloodControl,
            "FLOODWAY" | "FLOODWAYAREA" => FloodCategory::Floodway,
            "FLOW_PATH" | "FLOWPATH" => FloodCategory::FlowPath,
            "STORAGE" | "STORDED_AREA" => FloodCategory::Storage,
            "HIGH_HAZARD" | "HIGHHAZARD" => FloodCategory::HighHazard,
            "HIGH_RISK" | "HIGHRISK" => FloodCategory::HighRisk,
            _ => FloodCategory::Unknown,
        }
    }

    /// The canonical class code ("FLOOD_CONTROL", "NONE")
    pub fn code(&self) -> &'static str {
        match self {
            FloodCategory::None => "NONE",
            FloodCategory::FloodControl => "FLOOD_CONTROL",
            FloodCategory::Floodway => "FLOODWAY",
            FloodCategory::FlowPath => "FLOW_PATH",
            FloodCategory::Storage => "STORAGE",
            FloodCategory::HighHazard => "HIGH_HAZARD",
            FloodCategory::HighRisk => "HIGH_RISK",
            FloodCategory::Unknown => "UNKNOWN",
        }
    }

    /// Any class other than NONE/UNKNOWN marks the lot as flood-affected
    pub fn is_hazard(&self) -> bool {
        !matches!(self, FloodCategory::None | FloodCategory::Unknown)
    }
}

impl std::fmt::Display for FloodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
