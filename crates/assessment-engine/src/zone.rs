//! Zoning codes for the overlay layer
//!
//! Codes follow the standard LEP instrument series: residential (R), rural
//! (RU), business (B), industrial (IN), special purpose (SP), recreation
//! (RE), conservation (C) and waterway (W). Friendly labels cover the zones
//! referenced by the local scheme; other codes fall back to the bare code.

use serde::{Deserialize, Serialize};

/// LEP zoning code for a lot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Zone {
    // Residential
    R1,
    R2,
    R3,
    R4,
    R5,
    // Rural
    RU1,
    RU2,
    RU3,
    RU4,
    RU5,
    RU6,
    // Business
    B1,
    B2,
    B3,
    B4,
    B5,
    B6,
    B7,
    B8,
    // Industrial
    IN1,
    IN2,
    IN3,
    IN4,
    // Special purpose
    SP1,
    SP2,
    SP3,
    // Recreation
    RE1,
    RE2,
    // Conservation
    C1,
    C2,
    C3,
    C4,
    // Waterway
    W1,
    W2,
    W3,
    Unknown,
}

impl Zone {
    /// Parse an exact zone code ("R2", " r3 "). Anything outside the fixed
    /// code table maps to `Unknown` — no prefix or fuzzy matching.
    pub fn from_code(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "R1" => Zone::R1,
            "R2" => Zone::R2,
            "R3" => Zone::R3,
            "R4" => Zone::R4,
            "R5" => Zone::R5,
            "RU1" => Zone::RU1,
            "RU2" => Zone::RU2,
            "RU3" => Zone::RU3,
            "RU4" => Zone::RU4,
            "RU5" => Zone::RU5,
            "RU6" => Zone::RU6,
            "B1" => Zone::B1,
            "B2" => Zone::B2,
            "B3" => Zone::B3,
            "B4" => Zone::B4,
            "B5" => Zone::B5,
            "B6" => Zone::B6,
            "B7" => Zone::B7,
            "B8" => Zone::B8,
            "IN1" => Zone::IN1,
            "IN2" => Zone::IN2,
            "IN3" => Zone::IN3,
            "IN4" => Zone::IN4,
            "SP1" => Zone::SP1,
            "SP2" => Zone::SP2,
            "SP3" => Zone::SP3,
            "RE1" => Zone::RE1,
            "RE2" => Zone::RE2,
            "C1" => Zone::C1,
            "C2" => Zone::C2,
            "C3" => Zone::C3,
            "C4" => Zone::C4,
            "W1" => Zone::W1,
            "W2" => Zone::W2,
            "W3" => Zone::W3,
            _ => Zone::Unknown,
        }
    }

    /// Parse a full scheme label ("R2 Low Density Residential").
    ///
    /// Only the labels evidenced in the local scheme are mapped; add entries
    /// as other councils are onboarded.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "R1 GENERAL RESIDENTIAL" => Some(Zone::R1),
            "R2 LOW DENSITY RESIDENTIAL" => Some(Zone::R2),
            "R3 MEDIUM DENSITY RESIDENTIAL" => Some(Zone::R3),
            "R5 LARGE LOT RESIDENTIAL" => Some(Zone::R5),
            "B1 NEIGHBOURHOOD CENTRE" => Some(Zone::B1),
            "B2 LOCAL CENTRE" => Some(Zone::B2),
            "B4 MIXED USE" => Some(Zone::B4),
            _ => None,
        }
    }

    /// The bare zone code ("R2", "UNKNOWN")
    pub fn code(&self) -> &'static str {
        match self {
            Zone::R1 => "R1",
            Zone::R2 => "R2",
            Zone::R3 => "R3",
            Zone::R4 => "R4",
            Zone::R5 => "R5",
            Zone::RU1 => "RU1",
            Zone::RU2 => "RU2",
            Zone::RU3 => "RU3",
            Zone::RU4 => "RU4",
            Zone::RU5 => "RU5",
            Zone::RU6 => "RU6",
            Zone::B1 => "B1",
            Zone::B2 => "B2",
            Zone::B3 => "B3",
            Zone::B4 => "B4",
            Zone::B5 => "B5",
            Zone::B6 => "B6",
            Zone::B7 => "B7",
            Zone::B8 => "B8",
            Zone::IN1 => "IN1",
            Zone::IN2 => "IN2",
            Zone::IN3 => "IN3",
            Zone::IN4 => "IN4",
            Zone::SP1 => "SP1",
            Zone::SP2 => "SP2",
            Zone::SP3 => "SP3",
            Zone::RE1 => "RE1",
            Zone::RE2 => "RE2",
            Zone::C1 => "C1",
            Zone::C2 => "C2",
            Zone::C3 => "C3",
            Zone::C4 => "C4",
            Zone::W1 => "W1",
            Zone::W2 => "W2",
            Zone::W3 => "W3",
            Zone::Unknown => "UNKNOWN",
        }
    }

    /// Friendly display name, falling back to the bare code for zones the
    /// local scheme doesn't label.
    pub fn name(&self) -> &'static str {
        match self {
            Zone::R1 => "General Residential",
            Zone::R2 => "Low Density Residential",
            Zone::R3 => "Medium Density Residential",
            Zone::R5 => "Large Lot Residential",
            Zone::B1 => "Neighbourhood Centre",
            Zone::B2 => "Local Centre",
            Zone::B4 => "Mixed Use",
            Zone::Unknown => "Unknown zone",
            other => other.code(),
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Zones in which the exempt-development pathway applies.
///
/// The default set is scoped to one council's scheme (Part 10 Division D);
/// other jurisdictions supply their own list when constructing the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermittedZones(Vec<Zone>);

impl PermittedZones {
    pub fn new(zones: impl IntoIterator<Item = Zone>) -> Self {
        Self(zones.into_iter().collect())
    }

    pub fn contains(&self, zone: Zone) -> bool {
        self.0.contains(&zone)
    }

    /// The configured codes as displayed in gate messages ("R1, R2, ...")
    pub fn describe(&self) -> String {
        self.0
            .iter()
            .map(Zone::code)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for PermittedZones {
    fn default() -> Self {
        Self::new([
            Zone::R1,
            Zone::R2,
            Zone::R3,
            Zone::R5,
            Zone::B1,
            Zone::B2,
            Zone::B4,
        ])
    }
}
