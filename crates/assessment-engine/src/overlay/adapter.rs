//! Raw attribute-bag adapter
//!
//! Upstream GIS feeds disagree on key names and value formats. Each field is
//! resolved through an ordered list of known key aliases, coerced to its
//! canonical string form, and normalized; anything unrecognized degrades to
//! `Unknown` rather than failing. A best-effort snapshot always comes back.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::OverlaySnapshot;
use crate::hazard::{Bal, FloodCategory};
use crate::zone::Zone;

/// Untyped attribute bag as supplied by a provider
pub type RawOverlays = serde_json::Map<String, Value>;

const ZONE_KEYS: &[&str] = &["zone", "ZONE", "Zone", "ZONE_CODE", "LEP_ZONE"];

const BAL_KEYS: &[&str] = &["bal", "BAL", "BAL_RATING", "BUSHFIRE_BAL"];

const FLOOD_CATEGORY_KEYS: &[&str] = &[
    "floodCategory",
    "FLOOD_CATEGORY",
    "FloodCategory",
    "FLOOD_TAG",
    "FLOOD_CLASS",
    "FLOOD_TYPE",
];

const FLOOD_FLAG_KEYS: &[&str] = &["flood", "FLOOD", "isFloodControlLot", "FLOOD_CONTROL"];

lazy_static! {
    /// Affirmative spellings of the legacy flood-control flag
    static ref FLOOD_FLAG: Regex =
        Regex::new(r"(?i)flood[_\- ]?control|flood[_\- ]?lot|yes|true|1").unwrap();
}

/// Normalize a raw attribute bag into a canonical snapshot. Never fails.
pub fn normalize_overlay(raw: &RawOverlays) -> OverlaySnapshot {
    let zone = lookup(raw, ZONE_KEYS)
        .map(|v| Zone::from_code(&scalar_string(v)))
        .unwrap_or(Zone::Unknown);
    let bal = lookup(raw, BAL_KEYS)
        .map(|v| Bal::from_raw(&scalar_string(v)))
        .unwrap_or(Bal::Unknown);
    let flood_category = lookup(raw, FLOOD_CATEGORY_KEYS)
        .map(|v| FloodCategory::from_raw(&scalar_string(v)))
        .unwrap_or(FloodCategory::Unknown);
    let flood_control_lot = flood_flag(lookup(raw, FLOOD_FLAG_KEYS), flood_category);

    OverlaySnapshot {
        zone,
        bal,
        flood_control_lot,
        flood_category: Some(flood_category),
    }
}

/// First alias key carrying a non-null value.
fn lookup<'a>(raw: &'a RawOverlays, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| raw.get(*k))
        .find(|v| !v.is_null())
}

/// Canonical string form of a scalar value: numbers and booleans render the
/// way the upstream feeds spell them ("12.5", "true").
fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Derive the legacy flood-control flag. A known hazard class forces `true`
/// regardless of the raw flag; a JSON boolean is used directly; strings are
/// matched against the affirmative spellings.
fn flood_flag(raw: Option<&Value>, category: FloodCategory) -> bool {
    if category.is_hazard() {
        return true;
    }
    match raw {
        Some(Value::Bool(b)) => *b,
        Some(value) => FLOOD_FLAG.is_match(&scalar_string(value)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn raw(value: Value) -> RawOverlays {
        value.as_object().expect("test input must be an object").clone()
    }

    #[test]
    fn test_normalizes_common_provider_keys() {
        let snap = normalize_overlay(&raw(json!({
            "ZONE_CODE": "r2",
            "BUSHFIRE_BAL": "12.5",
            "FLOOD_CATEGORY": "flow path",
        })));
        assert_eq!(snap.zone, Zone::R2);
        assert_eq!(snap.bal, Bal::B12_5);
        assert_eq!(snap.flood_category, Some(FloodCategory::FlowPath));
        // A present hazard class forces the legacy flag
        assert!(snap.flood_control_lot);
    }

    #[test]
    fn test_marks_unknowns_when_inputs_missing() {
        let snap = normalize_overlay(&RawOverlays::new());
        assert_eq!(snap.zone, Zone::Unknown);
        assert_eq!(snap.bal, Bal::Unknown);
        assert_eq!(snap.flood_category, Some(FloodCategory::Unknown));
        assert!(!snap.flood_control_lot);
    }

    #[test]
    fn test_bal_variants_and_spacing() {
        assert_eq!(normalize_overlay(&raw(json!({"BAL_RATING": "LOW"}))).bal, Bal::Low);
        assert_eq!(normalize_overlay(&raw(json!({"BAL_RATING": "BALLOW"}))).bal, Bal::Low);
        assert_eq!(normalize_overlay(&raw(json!({"BAL_RATING": "FZ"}))).bal, Bal::Fz);
        assert_eq!(normalize_overlay(&raw(json!({"BAL_RATING": "BALFZ"}))).bal, Bal::Fz);
        assert_eq!(normalize_overlay(&raw(json!({"BUSHFIRE_BAL": "BAL 12.5"}))).bal, Bal::B12_5);
    }

    #[test]
    fn test_numeric_json_values_coerce() {
        assert_eq!(normalize_overlay(&raw(json!({"BAL": 12.5}))).bal, Bal::B12_5);
        assert_eq!(normalize_overlay(&raw(json!({"BAL": 19}))).bal, Bal::B19);
    }

    #[test]
    fn test_flood_flag_from_strings_and_booleans() {
        assert!(normalize_overlay(&raw(json!({"FLOOD_CONTROL": "yes"}))).flood_control_lot);
        assert!(normalize_overlay(&raw(json!({"FLOOD": true}))).flood_control_lot);
        assert!(normalize_overlay(&raw(json!({"FLOOD": 1}))).flood_control_lot);
        assert!(!normalize_overlay(&raw(json!({"FLOOD_CONTROL": "no"}))).flood_control_lot);
        assert!(!normalize_overlay(&raw(json!({"FLOOD": false}))).flood_control_lot);
    }

    #[test]
    fn test_zone_case_spacing_and_unknowns() {
        assert_eq!(normalize_overlay(&raw(json!({"zone": " r3 "}))).zone, Zone::R3);
        assert_eq!(normalize_overlay(&raw(json!({"zone": "X9"}))).zone, Zone::Unknown);
    }

    #[test]
    fn test_null_values_fall_through_to_next_alias() {
        let snap = normalize_overlay(&raw(json!({"zone": null, "ZONE": "R2"})));
        assert_eq!(snap.zone, Zone::R2);
    }

    #[test]
    fn test_alias_priority_order() {
        // "zone" wins over "ZONE_CODE" when both are present
        let snap = normalize_overlay(&raw(json!({"ZONE_CODE": "B4", "zone": "R1"})));
        assert_eq!(snap.zone, Zone::R1);
    }
}
