//! Sample property loading
//!
//! Collaborators feed the engine from a bundled sample-data document. The
//! loader validates shape strictly so malformed fixtures fail here, at the
//! data boundary, rather than inside an assessment run.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    #[error("Invalid format: expected {{ \"properties\": [...] }}")]
    InvalidFormat,

    #[error("Missing \"{field}\" in properties[{index}]")]
    MissingField { index: usize, field: &'static str },

    #[error("properties[{index}]: {field} must be {expected}")]
    InvalidField {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },
}

/// One record from the bundled sample-data document
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SampleProperty {
    pub id: String,
    pub label: String,
    pub zone: String,
    pub lot_size_m2: f64,
    pub frontage_m: f64,
    pub corner_lot: bool,
    pub setbacks_m: BTreeMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

const REQUIRED_FIELDS: &[&str] = &[
    "id",
    "label",
    "zone",
    "lot_size_m2",
    "frontage_m",
    "corner_lot",
    "setbacks_m",
];

/// Validate a parsed `{ "properties": [...] }` document into a clean,
/// predictable list of records.
pub fn load_properties(json: &Value) -> Result<Vec<SampleProperty>, PropertyError> {
    let properties = json
        .as_object()
        .and_then(|o| o.get("properties"))
        .and_then(Value::as_array)
        .ok_or(PropertyError::InvalidFormat)?;

    properties
        .iter()
        .enumerate()
        .map(|(index, record)| parse_property(index, record))
        .collect()
}

fn parse_property(index: usize, record: &Value) -> Result<SampleProperty, PropertyError> {
    let obj = record.as_object().ok_or(PropertyError::InvalidField {
        index,
        field: "properties",
        expected: "an object",
    })?;

    for field in REQUIRED_FIELDS.iter().copied() {
        if !obj.contains_key(field) {
            return Err(PropertyError::MissingField { index, field });
        }
    }

    let id = string_field(obj, index, "id")?;
    let label = string_field(obj, index, "label")?;
    let zone = string_field(obj, index, "zone")?;
    let lot_size_m2 = number_field(obj, index, "lot_size_m2")?;
    let frontage_m = number_field(obj, index, "frontage_m")?;
    let corner_lot = bool_field(obj, index, "corner_lot")?;

    let setbacks_m = obj
        .get("setbacks_m")
        .and_then(Value::as_object)
        .ok_or(PropertyError::InvalidField {
            index,
            field: "setbacks_m",
            expected: "an object",
        })?
        .iter()
        .map(|(side, distance)| {
            distance
                .as_f64()
                .map(|d| (side.clone(), d))
                .ok_or(PropertyError::InvalidField {
                    index,
                    field: "setbacks_m",
                    expected: "an object of numbers",
                })
        })
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    Ok(SampleProperty {
        id,
        label,
        zone,
        lot_size_m2,
        frontage_m,
        corner_lot,
        setbacks_m,
        notes: obj.get("notes").and_then(Value::as_str).map(str::to_string),
    })
}

fn string_field(
    obj: &serde_json::Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, PropertyError> {
    obj.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(PropertyError::InvalidField {
            index,
            field,
            expected: "a string",
        })
}

fn number_field(
    obj: &serde_json::Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<f64, PropertyError> {
    obj.get(field)
        .and_then(Value::as_f64)
        .ok_or(PropertyError::InvalidField {
            index,
            field,
            expected: "a number",
        })
}

fn bool_field(
    obj: &serde_json::Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<bool, PropertyError> {
    obj.get(field)
        .and_then(Value::as_bool)
        .ok_or(PropertyError::InvalidField {
            index,
            field,
            expected: "a boolean",
        })
}
