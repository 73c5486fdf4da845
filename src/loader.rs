//! Measurement record file loading
//!
//! Record files are JSON objects. Numeric fields may be numbers or the raw
//! text typed into a form, and keys may use either the snake_case field names
//! or the input form's camelCase names. Unknown keys are ignored, and a field
//! holding a boolean, array or object is read as not provided.
//!
//! Numeric literals outside the `f64` range (`1e400`) are rejected by
//! `serde_json` while tokenizing, before any field is decoded, so such a
//! document fails as a whole with [`PftError::Json`].

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{PftError, Result};
use crate::models::measurement::{MeasurementRecord, RawMeasurementRecord};

/// Parse a measurement record from JSON text
pub fn parse_record(json: &str) -> Result<MeasurementRecord> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(PftError::invalid_input(format!(
            "expected a JSON object of measurements, found {}",
            json_kind(&value)
        )));
    }

    let raw: RawMeasurementRecord = serde_json::from_value(value)?;
    Ok(raw.normalize())
}

/// Read a measurement record from a JSON file
pub fn load_record(path: &Path) -> Result<MeasurementRecord> {
    log::info!("Loading measurement record from {}", path.display());
    let json = fs::read_to_string(path).map_err(|e| PftError::io(path, e))?;
    parse_record(&json)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
