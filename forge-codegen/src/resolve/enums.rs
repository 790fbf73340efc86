//! Enumerated value decoding from `enum_json`.
//!
//! String columns list labels separated by commas. Integer columns carry a
//! JSON array of `{"key": <int>, "value": <label>}` objects.

use serde::Deserialize;
use tableforge_ir::{EnumKey, EnumValue, ValueKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnumError {
    #[error("enum values are not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("enum values are not supported for {0} columns")]
    Unsupported(&'static str),
}

#[derive(Deserialize)]
struct KeyedValue {
    key: i64,
    value: String,
}

/// Decode the enum values of a column. Empty input yields no values.
pub fn parse_enum_values(kind: ValueKind, raw: &str) -> Result<Vec<EnumValue>, EnumError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    match kind {
        ValueKind::String => Ok(raw
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(|label| EnumValue {
                key: EnumKey::Text(label.to_string()),
                label: label.to_string(),
            })
            .collect()),
        ValueKind::Number => {
            let values: Vec<KeyedValue> = serde_json::from_str(raw)?;
            Ok(values
                .into_iter()
                .map(|v| EnumValue {
                    key: EnumKey::Int(v.key),
                    label: v.value,
                })
                .collect())
        }
        other => Err(EnumError::Unsupported(other.as_str())),
    }
}
