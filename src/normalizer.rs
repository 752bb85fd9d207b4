// 🧹 Normalizer - raw beneficiary JSON → display-ready entities
//
// Two steps per record:
// 1. Lenient decode into RawBeneficiary (every field optional, wrong types → None)
// 2. Deterministic normalization (defaults, date reformat, address assembly)
//
// Pure and synchronous: no I/O, no logging, no shared state.

use crate::entities::{Beneficiary, INVALID_DATE, NOT_AVAILABLE};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Separator placed between non-empty address parts
pub const ADDRESS_SEPARATOR: &str = ", ";

// ============================================================================
// ERRORS
// ============================================================================

/// Structural failures. Any of these aborts the whole batch.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("beneficiary data is not a valid JSON array: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("record {index} has no beneficiaryAddress object")]
    MissingAddress { index: usize },
}

// ============================================================================
// RAW SHAPES
// ============================================================================

/// One input record before normalization
///
/// Unknown keys are ignored. A key that is missing, `null`, or holds an array
/// or object decodes as `None`. Numbers and booleans are kept as their text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBeneficiary {
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub middle_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bene_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub designation_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub social_security_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone_number: Option<String>,

    /// `None` when the key is missing or does not hold an object
    #[serde(default, deserialize_with = "lenient_address")]
    pub beneficiary_address: Option<RawAddress>,
}

/// Nested `beneficiaryAddress` object
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAddress {
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_line_mailing: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub scnd_line_mailing: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub zip_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub state_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub country: Option<String>,
}

impl RawAddress {
    /// Sub-fields in the order they appear in the assembled address
    pub fn parts(&self) -> [Option<&str>; 6] {
        [
            self.first_line_mailing.as_deref(),
            self.scnd_line_mailing.as_deref(),
            self.city.as_deref(),
            self.zip_code.as_deref(),
            self.state_code.as_deref(),
            self.country.as_deref(),
        ]
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

fn lenient_address<'de, D>(deserializer: D) -> Result<Option<RawAddress>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        object @ Value::Object(_) => RawAddress::deserialize(object)
            .map(Some)
            .map_err(de::Error::custom),
        _ => Ok(None),
    }
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Normalize a JSON array of raw beneficiary records
///
/// Output order and length match the input array. Field-level problems are
/// defaulted; structural problems (bad JSON, a non-object element, a missing
/// address object) fail the whole call.
pub fn normalize(raw_json: &str) -> Result<Vec<Beneficiary>, NormalizeError> {
    let records: Vec<Value> = serde_json::from_str(raw_json)?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let raw = decode_record(index, record)?;
            normalize_record(index, raw)
        })
        .collect()
}

/// Decode one array element into its raw shape
pub fn decode_record(index: usize, record: Value) -> Result<RawBeneficiary, NormalizeError> {
    match record {
        object @ Value::Object(_) => Ok(RawBeneficiary::deserialize(object)?),
        _ => Err(NormalizeError::NotAnObject { index }),
    }
}

/// Turn a decoded record into a [`Beneficiary`]
///
/// `index` is only used to label a missing-address error.
pub fn normalize_record(index: usize, raw: RawBeneficiary) -> Result<Beneficiary, NormalizeError> {
    // Unlike the scalar fields, the address container is not defaulted
    let address = raw
        .beneficiary_address
        .as_ref()
        .ok_or(NormalizeError::MissingAddress { index })?;

    Ok(Beneficiary {
        first_name: or_not_available(raw.first_name),
        last_name: or_not_available(raw.last_name),
        middle_name: raw.middle_name.filter(|m| !is_null_literal(m)),
        bene_type: or_not_available(raw.bene_type),
        designation_code: or_not_available(raw.designation_code),
        ssn: or_not_available(raw.social_security_number),
        dob: format_date_of_birth(raw.date_of_birth.as_deref().unwrap_or(INVALID_DATE)),
        phone: or_not_available(raw.phone_number),
        address: format_address(address),
    })
}

/// Reformat an 8-character `MMDDYYYY` string as `MM/DD/YYYY`
///
/// Only the length is checked. Anything else becomes "Invalid Date".
/// Length counts `char`s, not UTF-16 units, so an emoji counts as one
/// character and slicing never splits a code point.
pub fn format_date_of_birth(dob: &str) -> String {
    let chars: Vec<char> = dob.chars().collect();
    if chars.len() != 8 {
        return INVALID_DATE.to_string();
    }

    let month: String = chars[0..2].iter().collect();
    let day: String = chars[2..4].iter().collect();
    let year: String = chars[4..].iter().collect();
    format!("{}/{}/{}", month, day, year)
}

/// Join the usable address parts with ", "
pub fn format_address(address: &RawAddress) -> String {
    let parts: Vec<&str> = address.parts().into_iter().map(null_to_empty).collect();
    filter_not_empty(parts).join(ADDRESS_SEPARATOR)
}

/// Missing values and the text "null" (any case) become ""
pub fn null_to_empty(value: Option<&str>) -> &str {
    match value {
        Some(v) if !is_null_literal(v) => v,
        _ => "",
    }
}

pub fn filter_not_empty(parts: Vec<&str>) -> Vec<&str> {
    parts.into_iter().filter(|p| !p.is_empty()).collect()
}

fn is_null_literal(value: &str) -> bool {
    value.eq_ignore_ascii_case("null")
}

fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

// ============================================================================
// TESTS
// ============================================================================
