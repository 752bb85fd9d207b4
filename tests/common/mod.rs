#![allow(dead_code)]
//! Shared fixtures for the integration harnesses.

use serde_json::{json, Map, Value};
use std::path::PathBuf;

/// A fully populated record, matching the bundled data layout
pub fn full_record() -> Value {
    json!({
        "firstName": "John",
        "lastName": "Smith",
        "middleName": "D",
        "beneType": "Spouse",
        "designationCode": "P",
        "socialSecurityNumber": "XXXXX3333",
        "dateOfBirth": "04201979",
        "phoneNumber": "3035555555",
        "beneficiaryAddress": {
            "firstLineMailing": "8939 Road Ave",
            "scndLineMailing": null,
            "city": "Denver",
            "zipCode": "80210",
            "stateCode": "CO",
            "country": "US"
        }
    })
}

/// The smallest record that normalizes: only an empty address object
pub fn minimal_record() -> Value {
    json!({ "beneficiaryAddress": {} })
}

/// Start from `base` and set the given top-level keys
pub fn with_fields(base: Value, fields: &[(&str, Value)]) -> Value {
    let mut map: Map<String, Value> = match base {
        Value::Object(m) => m,
        _ => Map::new(),
    };
    for (key, value) in fields {
        map.insert((*key).to_string(), value.clone());
    }
    Value::Object(map)
}

/// Drop a top-level key from a record
pub fn without_field(base: Value, key: &str) -> Value {
    let mut base = base;
    if let Value::Object(map) = &mut base {
        map.remove(key);
    }
    base
}

/// Serialize records as the JSON array text the normalizer consumes
pub fn array_text(records: &[Value]) -> String {
    Value::Array(records.to_vec()).to_string()
}

/// Path to the sample file shipped in `data/`
pub fn bundled_data_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("Beneficiaries.json")
}
