// 👤 Beneficiary Entity - Display-ready value object
//
// A Beneficiary has no identity beyond its field values: two beneficiaries with
// the same fields are interchangeable. It is built once by the normalizer and
// never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for any required text field the source record did not provide
pub const NOT_AVAILABLE: &str = "N/A";

/// Emitted in place of a date of birth that is not 8 characters long
pub const INVALID_DATE: &str = "Invalid Date";

// ============================================================================
// DESIGNATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Designation {
    /// Code "P"
    Primary,

    /// Code "C"
    Contingent,

    /// Any other code, including the "N/A" placeholder
    Unknown,
}

impl Designation {
    /// Map a raw one-letter designation code to its label
    pub fn from_code(code: &str) -> Self {
        match code {
            "P" => Designation::Primary,
            "C" => Designation::Contingent,
            _ => Designation::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Designation::Primary => "Primary",
            Designation::Contingent => "Contingent",
            Designation::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// BENEFICIARY ENTITY
// ============================================================================

/// Normalized beneficiary, ready for display
///
/// Every field is a plain string except `middle_name`, which stays `None`
/// when the source record had no usable middle name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    pub first_name: String,
    pub last_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    pub bene_type: String,

    /// Raw code as read from the source ("P", "C", ...). The human label is
    /// always derived through [`Beneficiary::designation`].
    pub designation_code: String,

    pub ssn: String,

    /// `MM/DD/YYYY` or [`INVALID_DATE`]
    pub dob: String,

    pub phone: String,

    /// Comma-joined mailing address, empty when no part was usable
    pub address: String,
}

impl Beneficiary {
    pub fn designation(&self) -> Designation {
        Designation::from_code(&self.designation_code)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// One-line summary used by list views
    ///
    /// Example: "John Smith - Spouse - Primary"
    pub fn summary_line(&self) -> String {
        format!(
            "{} - {} - {}",
            self.full_name(),
            self.bene_type,
            self.designation()
        )
    }

    /// Multi-line detail block used when a single beneficiary is selected
    pub fn details(&self) -> String {
        format!(
            "SSN: {}\nDOB: {}\nPhone: {}\nAddress: {}",
            self.ssn, self.dob, self.phone, self.address
        )
    }

    /// Interpret `dob` as a calendar date
    ///
    /// The normalizer only checks length, so "99/99/9999" is a valid `dob`
    /// string but yields `None` here.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.dob, "%m/%d/%Y").ok()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Beneficiary {
        Beneficiary {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            middle_name: None,
            bene_type: "Spouse".to_string(),
            designation_code: "P".to_string(),
            ssn: "123-45-6789".to_string(),
            dob: "12/25/1990".to_string(),
            phone: "5551234567".to_string(),
            address: "123 Main St, Springfield, IL".to_string(),
        }
    }

    #[test]
    fn test_designation_from_code() {
        assert_eq!(Designation::from_code("P"), Designation::Primary);
        assert_eq!(Designation::from_code("C"), Designation::Contingent);
        assert_eq!(Designation::from_code("X"), Designation::Unknown);
        assert_eq!(Designation::from_code(NOT_AVAILABLE), Designation::Unknown);
        // Codes are case sensitive
        assert_eq!(Designation::from_code("p"), Designation::Unknown);
    }

    #[test]
    fn test_designation_labels() {
        assert_eq!(Designation::Primary.as_str(), "Primary");
        assert_eq!(Designation::Contingent.to_string(), "Contingent");
        assert_eq!(Designation::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_designation_follows_code() {
        let mut bene = sample();
        assert_eq!(bene.designation(), Designation::Primary);

        bene.designation_code = "C".to_string();
        assert_eq!(bene.designation(), Designation::Contingent);
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(sample().summary_line(), "John Smith - Spouse - Primary");
    }

    #[test]
    fn test_details() {
        assert_eq!(
            sample().details(),
            "SSN: 123-45-6789\nDOB: 12/25/1990\nPhone: 5551234567\nAddress: 123 Main St, Springfield, IL"
        );
    }

    #[test]
    fn test_birth_date() {
        let bene = sample();
        assert_eq!(bene.birth_date(), NaiveDate::from_ymd_opt(1990, 12, 25));

        let invalid = Beneficiary {
            dob: INVALID_DATE.to_string(),
            ..sample()
        };
        assert_eq!(invalid.birth_date(), None);

        let out_of_calendar = Beneficiary {
            dob: "99/99/9999".to_string(),
            ..sample()
        };
        assert_eq!(out_of_calendar.birth_date(), None);
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(sample(), sample().clone());

        let other = Beneficiary {
            middle_name: Some(String::new()),
            ..sample()
        };
        assert_ne!(sample(), other);
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["designationCode"], "P");
        assert!(json.get("middleName").is_none());
    }
}
