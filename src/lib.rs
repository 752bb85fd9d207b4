// Beneficiary Roster - Core Library
// Turns a raw beneficiary JSON array into display-ready entities

pub mod config;
pub mod entities;
pub mod normalizer;
pub mod source;

// Re-export commonly used types
pub use crate::config::RosterConfig;
pub use entities::{Beneficiary, Designation, INVALID_DATE, NOT_AVAILABLE};
pub use normalizer::{
    normalize, decode_record, normalize_record,
    format_date_of_birth, format_address, null_to_empty, filter_not_empty,
    NormalizeError, RawAddress, RawBeneficiary,
};
pub use source::{
    BeneficiaryRepository, BeneficiarySource, FileSource, InlineSource,
    DEFAULT_DATA_FILE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
