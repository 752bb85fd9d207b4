// Entity Models
//
// Value objects produced by the normalizer. No identity beyond field equality,
// no registry, no versioning: a list of entities lives as long as its caller
// keeps it.

pub mod beneficiary;

pub use beneficiary::{Beneficiary, Designation, INVALID_DATE, NOT_AVAILABLE};
