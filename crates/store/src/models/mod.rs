//! Entity models and DTOs.
//!
//! Stored records derive `Serialize` only; creation DTOs derive
//! `Deserialize` with required-but-checkable fields modeled as `Option`
//! so their absence surfaces as a domain validation error instead of a
//! deserialization failure. Wire field names are camelCase.

pub mod activity;
pub mod address;
pub mod caregiver;
pub mod dashboard;
pub mod fund;
pub mod project;
