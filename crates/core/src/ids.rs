//! Opaque identifier and reference-code generation.
//!
//! Entity ids are collision-resistant random alphanumerics; caregiver
//! reference codes are short human-facing strings whose uniqueness is
//! enforced by the caregiver repository, not by construction.

use rand::Rng;

/// Length of generated entity identifiers.
pub const ENTITY_ID_LENGTH: usize = 12;

/// Length of the random portion of a caregiver reference code.
pub const CAREGIVER_REF_LENGTH: usize = 6;

/// Prefix for human-facing caregiver reference codes.
pub const CAREGIVER_REF_PREFIX: &str = "CG-";

/// Characters used for caregiver reference codes.
const REF_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate an opaque entity identifier ([`ENTITY_ID_LENGTH`] alphanumerics).
pub fn entity_id() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(ENTITY_ID_LENGTH)
        .map(char::from)
        .collect()
}

/// Generate a human-facing caregiver reference code (`CG-XXXXXX`).
///
/// Draws [`CAREGIVER_REF_LENGTH`] characters from uppercase alphanumerics.
/// Callers that need uniqueness must check against existing records and
/// re-draw on collision.
pub fn caregiver_ref() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..CAREGIVER_REF_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..REF_CHARSET.len());
            REF_CHARSET[idx] as char
        })
        .collect();
    format!("{CAREGIVER_REF_PREFIX}{suffix}")
}
