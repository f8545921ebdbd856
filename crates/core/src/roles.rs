//! Well-known role name constants and role normalization.
//!
//! The caller's role arrives as a plain request header; there is no
//! credential check behind it. Matching is case-insensitive and an absent
//! or empty declaration falls back to [`ROLE_GUEST`].

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_DIRECTOR: &str = "director";
pub const ROLE_EMPLOYEE: &str = "employee";
pub const ROLE_GUEST: &str = "guest";

/// Normalize a declared role header value.
///
/// Lowercases the declared value; `None` or an empty string resolves to
/// [`ROLE_GUEST`]. The result is not checked against the known role set --
/// an unrecognized role simply never matches any allow list.
pub fn resolve(declared: Option<&str>) -> String {
    match declared {
        Some(value) if !value.is_empty() => value.to_lowercase(),
        _ => ROLE_GUEST.to_string(),
    }
}
