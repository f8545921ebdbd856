//! Role extraction from the caller-declared role header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use ciet_core::roles;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the caller's asserted role name.
pub const ROLE_HEADER: &str = "x-user-role";

/// The caller's declared role for this request.
///
/// This is advisory access control: the role is caller-asserted and not
/// verified against any credential store. A missing or unreadable header
/// resolves to `guest`. An authentication layer producing verified claims
/// could replace this extractor without touching the role-gate extractors
/// in [`crate::middleware::rbac`].
#[derive(Debug, Clone)]
pub struct RoleContext {
    /// Normalized (lowercased) role name.
    pub role: String,
}

impl FromRequestParts<AppState> for RoleContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let declared = parts
            .headers
            .get(ROLE_HEADER)
            .and_then(|v| v.to_str().ok());

        Ok(RoleContext {
            role: roles::resolve(declared),
        })
    }
}
