//! Role-gate extractors.
//!
//! Each extractor wraps [`RoleContext`] and rejects requests whose
//! declared role is outside the operation's allow set. Use these in route
//! handlers to enforce authorization at the type level; they run before
//! body extraction, so a denied request is never validated.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use ciet_core::error::CoreError;
use ciet_core::roles::{ROLE_ADMIN, ROLE_DIRECTOR, ROLE_EMPLOYEE};

use super::auth::RoleContext;
use crate::error::AppError;
use crate::state::AppState;

/// Rejection message for every role denial.
const INSUFFICIENT_ROLE: &str = "Forbidden: insufficient role";

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(role): RequireAdmin) -> AppResult<Json<()>> {
///     // role.role is guaranteed to be "admin" here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub RoleContext);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = RoleContext::from_request_parts(parts, state).await?;
        if ctx.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                INSUFFICIENT_ROLE.into(),
            )));
        }
        Ok(RequireAdmin(ctx))
    }
}

/// Requires `director` or `employee`. Rejects with 403 Forbidden otherwise.
///
/// Admins are not in this set; enrollment, allocation, and reporting are
/// field-staff operations.
pub struct RequireStaff(pub RoleContext);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = RoleContext::from_request_parts(parts, state).await?;
        if ctx.role != ROLE_DIRECTOR && ctx.role != ROLE_EMPLOYEE {
            return Err(AppError::Core(CoreError::Forbidden(
                INSUFFICIENT_ROLE.into(),
            )));
        }
        Ok(RequireStaff(ctx))
    }
}

/// Requires `admin`, `director`, or `employee` (any role but `guest`).
/// Rejects with 403 Forbidden otherwise.
pub struct RequireViewer(pub RoleContext);

impl FromRequestParts<AppState> for RequireViewer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = RoleContext::from_request_parts(parts, state).await?;
        if ctx.role != ROLE_ADMIN && ctx.role != ROLE_DIRECTOR && ctx.role != ROLE_EMPLOYEE {
            return Err(AppError::Core(CoreError::Forbidden(
                INSUFFICIENT_ROLE.into(),
            )));
        }
        Ok(RequireViewer(ctx))
    }
}
