//! Route definitions for the `/caregivers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::caregiver;
use crate::state::AppState;

/// Routes mounted at `/caregivers`.
///
/// ```text
/// GET    /  -> list    (admin | director | employee)
/// POST   /  -> create  (director | employee)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(caregiver::list).post(caregiver::create))
}
