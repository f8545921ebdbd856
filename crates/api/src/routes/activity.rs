//! Route definitions for the `/activities` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Routes mounted at `/activities`.
///
/// ```text
/// GET    /  -> list    (admin | director | employee)
/// POST   /  -> report  (director | employee)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(activity::list).post(activity::report))
}
