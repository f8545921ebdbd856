//! Route composition for the `/api` tree.

pub mod activity;
pub mod caregiver;
pub mod dashboard;
pub mod fund;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                liveness (public)
///
/// /projects              list (viewer), create (admin)
/// /projects/{id}/status  activation toggle (admin)
///
/// /caregivers            list (viewer), create (staff)
///
/// /funds                 list (viewer), allocate (staff)
///
/// /activities            list (viewer), report (staff)
///
/// /dashboard/summary     aggregate counts (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/projects", project::router())
        .nest("/caregivers", caregiver::router())
        .nest("/funds", fund::router())
        .nest("/activities", activity::router())
        .nest("/dashboard", dashboard::router())
}
