//! Route definitions for the `/funds` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::fund;
use crate::state::AppState;

/// Routes mounted at `/funds`.
///
/// ```text
/// GET    /  -> list      (admin | director | employee)
/// POST   /  -> allocate  (director | employee)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(fund::list).post(fund::allocate))
}
