//! Handlers for the admin dashboard rollup.

use axum::extract::State;
use axum::Json;
use ciet_store::models::dashboard::DashboardSummary;
use ciet_store::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/dashboard/summary
pub async fn summary(
    RequireAdmin(_role): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardSummary>> {
    let summary = DashboardRepo::summary(&state.store).await;
    Ok(Json(summary))
}
