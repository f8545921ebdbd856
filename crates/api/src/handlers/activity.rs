//! Handlers for the `/activities` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use ciet_store::models::activity::{Activity, CreateActivity};
use ciet_store::repositories::ActivityRepo;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireStaff, RequireViewer};
use crate::query::ScopeParams;
use crate::state::AppState;

/// POST /api/activities
pub async fn report(
    RequireStaff(_role): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateActivity>,
) -> AppResult<(StatusCode, Json<Activity>)> {
    let activity = ActivityRepo::report(&state.store, input).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

/// GET /api/activities
pub async fn list(
    RequireViewer(_role): RequireViewer,
    State(state): State<AppState>,
    Query(query): Query<ScopeParams>,
) -> AppResult<Json<Vec<Activity>>> {
    let activities =
        ActivityRepo::list(&state.store, query.project(), query.caregiver()).await;
    Ok(Json(activities))
}
