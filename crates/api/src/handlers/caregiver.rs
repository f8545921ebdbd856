//! Handlers for the `/caregivers` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use ciet_store::models::caregiver::{Caregiver, CreateCaregiver};
use ciet_store::repositories::CaregiverRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireStaff, RequireViewer};
use crate::state::AppState;

/// Query parameters for `GET /api/caregivers`. An empty `projectId` reads
/// as absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaregiverListQuery {
    pub project_id: Option<String>,
}

/// POST /api/caregivers
pub async fn create(
    RequireStaff(_role): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateCaregiver>,
) -> AppResult<(StatusCode, Json<Caregiver>)> {
    let caregiver = CaregiverRepo::create(&state.store, input).await?;
    Ok((StatusCode::CREATED, Json(caregiver)))
}

/// GET /api/caregivers
pub async fn list(
    RequireViewer(_role): RequireViewer,
    State(state): State<AppState>,
    Query(query): Query<CaregiverListQuery>,
) -> AppResult<Json<Vec<Caregiver>>> {
    let project_id = query.project_id.as_deref().filter(|s| !s.is_empty());
    let caregivers = CaregiverRepo::list(&state.store, project_id).await;
    Ok(Json(caregivers))
}
