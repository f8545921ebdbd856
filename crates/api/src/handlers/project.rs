//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ciet_store::models::project::{CreateProject, Project, ProjectStatus, UpdateProjectStatus};
use ciet_store::repositories::ProjectRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireViewer};
use crate::state::AppState;

/// Query parameters for `GET /api/projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
    /// Raw filter value; only the exact strings `"true"` / `"false"`
    /// narrow the listing.
    pub active: Option<String>,
}

/// POST /api/projects
pub async fn create(
    RequireAdmin(_role): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectRepo::create(&state.store, input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
pub async fn list(
    RequireViewer(_role): RequireViewer,
    State(state): State<AppState>,
    Query(query): Query<ProjectListQuery>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.store, query.active.as_deref()).await;
    Ok(Json(projects))
}

/// PATCH /api/projects/{id}/status
pub async fn set_status(
    RequireAdmin(_role): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProjectStatus>,
) -> AppResult<Json<ProjectStatus>> {
    let status = ProjectRepo::set_active(&state.store, &id, input).await?;
    Ok(Json(status))
}
