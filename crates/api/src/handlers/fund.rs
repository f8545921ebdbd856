//! Handlers for the `/funds` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use ciet_store::models::fund::{CreateFund, Fund};
use ciet_store::repositories::FundRepo;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireStaff, RequireViewer};
use crate::query::ScopeParams;
use crate::state::AppState;

/// POST /api/funds
pub async fn allocate(
    RequireStaff(_role): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateFund>,
) -> AppResult<(StatusCode, Json<Fund>)> {
    let fund = FundRepo::allocate(&state.store, input).await?;
    Ok((StatusCode::CREATED, Json(fund)))
}

/// GET /api/funds
pub async fn list(
    RequireViewer(_role): RequireViewer,
    State(state): State<AppState>,
    Query(query): Query<ScopeParams>,
) -> AppResult<Json<Vec<Fund>>> {
    let funds = FundRepo::list(&state.store, query.project(), query.caregiver()).await;
    Ok(Json(funds))
}
