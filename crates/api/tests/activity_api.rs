//! HTTP-level integration tests for the `/api/activities` endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use ciet_store::Store;
use common::{body_json, get_as, patch_json_as, post_json_as};
use serde_json::json;

/// Create a project and an enrolled caregiver, returning both ids.
async fn seed_enrollment(store: &Arc<Store>) -> (String, String) {
    let app = common::build_app_with_store(store.clone());
    let project = body_json(
        post_json_as(
            app,
            "/api/projects",
            "admin",
            json!({"name": "Alpha", "code": "ALP"}),
        )
        .await,
    )
    .await;
    let project_id = project["id"].as_str().unwrap().to_string();

    let app = common::build_app_with_store(store.clone());
    let caregiver = body_json(
        post_json_as(
            app,
            "/api/caregivers",
            "director",
            json!({"fullName": "Jane Doe", "projectId": project_id}),
        )
        .await,
    )
    .await;
    let caregiver_id = caregiver["id"].as_str().unwrap().to_string();

    (project_id, caregiver_id)
}

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn report_applies_defaults() {
    let store = Arc::new(Store::new());
    let (project_id, caregiver_id) = seed_enrollment(&store).await;

    let app = common::build_app_with_store(store);
    let response = post_json_as(
        app,
        "/api/activities",
        "employee",
        json!({
            "projectId": project_id,
            "caregiverId": caregiver_id,
            "title": "School fees paid"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let activity = body_json(response).await;
    assert_eq!(activity["title"], "School fees paid");
    assert_eq!(activity["status"], "Submitted");
    assert_eq!(activity["amountSpent"], 0.0);
    assert_eq!(activity["evidenceUrls"].as_array().unwrap().len(), 0);
    assert!(activity["reportedAt"].is_string());
}

#[tokio::test]
async fn report_keeps_caller_supplied_fields() {
    let store = Arc::new(Store::new());
    let (project_id, caregiver_id) = seed_enrollment(&store).await;

    let app = common::build_app_with_store(store);
    let response = post_json_as(
        app,
        "/api/activities",
        "director",
        json!({
            "projectId": project_id,
            "caregiverId": caregiver_id,
            "title": "Uniforms bought",
            "description": "Two sets per child",
            "evidenceUrls": ["https://example.org/receipt.jpg"],
            "amountSpent": 42.5,
            "status": "Reviewed"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let activity = body_json(response).await;
    assert_eq!(activity["status"], "Reviewed");
    assert_eq!(activity["amountSpent"], 42.5);
    assert_eq!(activity["evidenceUrls"][0], "https://example.org/receipt.jpg");
}

#[tokio::test]
async fn missing_title_returns_400() {
    let store = Arc::new(Store::new());
    let (project_id, caregiver_id) = seed_enrollment(&store).await;

    let app = common::build_app_with_store(store);
    let response = post_json_as(
        app,
        "/api/activities",
        "employee",
        json!({"projectId": project_id, "caregiverId": caregiver_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "title is required");
}

#[tokio::test]
async fn unknown_references_return_404() {
    let store = Arc::new(Store::new());
    let (project_id, _caregiver_id) = seed_enrollment(&store).await;

    let app = common::build_app_with_store(store);
    let response = post_json_as(
        app,
        "/api/activities",
        "employee",
        json!({"projectId": project_id, "caregiverId": "missing", "title": "X"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reporting_against_inactive_project_is_allowed() {
    let store = Arc::new(Store::new());
    let (project_id, caregiver_id) = seed_enrollment(&store).await;

    let app = common::build_app_with_store(store.clone());
    patch_json_as(
        app,
        &format!("/api/projects/{project_id}/status"),
        "admin",
        json!({"active": false}),
    )
    .await;

    // Fund allocation would be rejected here; reporting is not.
    let app = common::build_app_with_store(store);
    let response = post_json_as(
        app,
        "/api/activities",
        "employee",
        json!({"projectId": project_id, "caregiverId": caregiver_id, "title": "Late report"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Role gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admins_and_guests_cannot_report() {
    for role in ["admin", "guest"] {
        let app = common::build_app();
        let response = post_json_as(app, "/api/activities", role, json!({})).await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN, "role: {role}");
        let json = body_json(response).await;
        assert_eq!(json["error"], "Forbidden: insufficient role");
    }
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn listing_filters_by_caregiver() {
    let store = Arc::new(Store::new());
    let (project_id, caregiver_id) = seed_enrollment(&store).await;

    let app = common::build_app_with_store(store.clone());
    post_json_as(
        app,
        "/api/activities",
        "employee",
        json!({"projectId": project_id, "caregiverId": caregiver_id, "title": "First"}),
    )
    .await;

    let app = common::build_app_with_store(store.clone());
    let scoped = body_json(
        get_as(
            app,
            &format!("/api/activities?caregiverId={caregiver_id}"),
            "director",
        )
        .await,
    )
    .await;
    assert_eq!(scoped.as_array().unwrap().len(), 1);

    let app = common::build_app_with_store(store);
    let none = body_json(get_as(app, "/api/activities?caregiverId=missing", "director").await)
        .await;
    assert!(none.as_array().unwrap().is_empty());
}
