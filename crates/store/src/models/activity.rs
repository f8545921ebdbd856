//! Activity entity model and DTOs.

use ciet_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// Status label applied when a report does not supply one. Status is
/// free-form text; no transition rules exist.
pub const INITIAL_STATUS: &str = "Submitted";

/// A reported use of allocated funds by a caregiver. Immutable after
/// creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: EntityId,
    pub project_id: EntityId,
    pub caregiver_id: EntityId,
    pub title: String,
    pub description: Option<String>,
    pub evidence_urls: Vec<String>,
    pub amount_spent: f64,
    pub status: String,
    pub reported_at: Timestamp,
}

/// DTO for reporting an activity.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivity {
    pub project_id: Option<EntityId>,
    pub caregiver_id: Option<EntityId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub evidence_urls: Option<Vec<String>>,
    pub amount_spent: Option<f64>,
    pub status: Option<String>,
}
