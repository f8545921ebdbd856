//! Fund entity model and DTOs.

use ciet_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// Currency code applied when an allocation does not name one.
pub const DEFAULT_CURRENCY: &str = "ETB";

/// A monetary allocation from a project to a caregiver. Immutable after
/// creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub id: EntityId,
    pub project_id: EntityId,
    pub caregiver_id: EntityId,
    pub amount: f64,
    pub currency: String,
    pub purpose: Option<String>,
    pub allocated_at: Timestamp,
}

/// DTO for allocating a fund.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFund {
    pub project_id: Option<EntityId>,
    pub caregiver_id: Option<EntityId>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub purpose: Option<String>,
}
