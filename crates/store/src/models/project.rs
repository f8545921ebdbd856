//! Project entity model and DTOs.

use ciet_core::provisioning::ProjectCredentials;
use ciet_core::types::EntityId;
use serde::{Deserialize, Serialize};

use crate::models::address::{Address, AddressInput};

/// A program site with its own activation state and access credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    /// Caller-supplied code, unique across all projects, case-sensitive.
    pub code: String,
    pub program: Option<String>,
    pub address: Address,
    pub director_name: Option<String>,
    /// Gates whether the project can receive new caregivers or funds.
    pub active: bool,
    /// Derived from `code` at creation.
    pub site_url: String,
    /// Generated once at creation, never regenerated.
    pub credentials: ProjectCredentials,
}

/// DTO for creating a new project.
///
/// `name` and `code` are required but modeled as `Option` so their absence
/// is reported as a validation error rather than a deserialization one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: Option<String>,
    pub code: Option<String>,
    pub program: Option<String>,
    pub address: Option<AddressInput>,
    pub director_name: Option<String>,
}

/// DTO for toggling a project's active flag. Omitted values read as `false`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectStatus {
    #[serde(default)]
    pub active: bool,
}

/// Response body for a status toggle.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectStatus {
    pub id: EntityId,
    pub active: bool,
}
