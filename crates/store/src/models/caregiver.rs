//! Caregiver entity model and DTOs.

use ciet_core::types::EntityId;
use serde::{Deserialize, Serialize};

use crate::models::address::{Address, AddressInput, Contact};

/// A program beneficiary/guardian enrolled under one project.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Caregiver {
    pub id: EntityId,
    /// Human-readable reference code (`CG-XXXXXX`), unique across caregivers.
    pub unique_id: String,
    /// Immutable reference to the enrolling project.
    pub project_id: EntityId,
    pub full_name: String,
    pub gender: Option<String>,
    pub dob: Option<String>,
    pub child_name: Option<String>,
    pub child_project_number: Option<String>,
    pub address: Address,
    pub contact: Contact,
    pub photo_url: Option<String>,
}

/// DTO for enrolling a new caregiver.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaregiver {
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<String>,
    pub child_name: Option<String>,
    pub child_project_number: Option<String>,
    pub address: Option<AddressInput>,
    pub contact: Option<Contact>,
    pub photo_url: Option<String>,
    pub project_id: Option<EntityId>,
}
