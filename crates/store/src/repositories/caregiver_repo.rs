//! Repository for the caregivers collection.

use ciet_core::error::CoreError;
use ciet_core::ids;

use crate::models::caregiver::{Caregiver, CreateCaregiver};
use crate::repositories::required;
use crate::Store;

/// Domain operations for caregivers.
pub struct CaregiverRepo;

impl CaregiverRepo {
    /// Enroll a new caregiver under an existing, active project.
    ///
    /// The reference code is re-drawn until it does not collide with an
    /// existing caregiver, so `uniqueId` is unique across the collection.
    pub async fn create(store: &Store, input: CreateCaregiver) -> Result<Caregiver, CoreError> {
        let project_id = required(input.project_id)
            .ok_or_else(|| CoreError::Validation("projectId is required".into()))?;

        // Lock order: projects before caregivers.
        let projects = store.projects.read().await;
        let project = projects
            .iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Project",
                id: project_id.clone(),
            })?;
        if !project.active {
            return Err(CoreError::Forbidden("Project is inactive".into()));
        }

        let full_name = required(input.full_name)
            .ok_or_else(|| CoreError::Validation("fullName is required".into()))?;

        let mut caregivers = store.caregivers.write().await;
        let caregiver = Caregiver {
            id: ids::entity_id(),
            unique_id: fresh_reference(&caregivers),
            project_id,
            full_name,
            gender: input.gender,
            dob: input.dob,
            child_name: input.child_name,
            child_project_number: input.child_project_number,
            address: input.address.unwrap_or_default().normalize(),
            contact: input.contact.unwrap_or_default(),
            photo_url: input.photo_url,
        };
        caregivers.push(caregiver.clone());
        Ok(caregiver)
    }

    /// List all caregivers, optionally scoped to one project.
    pub async fn list(store: &Store, project_id: Option<&str>) -> Vec<Caregiver> {
        let caregivers = store.caregivers.read().await;
        match project_id {
            Some(pid) => caregivers
                .iter()
                .filter(|c| c.project_id == pid)
                .cloned()
                .collect(),
            None => caregivers.clone(),
        }
    }
}

/// Draw reference codes until one does not collide with an existing record.
fn fresh_reference(existing: &[Caregiver]) -> String {
    loop {
        let candidate = ids::caregiver_ref();
        if !existing.iter().any(|c| c.unique_id == candidate) {
            return candidate;
        }
        tracing::debug!(%candidate, "caregiver reference collision, re-drawing");
    }
}
