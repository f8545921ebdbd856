//! Repository for the activities collection.

use ciet_core::error::CoreError;
use ciet_core::ids;

use crate::models::activity::{Activity, CreateActivity, INITIAL_STATUS};
use crate::repositories::required;
use crate::Store;

/// Domain operations for activity reports.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Record a reported activity against a project and caregiver.
    ///
    /// Unlike fund allocation, reporting does not require the referenced
    /// project to be active. Both references are existence-checked only.
    pub async fn report(store: &Store, input: CreateActivity) -> Result<Activity, CoreError> {
        let project_id = input.project_id.unwrap_or_default();
        let caregiver_id = input.caregiver_id.unwrap_or_default();

        // Lock order: projects, then caregivers, then activities.
        let projects = store.projects.read().await;
        if !projects.iter().any(|p| p.id == project_id) {
            return Err(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            });
        }

        let caregivers = store.caregivers.read().await;
        if !caregivers.iter().any(|c| c.id == caregiver_id) {
            return Err(CoreError::NotFound {
                entity: "Caregiver",
                id: caregiver_id,
            });
        }

        let title = required(input.title)
            .ok_or_else(|| CoreError::Validation("title is required".into()))?;

        let activity = Activity {
            id: ids::entity_id(),
            project_id,
            caregiver_id,
            title,
            description: input.description,
            evidence_urls: input.evidence_urls.unwrap_or_default(),
            amount_spent: input.amount_spent.unwrap_or(0.0),
            status: input.status.unwrap_or_else(|| INITIAL_STATUS.to_string()),
            reported_at: chrono::Utc::now(),
        };
        store.activities.write().await.push(activity.clone());
        Ok(activity)
    }

    /// List all activities, optionally scoped by project and/or caregiver.
    pub async fn list(
        store: &Store,
        project_id: Option<&str>,
        caregiver_id: Option<&str>,
    ) -> Vec<Activity> {
        let activities = store.activities.read().await;
        activities
            .iter()
            .filter(|a| project_id.map_or(true, |pid| a.project_id == pid))
            .filter(|a| caregiver_id.map_or(true, |cid| a.caregiver_id == cid))
            .cloned()
            .collect()
    }
}
