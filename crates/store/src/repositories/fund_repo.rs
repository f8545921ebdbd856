//! Repository for the funds collection.

use ciet_core::error::CoreError;
use ciet_core::ids;

use crate::models::fund::{CreateFund, Fund, DEFAULT_CURRENCY};
use crate::Store;

/// Domain operations for fund allocations.
pub struct FundRepo;

impl FundRepo {
    /// Allocate a fund from an active project to a caregiver.
    ///
    /// Both references are existence-checked; the caregiver is not
    /// required to belong to the referenced project. An absent reference
    /// never resolves and reports as not found.
    pub async fn allocate(store: &Store, input: CreateFund) -> Result<Fund, CoreError> {
        let project_id = input.project_id.unwrap_or_default();
        let caregiver_id = input.caregiver_id.unwrap_or_default();

        // Lock order: projects, then caregivers, then funds.
        let projects = store.projects.read().await;
        let project = projects
            .iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Project",
                id: project_id.clone(),
            })?;

        let caregivers = store.caregivers.read().await;
        if !caregivers.iter().any(|c| c.id == caregiver_id) {
            return Err(CoreError::NotFound {
                entity: "Caregiver",
                id: caregiver_id,
            });
        }

        if !project.active {
            return Err(CoreError::Forbidden("Project is inactive".into()));
        }

        let amount = match input.amount {
            Some(amount) if amount > 0.0 => amount,
            _ => return Err(CoreError::Validation("amount must be > 0".into())),
        };

        let fund = Fund {
            id: ids::entity_id(),
            project_id,
            caregiver_id,
            amount,
            currency: input
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            purpose: input.purpose,
            allocated_at: chrono::Utc::now(),
        };
        store.funds.write().await.push(fund.clone());
        Ok(fund)
    }

    /// List all funds, optionally scoped by project and/or caregiver.
    pub async fn list(
        store: &Store,
        project_id: Option<&str>,
        caregiver_id: Option<&str>,
    ) -> Vec<Fund> {
        let funds = store.funds.read().await;
        funds
            .iter()
            .filter(|f| project_id.map_or(true, |pid| f.project_id == pid))
            .filter(|f| caregiver_id.map_or(true, |cid| f.caregiver_id == cid))
            .cloned()
            .collect()
    }
}
