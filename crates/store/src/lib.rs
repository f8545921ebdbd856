//! In-memory entity store for the CIET sponsorship backend.
//!
//! Four independent collections (projects, caregivers, funds, activities)
//! guarded by per-collection `RwLock`s. The repositories in
//! [`repositories`] own all domain validation and run their
//! check-then-insert sequences under the target collection's write lock,
//! so uniqueness and referential checks cannot race. Cross-collection
//! lookups take read locks in a fixed order (projects, then caregivers,
//! then the target collection).

pub mod models;
pub mod repositories;

use tokio::sync::RwLock;

use models::activity::Activity;
use models::caregiver::Caregiver;
use models::fund::Fund;
use models::project::Project;

/// The process-wide entity store.
///
/// Wrap in `Arc` and inject wherever needed; tests create a fresh instance
/// per case for isolation. There is no cross-collection transaction
/// support.
#[derive(Default)]
pub struct Store {
    pub(crate) projects: RwLock<Vec<Project>>,
    pub(crate) caregivers: RwLock<Vec<Caregiver>>,
    pub(crate) funds: RwLock<Vec<Fund>>,
    pub(crate) activities: RwLock<Vec<Activity>>,
}

impl Store {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}
