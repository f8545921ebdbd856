//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Filter parameters for listings scoped to a project and/or caregiver
/// (`?projectId=&caregiverId=`). Used by the fund and activity listings.
///
/// Empty values read as absent, so `?projectId=` does not narrow the
/// listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeParams {
    pub project_id: Option<String>,
    pub caregiver_id: Option<String>,
}

impl ScopeParams {
    /// The project filter, if one was supplied.
    pub fn project(&self) -> Option<&str> {
        self.project_id.as_deref().filter(|s| !s.is_empty())
    }

    /// The caregiver filter, if one was supplied.
    pub fn caregiver(&self) -> Option<&str> {
        self.caregiver_id.as_deref().filter(|s| !s.is_empty())
    }
}
