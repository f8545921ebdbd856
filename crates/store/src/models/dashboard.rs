//! Dashboard rollup types.

use serde::Serialize;

/// Aggregate counts over the store, computed by full scans at call time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_projects: usize,
    pub active_projects: usize,
    pub total_caregivers: usize,
    /// Placeholder: no employee entity exists, so this is always zero.
    /// Kept in the payload so dashboard clients have a stable shape.
    pub total_employees: usize,
}
