//! Repository for the projects collection.

use ciet_core::error::CoreError;
use ciet_core::{ids, provisioning};

use crate::models::project::{CreateProject, Project, ProjectStatus, UpdateProjectStatus};
use crate::repositories::required;
use crate::Store;

/// Domain operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created record (credentials
    /// included).
    ///
    /// `code` must be unique across all projects. The uniqueness check and
    /// the insert run under the collection write lock, so two concurrent
    /// creates with the same code cannot both succeed.
    pub async fn create(store: &Store, input: CreateProject) -> Result<Project, CoreError> {
        let (name, code) = match (required(input.name), required(input.code)) {
            (Some(name), Some(code)) => (name, code),
            _ => return Err(CoreError::Validation("name and code are required".into())),
        };

        let mut projects = store.projects.write().await;
        if projects.iter().any(|p| p.code == code) {
            return Err(CoreError::Conflict("Project code already exists".into()));
        }

        let project = Project {
            id: ids::entity_id(),
            name,
            site_url: provisioning::site_url(&code),
            credentials: provisioning::provision_credentials(&code),
            code,
            program: input.program,
            address: input.address.unwrap_or_default().normalize(),
            director_name: input.director_name,
            active: true,
        };
        projects.push(project.clone());
        Ok(project)
    }

    /// List all projects, optionally filtered by active state.
    ///
    /// The filter applies only when the raw query value is exactly
    /// `"true"` or `"false"`; any other value returns the unfiltered set.
    pub async fn list(store: &Store, active: Option<&str>) -> Vec<Project> {
        let projects = store.projects.read().await;
        match active {
            Some("true") => projects.iter().filter(|p| p.active).cloned().collect(),
            Some("false") => projects.iter().filter(|p| !p.active).cloned().collect(),
            _ => projects.clone(),
        }
    }

    /// Toggle a project's active flag. The sole mutation path after
    /// creation.
    pub async fn set_active(
        store: &Store,
        id: &str,
        input: UpdateProjectStatus,
    ) -> Result<ProjectStatus, CoreError> {
        let mut projects = store.projects.write().await;
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Project",
                id: id.to_string(),
            })?;
        project.active = input.active;
        Ok(ProjectStatus {
            id: project.id.clone(),
            active: project.active,
        })
    }
}
