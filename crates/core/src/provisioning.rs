//! Project provisioning: portal site URL and one-time access credentials.
//!
//! Both derivations are functions of the project code. The username is
//! deterministic; the secret is random and generated exactly once at
//! project creation.

use rand::Rng;
use serde::Serialize;

/// Base URL for per-project portal sites.
pub const PORTAL_BASE_URL: &str = "https://portal.ciet.example";

/// Length of the generated credential secret.
pub const SECRET_LENGTH: usize = 10;

/// One-time credentials issued when a project is created.
///
/// Never regenerated after creation; reads do not redact them.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCredentials {
    pub username: String,
    pub password: String,
}

/// Derive the portal site URL for a project code.
pub fn site_url(code: &str) -> String {
    format!("{PORTAL_BASE_URL}/{code}")
}

/// Derive the portal username for a project code.
pub fn portal_username(code: &str) -> String {
    format!("{}_admin", code.to_lowercase())
}

/// Generate the credential pair for a new project.
pub fn provision_credentials(code: &str) -> ProjectCredentials {
    let password: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(SECRET_LENGTH)
        .map(char::from)
        .collect();

    ProjectCredentials {
        username: portal_username(code),
        password,
    }
}
