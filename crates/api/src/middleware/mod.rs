//! Role-gate middleware extractors.
//!
//! - [`auth::RoleContext`] -- Reads the caller-declared role header.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.
//! - [`rbac::RequireStaff`] -- Requires `director` or `employee`.
//! - [`rbac::RequireViewer`] -- Requires `admin`, `director`, or `employee`.

pub mod auth;
pub mod rbac;
