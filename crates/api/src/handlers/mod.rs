//! Request handlers for the sponsorship API.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `ciet_store` and
//! map errors via [`crate::error::AppError`]. Role gating happens in the
//! extractor parameters, before the body is touched.

pub mod activity;
pub mod caregiver;
pub mod dashboard;
pub mod fund;
pub mod project;
