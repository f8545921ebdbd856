//! CIET sponsorship API server library.
//!
//! Exposes the building blocks (config, state, error handling, role gate,
//! routes) so integration tests and the binary entrypoint can both build
//! the full application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod routes;
pub mod state;
