//! HTTP layer for the NeuroWealth backend.
//!
//! Exposed as a library so integration tests can build the exact router
//! the production binary runs.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
