//! Networking modules for the GraphQL auth boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls, `types` defines the shared wire schema.

pub mod api;
pub mod types;
