//! Networking modules for the static content endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the manifest and body fetches, `types` defines the
//! manifest schema and fetch errors shared with state and components.

pub mod api;
pub mod types;
