//! Networking modules for the authentication backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and `types` defines the wire schema.

pub mod api;
pub mod types;
