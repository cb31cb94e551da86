//! Networking modules for the Job Connect REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` attaches the session credential to every outbound call, `api`
//! holds typed endpoint wrappers, `types` defines the wire schema, and
//! `error` the shared failure type.

pub mod api;
pub mod client;
pub mod error;
pub mod types;
