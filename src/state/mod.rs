//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the plain session model; `session_store` wraps it in a
//! reactive, persisted handle that components receive through context.

pub mod session;
pub mod session_store;
