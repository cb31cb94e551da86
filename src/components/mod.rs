//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! `guards` gates route subtrees on the session; `loading_indicator` is the
//! placeholder guards show while the session is still loading.

pub mod guards;
pub mod loading_indicator;
