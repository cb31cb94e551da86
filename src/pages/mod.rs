//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; protected pages are wrapped in
//! guards by the route table in `app`, not by the pages themselves.

pub mod dashboard;
pub mod job;
pub mod login;
