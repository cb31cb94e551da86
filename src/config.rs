//! Client configuration.
//!
//! A browser bundle has no process environment, so overrides are read at
//! compile time with `option_env!`:
//! - `JOBCONNECT_API_BASE_URL`: API base address (default `http://localhost:8000/api`)
//! - `JOBCONNECT_REQUEST_TIMEOUT_MS`: per-request timeout (default 10000)
//!
//! Malformed values fall back to the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::state::session_store::DEFAULT_STORAGE_KEY;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base address without a trailing slash.
    pub api_base_url: String,
    pub request_timeout: Duration,
    /// `localStorage` key for the persisted session.
    pub storage_key: String,
    /// Where guards send unauthenticated visitors.
    pub login_route: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            login_route: DEFAULT_LOGIN_ROUTE.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment overrides.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("JOBCONNECT_API_BASE_URL"),
            option_env!("JOBCONNECT_REQUEST_TIMEOUT_MS"),
        )
    }

    fn from_values(base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base_url = base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or(defaults.api_base_url.clone(), normalize_base_url);
        let request_timeout = timeout_ms
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map_or(defaults.request_timeout, Duration::from_millis);
        Self { api_base_url, request_timeout, ..defaults }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}
