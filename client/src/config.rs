//! Backend location for API calls.
//!
//! The WASM bundle has no process environment, so the host is baked in at
//! compile time through `LOGIN_API_HOST` and provided to pages via context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_HOST: &str = "http://127.0.0.1:8000";

/// Base URL of the authentication backend, without a trailing slash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    host: String,
}

impl ApiConfig {
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        Self { host: host.trim_end_matches('/').to_owned() }
    }

    /// Build from the compile-time `LOGIN_API_HOST`, falling back to the local backend.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("LOGIN_API_HOST").unwrap_or(DEFAULT_API_HOST))
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
