// src/config/options.rs
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Directory endpoint. Overridable so tests can point the client
    /// at a local mock server.
    pub api_base: String,
    pub fetch: FetchOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            api_base: API_BASE.to_string(),
            fetch: FetchOptions::default(),
        }
    }
}

/// Filter selections for the directory fetch. `None` means the
/// corresponding query parameter is omitted entirely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub region: Option<String>,
    pub category: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            region: Some(DEFAULT_REGION.to_string()),
            category: Some(DEFAULT_CATEGORY.to_string()),
        }
    }
}
