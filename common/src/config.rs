//! API endpoint configuration.
//!
//! The registration endpoints are fixed paths under a base URL that is
//! supplied by the build environment, so the forms can be pointed at a
//! staging or mock server without touching the code.

/// Name of the build-time environment variable holding the API base URL.
pub const API_BASE_ENV: &str = "IGTF_API_BASE";

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Builds the config from an optional environment value, falling back
    /// to [`DEFAULT_API_BASE`] when it is unset or blank.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(base) if !base.is_empty() => Self::new(base),
            _ => Self::new(DEFAULT_API_BASE),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an endpoint path such as `/api/visitor-registrations/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
