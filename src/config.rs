use crate::error::{SuiteError, SuiteResult};
use crate::logging::log_debug;

/// Default origin of the service under test.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Environment variable holding the optional service API key.
pub const API_KEY_ENV: &str = "REQRES_API_KEY";

/// Header the service reads the API key from.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Session-wide suite configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Origin every relative scenario path is appended to
    pub base_url: String,
    /// Sent as `x-api-key` on every request when present
    pub api_key: Option<String>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl SuiteConfig {
    /// Create a configuration for an explicit base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration is complete
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::ConfigurationError`] if:
    /// - The base URL is empty or does not parse
    /// - The base URL scheme is not http or https
    /// - The API key is present but blank
    pub fn validate(&self) -> SuiteResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(SuiteError::configuration_error("Base URL is required"));
        }

        let url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            SuiteError::configuration_error(format!("Invalid base URL '{}': {e}", self.base_url))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(SuiteError::configuration_error(format!(
                "Unsupported base URL scheme '{}'. Supported schemes: http, https",
                url.scheme()
            )));
        }

        if matches!(self.api_key.as_deref(), Some(key) if key.trim().is_empty()) {
            return Err(SuiteError::configuration_error("API key must not be blank"));
        }

        Ok(())
    }

    /// Load configuration from the process environment
    /// This is the ONLY method that should access environment variables
    ///
    /// A `.env` file in the working directory is read first; variables that
    /// are already set take precedence over it. Empty variables count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::ConfigurationError`] if the resolved values fail
    /// [`validate`](Self::validate).
    pub fn from_env() -> SuiteResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log_debug!(error = %e, "Ignoring unreadable .env file");
            }
        }

        let mut config = Self::default();
        if let Some(base_url) = non_empty_var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        config.api_key = non_empty_var(API_KEY_ENV);

        config.validate()?;

        log_debug!(
            base_url = %config.base_url,
            has_api_key = config.api_key.is_some(),
            "Suite configuration loaded and validated"
        );

        Ok(config)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
