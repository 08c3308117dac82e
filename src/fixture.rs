//! Session-scoped client fixture.
//!
//! The first call resolves [`SuiteConfig::from_env`] and builds the client;
//! later calls return the same instance. Connectivity is not checked here, an
//! unreachable service fails each scenario at its own request.

use crate::client::ApiClient;
use crate::config::SuiteConfig;
use crate::error::SuiteResult;
use crate::logging::log_info;
use once_cell::sync::OnceCell;

static SESSION_CLIENT: OnceCell<ApiClient> = OnceCell::new();

/// Shared client for the whole test session
///
/// # Errors
///
/// Returns [`SuiteError::ConfigurationError`](crate::SuiteError::ConfigurationError)
/// if the environment holds an invalid configuration. A failed initialisation
/// is not cached.
pub fn session_client() -> SuiteResult<&'static ApiClient> {
    SESSION_CLIENT.get_or_try_init(|| {
        let config = SuiteConfig::from_env()?;
        let client = ApiClient::new(&config)?;
        log_info!(base_url = %client.base_url(), "Session client ready");
        Ok(client)
    })
}
