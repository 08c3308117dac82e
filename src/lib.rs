//! # reqres-api-suite
//!
//! HTTP contract test suite for the reqres.in REST test service.
//!
//! ## Key Features
//!
//! - **Session fixture**: one shared client per test run, base URL from `BASE_URL`
//! - **Schema contracts**: four JSON Schema documents for the read endpoints
//! - **Scenarios**: one function per endpoint check, independent and unordered
//! - **Reporting**: feature/story/step labels as `tracing` spans
//!
//! ## Example
//!
//! ```rust,no_run
//! use reqres_api_suite::{scenarios, session_client, NewUser};
//!
//! # async fn example() -> reqres_api_suite::SuiteResult<()> {
//! let client = session_client()?;
//! scenarios::get_user(client, 2).await?;
//! scenarios::create_user(client, &NewUser::random()).await?;
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod client;
pub mod config;
pub mod error;
pub mod fixture;
pub mod payload;
pub mod reporting;
pub mod scenarios;
pub mod schemas;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use client::{ApiClient, ApiResponse};
pub use config::SuiteConfig;
pub use error::{SuiteError, SuiteResult};
pub use fixture::session_client;
pub use payload::{CreatedUser, NewUser};
pub use schemas::SchemaKind;
