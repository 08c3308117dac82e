//! Error types for suite operations.
//!
//! Every failure a scenario can hit maps onto one [`SuiteError`] variant:
//! - Transport failures (no response received)
//! - Status code mismatches
//! - Schema validation failures
//! - Field equality mismatches on echoed values
//! - Configuration problems in the session fixture
//!
//! # Example
//!
//! ```rust
//! use reqres_api_suite::{SuiteError, SuiteResult};
//! use reqres_api_suite::error::ErrorCategory;
//!
//! fn check(status: u16) -> SuiteResult<()> {
//!     if status != 200 {
//!         return Err(SuiteError::status_mismatch(200, status, ""));
//!     }
//!     Ok(())
//! }
//!
//! let err = check(404).unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Assertion);
//! ```

use crate::logging::{log_error, log_warn};
use std::fmt;
use thiserror::Error;

/// Longest response body excerpt kept in a [`SuiteError::StatusMismatch`].
const BODY_EXCERPT_LIMIT: usize = 512;

/// High-level categorization of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The suite itself is misconfigured (bad base URL, bad header value).
    Configuration,

    /// No usable response came back from the service.
    Transport,

    /// A response came back but did not meet the scenario's expectations.
    Assertion,
}

/// One failed keyword from a schema validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON pointer to the offending value, `""` for the document root.
    pub path: String,
    /// Validator message, e.g. `"avatar" is a required property`.
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        write!(f, "at {path}: {}", self.message)
    }
}

/// Convenient result type for suite operations.
pub type SuiteResult<T> = std::result::Result<T, SuiteError>;

/// Errors that can occur while running a scenario.
///
/// Use the constructor methods, which log the error at creation:
///
/// ```rust
/// use reqres_api_suite::SuiteError;
///
/// let err = SuiteError::field_mismatch("job", "leader", "follower");
/// assert!(err.to_string().contains("expected \"leader\""));
/// ```
///
/// | Variant | Category |
/// |---------|----------|
/// | `ConfigurationError` | Configuration |
/// | `RequestFailed` | Transport |
/// | `ResponseParsingError` | Assertion |
/// | `StatusMismatch` | Assertion |
/// | `SchemaValidationFailed` | Assertion |
/// | `MissingField` | Assertion |
/// | `FieldMismatch` | Assertion |
/// | `UnexpectedBody` | Assertion |
#[derive(Error, Debug)]
pub enum SuiteError {
    /// Suite configuration is invalid.
    #[error("Suite configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP request produced no response.
    #[error("{method} {url} failed: {source}")]
    RequestFailed {
        /// HTTP method of the failed request.
        method: String,
        /// Fully resolved URL.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read or decoded as JSON.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },

    /// The response status differs from the scenario's expected literal.
    #[error("Unexpected status code: expected {expected}, got {actual} (body: {body})")]
    StatusMismatch {
        /// Status the scenario asserts.
        expected: u16,
        /// Status the service returned.
        actual: u16,
        /// Leading part of the response body, for diagnosis.
        body: String,
    },

    /// The response body does not satisfy its declared schema.
    #[error("Response does not match {schema}: {}", join_violations(.violations))]
    SchemaValidationFailed {
        /// Schema name, e.g. `LIST_USER_SCHEMA`.
        schema: &'static str,
        /// Every failing key or type.
        violations: Vec<SchemaViolation>,
    },

    /// A key the scenario reads directly is absent from the body.
    #[error("Response is missing required field '{field}'")]
    MissingField {
        /// Name of the absent key.
        field: String,
    },

    /// An echoed field differs from the submitted value.
    #[error("Field '{field}' mismatch: expected {expected:?}, got {actual:?}")]
    FieldMismatch {
        /// Name of the compared key.
        field: String,
        /// Submitted value.
        expected: String,
        /// Echoed value.
        actual: String,
    },

    /// A response that must be empty carried a body.
    #[error("Expected an empty response body, got {len} bytes")]
    UnexpectedBody {
        /// Body length in bytes.
        len: usize,
    },
}

fn join_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl SuiteError {
    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Configuration,
            Self::RequestFailed { .. } => ErrorCategory::Transport,
            Self::ResponseParsingError { .. }
            | Self::StatusMismatch { .. }
            | Self::SchemaValidationFailed { .. }
            | Self::MissingField { .. }
            | Self::FieldMismatch { .. }
            | Self::UnexpectedBody { .. } => ErrorCategory::Assertion,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Suite configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn request_failed(
        method: impl Into<String>,
        url: impl Into<String>,
        source: reqwest::Error,
    ) -> Self {
        let method = method.into();
        let url = url.into();
        log_error!(
            error_type = "request_failed",
            method = %method,
            url = %url,
            is_connect = source.is_connect(),
            is_timeout = source.is_timeout(),
            error = %source,
            "HTTP request failed"
        );
        Self::RequestFailed {
            method,
            url,
            source,
        }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "Response body invalid"
        );
        Self::ResponseParsingError { message }
    }

    pub fn status_mismatch(expected: u16, actual: u16, body: &str) -> Self {
        let body = excerpt(body);
        log_warn!(
            error_type = "status_mismatch",
            expected,
            actual,
            body = %body,
            "Unexpected status code"
        );
        Self::StatusMismatch {
            expected,
            actual,
            body,
        }
    }

    pub fn schema_validation_failed(
        schema: &'static str,
        violations: Vec<SchemaViolation>,
    ) -> Self {
        log_warn!(
            error_type = "schema_validation_failed",
            schema,
            violation_count = violations.len(),
            first_violation = %violations.first().map(ToString::to_string).unwrap_or_default(),
            "Response schema validation failed"
        );
        Self::SchemaValidationFailed { schema, violations }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        log_warn!(
            error_type = "missing_field",
            field = %field,
            "Response missing required field"
        );
        Self::MissingField { field }
    }

    pub fn field_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        let field = field.into();
        let expected = expected.into();
        let actual = actual.into();
        log_warn!(
            error_type = "field_mismatch",
            field = %field,
            expected = %expected,
            actual = %actual,
            "Echoed field differs from submitted value"
        );
        Self::FieldMismatch {
            field,
            expected,
            actual,
        }
    }

    pub fn unexpected_body(len: usize) -> Self {
        log_warn!(
            error_type = "unexpected_body",
            len,
            "Response body should be empty"
        );
        Self::UnexpectedBody { len }
    }
}

/// Truncate on a char boundary so multi-byte bodies never split.
fn excerpt(body: &str) -> String {
    if body.len() <= BODY_EXCERPT_LIMIT {
        return body.to_string();
    }
    let mut end = BODY_EXCERPT_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
