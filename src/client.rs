//! HTTP client bound to the service base URL.
//!
//! [`ApiClient`] resolves relative paths against the configured base URL by
//! concatenation, so a base path prefix such as `/api` is kept:
//!
//! ```rust
//! use reqres_api_suite::{ApiClient, SuiteConfig};
//!
//! # fn example() -> reqres_api_suite::SuiteResult<()> {
//! let client = ApiClient::new(&SuiteConfig::with_base_url("https://reqres.in/api/"))?;
//! assert_eq!(client.url("/users?page=2"), "https://reqres.in/api/users?page=2");
//! # Ok(())
//! # }
//! ```
//!
//! Every call buffers the whole response into an [`ApiResponse`], so status
//! and body assertions can run one after another without further I/O.

use crate::config::{SuiteConfig, API_KEY_HEADER};
use crate::error::{SuiteError, SuiteResult};
use crate::logging::log_debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

/// Shared HTTP client for scenario requests
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::ConfigurationError`] if:
    /// - The configuration fails validation
    /// - The API key is not a valid header value
    /// - The underlying HTTP client cannot be built
    pub fn new(config: &SuiteConfig) -> SuiteResult<Self> {
        config.validate()?;

        let headers = Self::build_default_headers(config.api_key.as_deref())?;

        // Each #[tokio::test] owns its runtime; pooled connections would be
        // bound to whichever runtime opened them.
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| {
                SuiteError::configuration_error(format!("Failed to build HTTP client: {e}"))
            })?;

        log_debug!(
            base_url = %config.base_url,
            has_api_key = config.api_key.is_some(),
            "API client initialized"
        );

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build headers sent with every request
    pub fn build_default_headers(api_key: Option<&str>) -> SuiteResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = api_key {
            headers.insert(
                HeaderName::from_static(API_KEY_HEADER),
                HeaderValue::from_str(key).map_err(|e| {
                    SuiteError::configuration_error(format!("Invalid API key format: {e}"))
                })?,
            );
        }

        Ok(headers)
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a relative path (with optional query) against the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get(&self, path: &str) -> SuiteResult<ApiResponse> {
        self.send(Method::GET, path, None::<&()>).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> SuiteResult<ApiResponse> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> SuiteResult<ApiResponse> {
        self.send(Method::DELETE, path, None::<&()>).await
    }

    /// Execute a single HTTP request and buffer the response
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> SuiteResult<ApiResponse> {
        let url = self.url(path);
        let started = Instant::now();

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SuiteError::request_failed(method.as_str(), &url, e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            SuiteError::response_parsing_error(format!(
                "Failed to read response body from {method} {url}: {e}"
            ))
        })?;

        log_debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            body_len = body.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "HTTP exchange completed"
        );

        Ok(ApiResponse {
            method,
            url,
            status,
            body,
        })
    }
}

/// Fully buffered HTTP response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub method: Method,
    pub url: String,
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Fail unless the status equals `expected`
    pub fn expect_status(&self, expected: u16) -> SuiteResult<()> {
        if self.status_code() != expected {
            return Err(SuiteError::status_mismatch(
                expected,
                self.status_code(),
                &self.body,
            ));
        }
        Ok(())
    }

    /// Fail unless the body is empty
    pub fn expect_empty_body(&self) -> SuiteResult<()> {
        if !self.body.is_empty() {
            return Err(SuiteError::unexpected_body(self.body.len()));
        }
        Ok(())
    }

    /// Parse the body as untyped JSON
    pub fn json(&self) -> SuiteResult<Value> {
        self.json_as()
    }

    /// Parse the body into a typed view
    pub fn json_as<T: DeserializeOwned>(&self) -> SuiteResult<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            SuiteError::response_parsing_error(format!(
                "Invalid JSON from {} {}: {e}",
                self.method, self.url
            ))
        })
    }
}
