//! Feature/story/step labelling for scenarios.
//!
//! A [`Scenario`] opens a `scenario` span carrying its feature, story and a
//! run id; each step runs inside a child `step` span and logs its outcome.
//! Which subscriber turns these spans into a report is up to the test binary.
//!
//! ```rust,no_run
//! use reqres_api_suite::reporting::{Feature, Scenario};
//! use reqres_api_suite::{SuiteError, SuiteResult};
//!
//! # async fn example() -> SuiteResult<()> {
//! let scenario = Scenario::new(Feature::UserApi, "Get Users List");
//! let status = scenario.step("Send GET request", async { Ok::<_, SuiteError>(200u16) }).await?;
//! scenario.check("Validate response status code", || {
//!     assert_eq!(status, 200);
//!     Ok(())
//! })?;
//! # Ok(())
//! # }
//! ```

use crate::error::SuiteResult;
use crate::logging::{log_debug, log_info, log_warn};
use std::fmt;
use std::future::Future;
use std::time::Instant;
use tracing::{info_span, Instrument, Span};
use uuid::Uuid;

/// Endpoint family a scenario belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    UserApi,
    ResourceApi,
}

impl Feature {
    pub fn label(self) -> &'static str {
        match self {
            Feature::UserApi => "User API",
            Feature::ResourceApi => "Resource API",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One labelled scenario run
#[derive(Debug)]
pub struct Scenario {
    feature: Feature,
    story: &'static str,
    run_id: Uuid,
    span: Span,
    started: Instant,
}

impl Scenario {
    pub fn new(feature: Feature, story: &'static str) -> Self {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            "scenario",
            feature = feature.label(),
            story,
            run_id = %run_id
        );
        Self {
            feature,
            story,
            run_id,
            span,
            started: Instant::now(),
        }
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn story(&self) -> &'static str {
        self.story
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Run an async step inside its own span
    pub async fn step<T, F>(&self, title: &str, fut: F) -> SuiteResult<T>
    where
        F: Future<Output = SuiteResult<T>>,
    {
        let span = info_span!(parent: &self.span, "step", title);
        let started = Instant::now();
        let result = fut.instrument(span.clone()).await;
        span.in_scope(|| record_step(title, started, &result));
        result
    }

    /// Run a synchronous assertion step inside its own span
    pub fn check<T>(&self, title: &str, f: impl FnOnce() -> SuiteResult<T>) -> SuiteResult<T> {
        let span = info_span!(parent: &self.span, "step", title);
        span.in_scope(|| {
            let started = Instant::now();
            let result = f();
            record_step(title, started, &result);
            result
        })
    }

    /// Log the scenario outcome and hand the result back
    pub fn finish<T>(self, result: SuiteResult<T>) -> SuiteResult<T> {
        let elapsed_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.span.in_scope(|| match &result {
            Ok(_) => log_info!(elapsed_ms, "scenario passed"),
            Err(e) => log_warn!(elapsed_ms, error = %e, "scenario failed"),
        });
        result
    }
}

fn record_step<T>(title: &str, started: Instant, result: &SuiteResult<T>) {
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    match result {
        Ok(_) => log_debug!(title, elapsed_ms, "step passed"),
        Err(e) => log_warn!(title, elapsed_ms, error = %e, "step failed"),
    }
}
