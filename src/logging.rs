//! Logging utilities for reqres-api-suite
//!
//! Re-exports tracing macros with log_* naming convention for consistency.
//! Spans for scenario/step reporting live in [`crate::reporting`].

// Re-export tracing macros with log_* naming
pub use tracing::{debug as log_debug, error as log_error, info as log_info, warn as log_warn};
