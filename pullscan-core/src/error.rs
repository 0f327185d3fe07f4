//! Structured error types for the scan pipeline.
//!
//! Core precondition failures live here. External I/O failures (network,
//! CSV parsing) are a separate taxonomy in `pullscan-cli` so callers can
//! react differently: a fetch failure is retryable, a short series is not.

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The series is shorter than the largest configured window plus the
    /// 5-bar safety margin. Raised before any indicator is computed.
    #[error("insufficient history: need at least {required} bars, got {got}")]
    InsufficientHistory { required: usize, got: usize },

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
