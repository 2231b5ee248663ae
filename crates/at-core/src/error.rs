//! Framework error type.
//!
//! Sub-crates define their own error enums (`GridError`, `AgentError`, …) and
//! wrap `CoreError` as one variant where they need it.

use thiserror::Error;

/// The top-level error type for `at-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `at-core`.
pub type CoreResult<T> = Result<T, CoreError>;
