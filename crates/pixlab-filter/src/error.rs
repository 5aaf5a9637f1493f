//! Error types for pixlab-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error (buffer validation)
    #[error("core error: {0}")]
    Core(#[from] pixlab_core::Error),

    /// Invalid kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
