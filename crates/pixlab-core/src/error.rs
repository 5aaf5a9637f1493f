//! Error types for pixlab-core
//!
//! Provides a unified error type for buffer construction and validation.
//! Every operation validates its input buffer before touching pixel data,
//! so out-of-bounds access is impossible for callers that stay on the
//! public API.

use thiserror::Error;

/// pixlab core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Zero-sized source image
    #[error("empty input image: {width}x{height}")]
    EmptyInput { width: u32, height: u32 },

    /// Pixel data length does not match width * height * 4
    #[error("invalid buffer length: expected {expected} bytes, got {actual}")]
    InvalidBuffer { expected: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for pixlab core operations
pub type Result<T> = std::result::Result<T, Error>;
