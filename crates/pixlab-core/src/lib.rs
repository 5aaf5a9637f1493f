//! pixlab-core - Pixel buffer data model
//!
//! This crate provides the data structures shared by every pixlab filter:
//!
//! - [`PixelBuffer`] - owned 8-bit interleaved RGBA image buffer
//! - [`PixelFormat`] - pixel memory layout
//! - [`border`] - clamp-to-edge coordinate helpers
//! - [`gray`] - luma-weighted grayscale conversion
//!
//! Buffers are value-like: filters never mutate their input, they allocate
//! and return a new buffer of identical dimensions. The length invariant
//! `data.len() == width * height * 4` is established at construction and
//! cannot be broken afterwards, so filter inner loops index without
//! re-checking.

pub mod border;
pub mod buffer;
pub mod error;
pub mod gray;

pub use buffer::{PixelBuffer, PixelFormat};
pub use error::{Error, Result};
pub use gray::to_grayscale;
