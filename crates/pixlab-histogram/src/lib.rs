//! pixlab-histogram - Parallel intensity histogram computation
//!
//! This crate provides:
//!
//! - Color and grayscale 256-bin histograms over a fixed 4-worker fan-out
//! - A cumulative (running-sum) variant
//! - The deterministic partitioning scheme shared by both scans

pub mod engine;
pub mod partition;

pub use engine::{BINS, WORKER_COUNT, color_histogram, cumulative_histogram, gray_histogram};
pub use partition::{Partition, partition_ranges};
