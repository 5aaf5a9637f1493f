//! Parallel histogram computation
//!
//! The image is split into four contiguous ranges (see
//! [`partition_ranges`]), each worker counts intensities into its own local
//! histogram, and the locals are merged sequentially into the caller's
//! array once all workers have finished. No state is shared during the
//! parallel phase, so the result is deterministic and lock-free.
//!
//! Only the red channel is sampled; the source is expected to be gray or
//! red-representative. Callers converting with
//! [`pixlab_core::to_grayscale`] first get a true luminance histogram.

use rayon::prelude::*;

use crate::partition::{Partition, partition_ranges};
use pixlab_core::PixelBuffer;

/// Number of concurrent workers in the scan phase.
pub const WORKER_COUNT: usize = 4;
/// Number of intensity bins.
pub const BINS: usize = 256;

/// Accumulate the intensity histogram of a color image.
///
/// The image is partitioned by column; each worker scans the full height of
/// its columns. Counts are added into `histogram`, which the caller owns
/// and which is never zeroed here, so repeated calls accumulate.
pub fn color_histogram(src: &PixelBuffer, histogram: &mut [u32; BINS]) {
    let partitions = partition_ranges(src.width() as usize, WORKER_COUNT);
    let locals: Vec<[u32; BINS]> = partitions
        .par_iter()
        .map(|p| scan_columns(src, p))
        .collect();
    merge(&locals, histogram);
}

/// Accumulate the intensity histogram of a grayscale image.
///
/// The image is partitioned by flat row-major pixel index. Counts are added
/// into `histogram` exactly as in [`color_histogram`].
pub fn gray_histogram(src: &PixelBuffer, histogram: &mut [u32; BINS]) {
    let partitions = partition_ranges(src.pixel_count(), WORKER_COUNT);
    let locals: Vec<[u32; BINS]> = partitions
        .par_iter()
        .map(|p| scan_indices(src, p))
        .collect();
    merge(&locals, histogram);
}

/// Running-sum (cumulative distribution) of a histogram.
///
/// `cumulative[i]` is the number of pixels with intensity `<= i`; the last
/// bin equals the total pixel count of the scanned image.
pub fn cumulative_histogram(histogram: &[u32; BINS]) -> [u32; BINS] {
    let mut cumulative = [0u32; BINS];
    let mut running = 0u32;
    for (bin, &count) in cumulative.iter_mut().zip(histogram.iter()) {
        running += count;
        *bin = running;
    }
    cumulative
}

fn scan_columns(src: &PixelBuffer, p: &Partition) -> [u32; BINS] {
    let mut local = [0u32; BINS];
    for x in p.start..p.end {
        for y in 0..src.height() {
            local[src.red(x as u32, y) as usize] += 1;
        }
    }
    local
}

fn scan_indices(src: &PixelBuffer, p: &Partition) -> [u32; BINS] {
    let mut local = [0u32; BINS];
    for index in p.start..p.end {
        local[src.red_at_index(index) as usize] += 1;
    }
    local
}

/// Merge per-worker locals into the shared output, bin by bin.
fn merge(locals: &[[u32; BINS]], histogram: &mut [u32; BINS]) {
    for local in locals {
        for (bin, count) in histogram.iter_mut().zip(local.iter()) {
            *bin += count;
        }
    }
}
