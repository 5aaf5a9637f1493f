//! Deterministic work partitioning
//!
//! The histogram engine splits an image into contiguous ranges, one per
//! worker. The split is a pure function of the total size and the worker
//! count, independent of scheduling, so the pixels each worker sees (and
//! therefore every local histogram) are reproducible run to run.

/// A contiguous half-open range of work items.
///
/// Depending on the caller, an item is an image column or a flat pixel
/// index. Ranges produced by [`partition_ranges`] are disjoint and cover
/// exactly `[0, total)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// First item, inclusive
    pub start: usize,
    /// Last item, exclusive
    pub end: usize,
}

impl Partition {
    /// Number of items in the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the range contains no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split `[0, total)` into `workers` contiguous ranges.
///
/// Each range spans `ceil(total / workers)` items except possibly the last
/// ones, which are clamped to the boundary. When `total < workers` the
/// trailing ranges are empty.
pub fn partition_ranges(total: usize, workers: usize) -> Vec<Partition> {
    debug_assert!(workers > 0);
    let section = total.div_ceil(workers);
    (0..workers)
        .map(|i| {
            let start = (i * section).min(total);
            let end = (start + section).min(total);
            Partition { start, end }
        })
        .collect()
}
