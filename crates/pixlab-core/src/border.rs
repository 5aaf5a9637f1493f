//! Border handling for neighborhood operations
//!
//! All neighborhood filters in this workspace use replicate (clamp-to-edge)
//! border handling: a kernel tap that falls outside the image reads the
//! nearest edge pixel instead. A 1x1 image therefore degenerates to sampling
//! its single pixel for every tap.

/// Clamp signed neighbor coordinates into the valid pixel grid.
///
/// `width` and `height` must be nonzero.
#[inline]
pub fn clamp_to_edge(x: i32, y: i32, width: u32, height: u32) -> (u32, u32) {
    let cx = x.clamp(0, width as i32 - 1) as u32;
    let cy = y.clamp(0, height as i32 - 1) as u32;
    (cx, cy)
}
