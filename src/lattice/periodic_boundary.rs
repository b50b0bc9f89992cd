//! Periodic boundary arithmetic shared by every topology.
//!
//! Minimum-image convention: the representative of `raw mod size` with the
//! smallest magnitude, ties at exactly `size / 2` resolved to the positive
//! branch. Representatives therefore live in `[-(⌈size/2⌉ - 1), ⌊size/2⌋]`.

use std::ops::RangeInclusive;

use crate::math::index_mapper::wrap_component;

/// Bring a coordinate component into `[0, size)`.
#[inline]
pub fn wrap_coordinate(x: i64, size: usize) -> i64 {
    wrap_component(x, size)
}

/// Minimum-image representative of a signed displacement along an axis of `size` sites.
#[inline]
pub fn minimum_image(raw: i64, size: usize) -> i64 {
    let s = size as i64;
    let d = raw.rem_euclid(s);
    if d > s / 2 { d - s } else { d }
}

/// Number of periods added to `raw` to reach its minimum image.
///
/// Positive when the shortest path wraps forward past the upper boundary,
/// negative when it wraps backward past zero.
#[inline]
pub fn winding_number(raw: i64, size: usize) -> i64 {
    (minimum_image(raw, size) - raw) / size as i64
}

/// All minimum-image offsets representable on an axis of `size` sites (exactly `size` values).
pub fn minimum_image_range(size: usize) -> RangeInclusive<i64> {
    let s = size as i64;
    (s / 2 - s + 1)..=(s / 2)
}

/// Wrap every component of `coords` into the lattice box.
pub fn enforce_boundaries(coords: &mut [i64], sizes: &[usize]) {
    debug_assert_eq!(coords.len(), sizes.len(), "Dimensions not matching");
    for (c, &s) in coords.iter_mut().zip(sizes) {
        *c = wrap_coordinate(*c, s);
    }
}

/// Whether every component already lies in `[0, sizes[i])`.
pub fn is_in_boundaries(coords: &[i64], sizes: &[usize]) -> bool {
    coords.len() == sizes.len()
        && coords
            .iter()
            .zip(sizes)
            .all(|(&c, &s)| c >= 0 && (c as usize) < s)
}
