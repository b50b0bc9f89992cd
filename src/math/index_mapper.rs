use crate::interfaces::{Coords, SiteIndex};
use crate::{LatticeError, Result};

/// Check that a size vector describes a lattice: non-empty, no zero extent.
pub(crate) fn validate_sizes(sizes: &[usize]) -> Result<()> {
    if sizes.is_empty() {
        return Err(LatticeError::InvalidDimension(
            "size vector is empty".to_string(),
        ));
    }
    if let Some(axis) = sizes.iter().position(|&s| s == 0) {
        return Err(LatticeError::InvalidDimension(format!(
            "axis {axis} has zero extent in {sizes:?}"
        )));
    }
    if sizes.iter().any(|&s| s > i64::MAX as usize) {
        return Err(LatticeError::InvalidDimension(format!(
            "axis extent exceeds the coordinate range in {sizes:?}"
        )));
    }
    Ok(())
}

/// Number of sites of a lattice with the given sizes (product of the entries).
pub fn num_sites(sizes: &[usize]) -> Result<usize> {
    validate_sizes(sizes)?;
    sizes
        .iter()
        .try_fold(1usize, |acc, &s| acc.checked_mul(s))
        .ok_or_else(|| {
            LatticeError::InvalidDimension(format!("number of sites of {sizes:?} overflows"))
        })
}

/// Row-major strides: the last axis varies fastest.
///
/// # Panics
///
/// Panics if the product of the sizes overflows `usize`; sizes accepted by
/// [`num_sites`] never do.
pub fn strides(sizes: &[usize]) -> Vec<usize> {
    let mut strides = vec![1usize; sizes.len()];
    for i in (0..sizes.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1]
            .checked_mul(sizes[i + 1])
            .unwrap_or_else(|| panic!("strides of {sizes:?} overflow"));
    }
    strides
}

/// Bring one coordinate component into `[0, size)`.
#[inline]
pub fn wrap_component(x: i64, size: usize) -> i64 {
    x.rem_euclid(size as i64)
}

/// Flat index of a coordinate tuple. Components outside `[0, sizes[i])` are
/// wrapped periodically first.
pub fn to_index(coords: &[i64], sizes: &[usize]) -> Result<SiteIndex> {
    num_sites(sizes)?;
    if coords.len() != sizes.len() {
        return Err(LatticeError::InvalidDimension(format!(
            "coordinate has {} components but the lattice has {} axes",
            coords.len(),
            sizes.len()
        )));
    }
    Ok(to_index_unchecked(coords, sizes))
}

/// Coordinates of a flat index, the inverse of [`to_index`] on normalised coordinates.
pub fn to_coordinates(index: SiteIndex, sizes: &[usize]) -> Result<Coords> {
    let num_sites = num_sites(sizes)?;
    if index >= num_sites {
        return Err(LatticeError::OutOfRange { index, num_sites });
    }
    Ok(to_coordinates_unchecked(index, sizes))
}

#[inline]
pub(crate) fn to_index_unchecked(coords: &[i64], sizes: &[usize]) -> SiteIndex {
    debug_assert_eq!(coords.len(), sizes.len(), "Dimensions not matching");
    coords
        .iter()
        .zip(sizes)
        .fold(0, |index, (&x, &s)| index * s + wrap_component(x, s) as usize)
}

#[inline]
pub(crate) fn to_coordinates_unchecked(mut index: SiteIndex, sizes: &[usize]) -> Coords {
    let mut coords = vec![0; sizes.len()];
    for (c, &s) in coords.iter_mut().zip(sizes).rev() {
        *c = (index % s) as i64;
        index /= s;
    }
    coords
}

/// Single coordinate component of a site, without materialising the full tuple.
#[inline]
pub(crate) fn coordinate_component(
    index: SiteIndex,
    strides: &[usize],
    sizes: &[usize],
    axis: usize,
) -> i64 {
    ((index / strides[axis]) % sizes[axis]) as i64
}
