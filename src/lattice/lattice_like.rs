use std::fmt::Debug;

use nalgebra::DVector;
use rand::RngCore;

use crate::interfaces::{Coords, Displacement, SiteIndex, Topology};
use crate::lattice::periodic_boundary;
use crate::math::{index_mapper, pairs};
use crate::{LatticeError, Result};

/// Query contract of a finite periodic lattice.
///
/// Implementors supply the topology-specific primitives (adjacency, per-axis
/// minimum image, winding, random offsets, momenta); everything derivable
/// from the size vector is provided here. Lattices are immutable, so every
/// query can be issued concurrently from several threads.
///
/// Site arguments are preconditions: they must lie in `[0, num_sites)`. This
/// is checked with `debug_assert!`; use [`Lattice::validate_site`] or the
/// `checked_*` methods for an explicit [`LatticeError`].
pub trait Lattice: Debug + Send + Sync {
    fn topology(&self) -> Topology;
    fn size(&self) -> &[usize];
    fn num_sites(&self) -> usize;

    /// Nominal number of nearest neighbours of a site.
    fn coordination(&self) -> usize;

    /// Nearest neighbours of a site, without duplicates and never the site itself.
    fn neighbors(&self, site: SiteIndex) -> &[SiteIndex];

    /// Signed minimum-image displacement from `b` to `a` along one axis.
    fn axis_distance(&self, a: SiteIndex, b: SiteIndex, axis: usize) -> f64;

    /// Winding vector of the minimum-image path from `a` to `b`.
    fn winding(&self, a: SiteIndex, b: SiteIndex) -> Displacement;

    /// Uniformly random offset over the representable minimum-image offsets.
    ///
    /// Entropy comes only from `rng`; a fixed seed gives a fixed sequence.
    fn random_distance(&self, rng: &mut dyn RngCore) -> Displacement;

    /// Allowed momentum associated with a site, in the first Brillouin zone.
    fn momentum(&self, site: SiteIndex) -> DVector<f64>;

    fn dim(&self) -> usize {
        self.size().len()
    }

    fn coordinates(&self, site: SiteIndex) -> Coords {
        debug_assert!(site < self.num_sites(), "site {site} out of range");
        index_mapper::to_coordinates_unchecked(site, self.size())
    }

    /// Flat index of (possibly un-normalised) coordinates.
    fn offset(&self, coords: &[i64]) -> SiteIndex {
        index_mapper::to_index_unchecked(coords, self.size())
    }

    fn checked_coordinates(&self, site: SiteIndex) -> Result<Coords> {
        self.validate_site(site)?;
        Ok(self.coordinates(site))
    }

    fn checked_offset(&self, coords: &[i64]) -> Result<SiteIndex> {
        index_mapper::to_index(coords, self.size())
    }

    fn validate_site(&self, site: SiteIndex) -> Result<()> {
        if site < self.num_sites() {
            Ok(())
        } else {
            Err(LatticeError::OutOfRange {
                index: site,
                num_sites: self.num_sites(),
            })
        }
    }

    fn are_neighbors(&self, a: SiteIndex, b: SiteIndex) -> bool {
        self.neighbors(a).contains(&b)
    }

    fn axis_distance_squared(&self, a: SiteIndex, b: SiteIndex, axis: usize) -> f64 {
        self.axis_distance(a, b, axis).powi(2)
    }

    fn distance_squared(&self, a: SiteIndex, b: SiteIndex) -> f64 {
        (0..self.dim())
            .map(|axis| self.axis_distance_squared(a, b, axis))
            .sum()
    }

    /// Euclidean minimum-image distance.
    fn distance(&self, a: SiteIndex, b: SiteIndex) -> f64 {
        self.distance_squared(a, b).sqrt()
    }

    /// Minimum-image displacement vector, one component per axis.
    fn distance_vector(&self, a: SiteIndex, b: SiteIndex) -> DVector<f64> {
        DVector::from_iterator(
            self.dim(),
            (0..self.dim()).map(|axis| self.axis_distance(a, b, axis)),
        )
    }

    /// Distance between `a` and the periodic copy of `b` shifted by `copy[i]` periods.
    fn copy_distance(&self, a: SiteIndex, b: SiteIndex, copy: &[i64]) -> f64 {
        debug_assert_eq!(copy.len(), self.dim(), "Dimensions not matching");
        let shift = DVector::from_iterator(
            self.dim(),
            copy.iter()
                .zip(self.size())
                .map(|(&n, &s)| (n * s as i64) as f64),
        );
        (self.distance_vector(a, b) + shift).norm()
    }

    fn enforce_boundaries(&self, coords: &mut [i64]) {
        periodic_boundary::enforce_boundaries(coords, self.size());
    }

    fn is_in_boundaries(&self, coords: &[i64]) -> bool {
        periodic_boundary::is_in_boundaries(coords, self.size())
    }

    /// Site reached from `site` by moving along `displacement`, wrapping periodically.
    fn displaced_site(&self, site: SiteIndex, displacement: &[i64]) -> SiteIndex {
        debug_assert_eq!(displacement.len(), self.dim(), "Dimensions not matching");
        let moved: Coords = self
            .coordinates(site)
            .iter()
            .zip(displacement)
            .map(|(c, d)| c + d)
            .collect();
        self.offset(&moved)
    }

    fn num_pairs(&self) -> usize {
        pairs::num_pairs(self.num_sites(), false)
    }

    /// Unique index of the unordered pair `{a, b}` (self pairs included).
    fn pair_index(&self, a: SiteIndex, b: SiteIndex) -> usize {
        pairs::pair_index(a, b, self.num_sites(), false)
    }

    fn pair_sites(&self, pair: usize) -> (SiteIndex, SiteIndex) {
        pairs::pair_from_index(pair, self.num_sites(), false)
    }
}
