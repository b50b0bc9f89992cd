use log::trace;
use nalgebra::DVector;
use rand::{Rng, RngCore};
use serde::Serialize;
use std::f64::consts::PI;

use crate::Result;
use crate::interfaces::{Displacement, SiteIndex, Topology};
use crate::lattice::lattice_like::Lattice;
use crate::lattice::periodic_boundary::{minimum_image, minimum_image_range, winding_number};
use crate::math::index_mapper::{self, coordinate_component};

/// Hypercubic lattice on a D-dimensional torus.
///
/// Unit lattice vectors along every axis and periodic boundary conditions on
/// each of them; sites are numbered row-major (last axis fastest).
#[derive(Debug, Clone, Serialize)]
pub struct SquareLattice {
    /// Tag this lattice was requested under (square, chain or cubic).
    topology: Topology,
    /// Number of sites along each axis.
    size: Vec<usize>,
    /// Product of the sizes.
    num_sites: usize,
    /// Row-major strides.
    strides: Vec<usize>,
    /// Nearest neighbours of every site.
    neighbors: Vec<Vec<SiteIndex>>,
}

impl SquareLattice {
    /// Construct a square lattice with the given sizes.
    pub fn new(size: &[usize]) -> Result<Self> {
        Self::with_topology(Topology::Square, size)
    }

    /// Construct the hypercubic lattice backing `topology`.
    ///
    /// The dimensionality required by the topology is checked by the factory.
    pub(crate) fn with_topology(topology: Topology, size: &[usize]) -> Result<Self> {
        let num_sites = index_mapper::num_sites(size)?;
        let strides = index_mapper::strides(size);
        let neighbors = Self::create_neighbors(size, num_sites);

        Ok(SquareLattice {
            topology,
            size: size.to_vec(),
            num_sites,
            strides,
            neighbors,
        })
    }

    fn create_neighbors(size: &[usize], num_sites: usize) -> Vec<Vec<SiteIndex>> {
        trace!("Building neighbour table for {num_sites} sites of {size:?}");
        let dim = size.len();

        (0..num_sites)
            .map(|site| {
                let coords = index_mapper::to_coordinates_unchecked(site, size);
                let mut nn = Vec::with_capacity(2 * dim);
                for j in 0..2 * dim {
                    let mut neighbor = coords.clone();
                    neighbor[j / 2] += (j % 2) as i64 * 2 - 1;
                    let offset = index_mapper::to_index_unchecked(&neighbor, size);
                    // size-1 axes map a site onto itself, size-2 axes reach the same site twice
                    if offset != site && !nn.contains(&offset) {
                        nn.push(offset);
                    }
                }
                nn
            })
            .collect()
    }

    #[inline]
    fn component(&self, site: SiteIndex, axis: usize) -> i64 {
        coordinate_component(site, &self.strides, &self.size, axis)
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }
}

impl Lattice for SquareLattice {
    fn topology(&self) -> Topology {
        self.topology
    }

    fn size(&self) -> &[usize] {
        &self.size
    }

    fn num_sites(&self) -> usize {
        self.num_sites
    }

    fn coordination(&self) -> usize {
        2 * self.size.len()
    }

    fn neighbors(&self, site: SiteIndex) -> &[SiteIndex] {
        debug_assert!(site < self.num_sites, "site {site} out of range");
        &self.neighbors[site]
    }

    fn axis_distance(&self, a: SiteIndex, b: SiteIndex, axis: usize) -> f64 {
        debug_assert!(a < self.num_sites && b < self.num_sites, "site out of range");
        debug_assert!(axis < self.size.len(), "axis {axis} out of range");
        let raw = self.component(a, axis) - self.component(b, axis);
        minimum_image(raw, self.size[axis]) as f64
    }

    fn winding(&self, a: SiteIndex, b: SiteIndex) -> Displacement {
        debug_assert!(a < self.num_sites && b < self.num_sites, "site out of range");
        (0..self.size.len())
            .map(|axis| {
                let raw = self.component(b, axis) - self.component(a, axis);
                winding_number(raw, self.size[axis])
            })
            .collect()
    }

    fn random_distance(&self, rng: &mut dyn RngCore) -> Displacement {
        self.size
            .iter()
            .map(|&s| rng.random_range(minimum_image_range(s)))
            .collect()
    }

    fn momentum(&self, site: SiteIndex) -> DVector<f64> {
        debug_assert!(site < self.num_sites, "site {site} out of range");
        DVector::from_iterator(
            self.size.len(),
            self.size.iter().enumerate().map(|(axis, &s)| {
                2.0 * PI * minimum_image(self.component(site, axis), s) as f64 / s as f64
            }),
        )
    }
}
