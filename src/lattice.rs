//! Lattice module: periodic lattices, their query contract, and the factory.
//!
//! Quick reference
//! - Contract: [`Lattice`] (neighbors, minimum-image distances, windings, coordinates)
//! - Topologies: [`SquareLattice`] (hypercubic torus; also backs `chain` and `cubic`)
//! - Construction: [`create_lattice`], [`create_lattice_for`]
//! - Boundary arithmetic: [`minimum_image`], [`winding_number`], [`minimum_image_range`]
//!
//! See submodules for full details: [`lattice_like`], [`square_lattice`], [`lattice_factory`], [`periodic_boundary`].

// ======================== MODULE DECLARATIONS ========================
pub mod lattice_factory;
pub mod lattice_like;
pub mod periodic_boundary;
pub mod square_lattice;

mod _tests_lattice_properties;

// ======================== RE-EXPORTED PUBLIC API (curated) ========================
#[doc(inline)]
pub use lattice_like::Lattice;

#[doc(inline)]
pub use square_lattice::SquareLattice;

pub use lattice_factory::{create_lattice, create_lattice_for};

pub use periodic_boundary::{
    enforce_boundaries, is_in_boundaries, minimum_image, minimum_image_range, winding_number,
    wrap_coordinate,
};

/// A convenience prelude for importing common lattice items.
pub mod prelude {
    #[doc(no_inline)]
    pub use super::{Lattice, SquareLattice, create_lattice};
    #[doc(no_inline)]
    pub use crate::interfaces::{Coords, Displacement, SiteIndex, Topology};
}
