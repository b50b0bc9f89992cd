//! Math module: index bookkeeping and search utilities used by the lattice.
//!
//! Quick reference
//! - Coordinates ⇄ flat index: [`to_index`], [`to_coordinates`], [`strides`], [`num_sites`]
//! - Pair indexing: [`pair_index`], [`pair_from_index`], [`num_pairs`]
//! - Search & sampling: [`upper_bound`], [`choose_between`], [`choose_between_psums`]

// ======================== MODULE DECLARATIONS ========================
pub mod index_mapper;
pub mod pairs;
pub mod search;

// Test modules
mod _tests_index_mapper;

// ======================== RE-EXPORTED PUBLIC API (curated) ========================
pub use index_mapper::{
    num_sites,      // fn(sizes: &[usize]) -> Result<usize> - checked product of the sizes
    strides,        // fn(sizes: &[usize]) -> Vec<usize> - row-major strides
    to_coordinates, // fn(index: usize, sizes: &[usize]) -> Result<Coords> - flat index to coordinates
    to_index,       // fn(coords: &[i64], sizes: &[usize]) -> Result<usize> - wrapped coordinates to flat index
};

pub use pairs::{
    num_pairs,       // fn(maxval: usize, noself: bool) -> usize - number of unordered pairs
    pair_from_index, // fn(pair: usize, maxval: usize, noself: bool) -> (usize, usize)
    pair_index,      // fn(a: usize, b: usize, maxval: usize, noself: bool) -> usize
};

pub use search::{
    choose_between,      // fn(probabilities: &[f64], rng) -> usize - inverse-CDF draw from weights
    choose_between_psums, // fn(cumulative: &[f64], rng) -> usize - inverse-CDF draw from prefix sums
    upper_bound,         // fn(sorted: &[f64], value: f64) -> usize - interpolation-assisted upper bound
};
