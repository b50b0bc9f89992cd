//! Periodic lattice geometry library
//!
//! This library provides the lattice geometry used by lattice Monte Carlo and
//! statistical-physics simulations: periodic (torus) lattices with neighbor,
//! minimum-image distance, winding-number and coordinate/offset queries, built
//! through a factory from a topology tag and a size vector.

pub mod config;
pub mod error;
pub mod interfaces;
pub mod lattice;
pub mod math;

pub use error::LatticeError;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, LatticeError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
