// Constants

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::interfaces::Topology;
use crate::lattice::{Lattice, create_lattice_for};

// Tolerances
pub const DISTANCE_TOLERANCE: f64 = 1e-10; // For comparing lattice distances

// Search
pub const INTERPOLATION_SEARCH_THRESHOLD: usize = 10_000; // Window size below which upper_bound switches to bisection

/// Serializable description of a lattice: topology tag and per-axis sizes.
///
/// ```json
/// { "topology": "square", "sizes": [36, 36] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeSpec {
    pub topology: Topology,
    pub sizes: Vec<usize>,
}

impl LatticeSpec {
    pub fn new(topology: Topology, sizes: Vec<usize>) -> Self {
        LatticeSpec { topology, sizes }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Build the described lattice through the factory.
    pub fn build(&self) -> Result<Box<dyn Lattice>> {
        create_lattice_for(self.topology, &self.sizes)
    }
}
