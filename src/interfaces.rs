// Definitions that are used throughout all modules

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LatticeError;

/// Flat index of a lattice site, in `[0, num_sites)`.
pub type SiteIndex = usize;

/// Integer coordinates of a point on the lattice, one entry per axis.
pub type Coords = Vec<i64>;

/// Integer offset between two sites (winding vectors, trial moves).
pub type Displacement = Vec<i64>;

// Enumeration of the supported lattice topologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Hypercubic torus of any dimensionality
    Square,
    /// One-dimensional ring
    Chain,
    /// Three-dimensional simple cubic torus
    Cubic,
}

/// Name table backing the string conversions of [`Topology`].
const TOPOLOGY_NAMES: [(Topology, &str); 3] = [
    (Topology::Square, "square"),
    (Topology::Chain, "chain"),
    (Topology::Cubic, "cubic"),
];

impl Topology {
    /// All known topologies, in table order.
    pub fn all() -> impl Iterator<Item = Topology> {
        TOPOLOGY_NAMES.iter().map(|(topology, _)| *topology)
    }

    /// Tag used to request this topology from the factory.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::Square => "square",
            Topology::Chain => "chain",
            Topology::Cubic => "cubic",
        }
    }

    /// Dimensionality required by the topology, `None` when any `D >= 1` works.
    pub fn required_dim(&self) -> Option<usize> {
        match self {
            Topology::Square => None,
            Topology::Chain => Some(1),
            Topology::Cubic => Some(3),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topology {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TOPOLOGY_NAMES
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(topology, _)| *topology)
            .ok_or_else(|| LatticeError::UnknownTopology(s.to_string()))
    }
}
