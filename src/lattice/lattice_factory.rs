use log::debug;

use crate::interfaces::Topology;
use crate::lattice::lattice_like::Lattice;
use crate::lattice::square_lattice::SquareLattice;
use crate::math::index_mapper::validate_sizes;
use crate::{LatticeError, Result};

/// Create the lattice named by `name` (`"square"`, `"chain"`, `"cubic"`) with the given sizes.
///
/// Fails with [`LatticeError::UnknownTopology`] for an unrecognised tag and
/// [`LatticeError::InvalidDimension`] for an empty size vector, a zero extent,
/// or a dimensionality the topology does not support.
pub fn create_lattice(name: &str, sizes: &[usize]) -> Result<Box<dyn Lattice>> {
    let topology: Topology = name.parse()?;
    create_lattice_for(topology, sizes)
}

/// Create the lattice for an already parsed topology tag.
pub fn create_lattice_for(topology: Topology, sizes: &[usize]) -> Result<Box<dyn Lattice>> {
    validate_sizes(sizes)?;
    if let Some(dim) = topology.required_dim() {
        if sizes.len() != dim {
            return Err(LatticeError::InvalidDimension(format!(
                "{topology} lattice needs {dim} sizes, got {}",
                sizes.len()
            )));
        }
    }

    debug!("Creating {topology} lattice with sizes {sizes:?}");
    let lattice: Box<dyn Lattice> = match topology {
        Topology::Square | Topology::Chain | Topology::Cubic => {
            Box::new(SquareLattice::with_topology(topology, sizes)?)
        }
    };
    Ok(lattice)
}
