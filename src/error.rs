use thiserror::Error;

/// Errors raised while building or querying a lattice.
#[derive(Debug, Error)]
pub enum LatticeError {
    /// Malformed or mismatched size / coordinate vector.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// The factory was given a topology tag it does not know.
    #[error("unknown lattice topology '{0}'")]
    UnknownTopology(String),

    /// Site index outside `[0, num_sites)`.
    #[error("site index {index} out of range for a lattice of {num_sites} sites")]
    OutOfRange {
        /// The offending index
        index: usize,
        /// Number of sites of the lattice
        num_sites: usize,
    },

    /// Failed to read a lattice configuration file.
    #[error("failed to read lattice configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a lattice configuration.
    #[error("failed to parse lattice configuration: {0}")]
    Config(#[from] serde_json::Error),
}
