//! Property-based tests for the lattice query contract.
//!
//! Random lattice shapes and site pairs are drawn with proptest; every query
//! must satisfy the periodic-geometry invariants below for all of them.
