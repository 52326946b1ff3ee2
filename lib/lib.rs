//! Physical constants and closed-form material parameters for modeling
//! In(x)Ga(1-x)As quantum dots.
//!
//! Everything here is a pure function over scalar or 1-D array inputs:
//! - effective masses and the lattice parameter of the alloy ([`material`])
//! - subdivision of dot and wetting-layer thicknesses into lattice-scale
//!   discs ([`grid`])
//! - the diagonal kinetic-energy term of a free particle in a cylinder
//!   ([`energy`])
//!
//! Inputs are not validated; non-physical inputs (negative thicknesses,
//! compositions outside [0, 1]) produce numerically defined results and
//! floating-point edge cases (zero thickness, NaN) propagate to the caller.

pub mod error;
pub mod consts;
pub mod material;
pub mod grid;
pub mod utils;
pub mod energy;
