#![allow(non_upper_case_globals)]

//! Physical constants and material masses used throughout the crate.
//!
//! All values are fixed at compile time; nothing here is mutable at runtime.
//! Masses are in SI units and, for the In(x)Ga(1-x)As system, refer to the
//! GaAs barrier material.

use std::f64::consts::PI;

/// mathematical constant π
pub const pi: f64 = PI;

/// one ångström (m)
pub const angstron: f64 = 1e-10;
//  spelled "angstron" to match the printout labels in [`summary`]

/// Planck constant (J s)
pub const h: f64 = 6.626086e-34;

/// reduced Planck constant (J s)
pub const hbar: f64 = h / 2.0 / pi;

/// one electron-volt (J)
pub const eV: f64 = 1.60217646e-19;

/// free electron mass (kg)
pub const me: f64 = 9.11e-31;

/// electron effective mass in the barrier material (kg)
pub const me_barrier: f64 = 0.0665 * me;

/// heavy hole mass (kg)
pub const mh: f64 = 2.18 * me;

/// hole effective mass in the barrier material (kg)
pub const mh_barrier: f64 = 0.33 * me;

/// Render all constants as a grouped, labeled block.
///
/// This is the exact text emitted by the `constants` binary.
pub fn summary() -> String {
    format!(
        "\n\
        Physical constants\n\
        pi: {}\n\
        angstron: {:e}\n\
        hBar: {:e}\n\
        eV: {:e}\n\
        \n\
        Electron constants\n\
        Electron mass: {:e}\n\
        Electron mass in barrier: {:e}\n\
        \n\
        Hole constants\n\
        Hole mass: {:e}\n\
        Hole mass in barrier: {:e}",
        pi, angstron, hbar, eV, me, me_barrier, mh, mh_barrier,
    )
}
