//! Kinetic energy of a free particle confined to a cylindrical region.

use crate::consts;
use crate::material::mass_par;
use crate::utils::kronecker_delta;

/// Kinetic-energy matrix element (J) of a free particle in a cylinder of
/// height `h_c` (m), diagonal in the quantum numbers `(l, m, n)`.
///
/// `k_mn` is the radial wavevector (m⁻¹) belonging to the azimuthal/radial
/// pair `(m, n)`; it and `h_c` are fixed by the geometry of the enclosing
/// model and are supplied by the caller. The mass is the in-plane effective
/// mass at zero InAs content, [`mass_par`]`(0.0)`.
pub fn free_particle_energy(
    l: i64,
    m: i64,
    n: i64,
    l1: i64,
    m1: i64,
    n1: i64,
    h_c: f64,
    k_mn: f64,
) -> f64 {
    let kz = l as f64 * consts::pi / h_c;
    consts::hbar.powi(2) / (2.0 * mass_par(0.0))
        * (kz * kz + k_mn.powi(2))
        * kronecker_delta(l, l1) as f64
        * kronecker_delta(m, m1) as f64
        * kronecker_delta(n, n1) as f64
}
