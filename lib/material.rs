//! Closed-form material parameters for the In(x)Ga(1-x)As system.
//!
//! Effective masses follow the usual quadratic interpolation in the InAs mole
//! fraction `x`; the lattice parameter carries a linear temperature correction
//! about 300 K. `x` is expected in [0, 1] but is not checked; out-of-range
//! values produce numerically defined, physically meaningless results.

use ndarray as nd;
use crate::consts;

/// Parallel (in-plane) electron effective mass (kg).
pub fn mass_par(x: f64) -> f64 {
    (0.067 - 0.0131318 * x - 0.015862 * x * x) * consts::me
}

/// Perpendicular (growth-axis) electron effective mass (kg).
pub fn mass_perp(x: f64) -> f64 {
    (0.067 - 0.000173691 * x - 0.0246154 * x * x) * consts::me
}

/// Lattice parameter of In(x)Ga(1-x)As (m) at temperature `t` (K).
pub fn a_ingaas(t: f64, x: f64) -> f64 {
    (5.65325
        + 3.88e-5 * (t - 300.0)
        + (0.40505 - 1.14e-5 * (t - 300.0)) * x)
        * consts::angstron
}

/// [`mass_par`] applied element-wise to a composition profile.
pub fn mass_par_arr<S>(x: &nd::ArrayBase<S, nd::Ix1>) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(mass_par)
}

/// [`mass_perp`] applied element-wise to a composition profile.
pub fn mass_perp_arr<S>(x: &nd::ArrayBase<S, nd::Ix1>) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(mass_perp)
}

/// [`a_ingaas`] applied element-wise to a composition profile at fixed
/// temperature.
pub fn a_ingaas_arr<S>(t: f64, x: &nd::ArrayBase<S, nd::Ix1>)
    -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(|xk| a_ingaas(t, xk))
}
