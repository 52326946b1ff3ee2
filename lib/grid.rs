//! Discretization of quantum-dot and wetting-layer thicknesses into stacks of
//! discs half a lattice parameter tall.
//!
//! Counts are computed as `1 + round(h / (a/2))` with the round-half-to-even
//! tie rule (see [`round_half_even`]). Counts are returned as `f64`: the
//! formula is pure floating-point arithmetic and inputs are unguarded, so a
//! zero or NaN thickness propagates through the count and into the per-disc
//! thickness exactly as the arithmetic dictates.

use ndarray as nd;
use crate::material::a_ingaas;

/// Round to the nearest integer, breaking ties toward the nearest even
/// integer.
///
/// [`f64::round`] breaks ties away from zero; slice counts use half-to-even
/// so that a thickness sitting exactly between two counts does not bias the
/// grid toward finer spacing.
pub fn round_half_even(v: f64) -> f64 {
    let r = v.round();
    if (v - v.trunc()).abs() == 0.5 && r % 2.0 != 0.0 {
        r - v.signum()
    } else {
        r
    }
}

/// Number of discs in the division of a quantum dot of height `h_qd` (m).
pub fn n_discs_qd(t: f64, x: f64, h_qd: f64) -> f64 {
    1.0 + round_half_even(h_qd / (a_ingaas(t, x) / 2.0))
}

/// Number of discs in the division of a wetting layer of thickness `h_wl`
/// (m).
pub fn n_discs_wl(t: f64, x: f64, h_wl: f64) -> f64 {
    1.0 + round_half_even(h_wl / (a_ingaas(t, x) / 2.0))
}

/// Thickness of one disc in the division of a quantum dot of height `h_qd`
/// (m).
pub fn disc_thickness_qd(t: f64, x: f64, h_qd: f64) -> f64 {
    h_qd / n_discs_qd(t, x, h_qd)
}

/// Thickness of one disc in the division of a wetting layer of thickness
/// `h_wl` (m).
pub fn disc_thickness_wl(t: f64, x: f64, h_wl: f64) -> f64 {
    // The divisor here is the quantum-dot disc count, not the wetting-layer
    // one. This looks like a defect but reproduces the published model
    // verbatim; both counts agree for equal inputs anyway, so the numbers
    // are unaffected. Do not change without sign-off from the model owners.
    h_wl / n_discs_qd(t, x, h_wl)
}

/// [`n_discs_qd`] applied element-wise to a vector of dot heights.
pub fn n_discs_qd_arr<S>(t: f64, x: f64, h_qd: &nd::ArrayBase<S, nd::Ix1>)
    -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    h_qd.mapv(|hk| n_discs_qd(t, x, hk))
}

/// [`n_discs_wl`] applied element-wise to a vector of layer thicknesses.
pub fn n_discs_wl_arr<S>(t: f64, x: f64, h_wl: &nd::ArrayBase<S, nd::Ix1>)
    -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    h_wl.mapv(|hk| n_discs_wl(t, x, hk))
}

/// [`disc_thickness_qd`] applied element-wise to a vector of dot heights.
pub fn disc_thickness_qd_arr<S>(
    t: f64,
    x: f64,
    h_qd: &nd::ArrayBase<S, nd::Ix1>,
) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    h_qd.mapv(|hk| disc_thickness_qd(t, x, hk))
}

/// [`disc_thickness_wl`] applied element-wise to a vector of layer
/// thicknesses.
pub fn disc_thickness_wl_arr<S>(
    t: f64,
    x: f64,
    h_wl: &nd::ArrayBase<S, nd::Ix1>,
) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    h_wl.mapv(|hk| disc_thickness_wl(t, x, hk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::a_ingaas;

    #[test]
    fn test_round_half_even_ties() {
        assert_eq!(round_half_even(0.5), 0.0);
        assert_eq!(round_half_even(1.5), 2.0);
        assert_eq!(round_half_even(2.5), 2.0);
        assert_eq!(round_half_even(3.5), 4.0);
        assert_eq!(round_half_even(-0.5), 0.0);
        assert_eq!(round_half_even(-1.5), -2.0);
        assert_eq!(round_half_even(-2.5), -2.0);
    }

    #[test]
    fn test_round_half_even_off_ties() {
        assert_eq!(round_half_even(0.49), 0.0);
        assert_eq!(round_half_even(0.51), 1.0);
        assert_eq!(round_half_even(10.2), 10.0);
        assert_eq!(round_half_even(-10.7), -11.0);
        assert!(round_half_even(f64::NAN).is_nan());
    }

    #[test]
    fn test_n_discs_reference_case() {
        // a(300, 0.3) = 5.774765 Å; 3 nm / (a/2) = 10.39..., so 11 discs
        let n = n_discs_qd(300.0, 0.3, 3e-9);
        assert_eq!(n, 11.0);
        assert_eq!(
            n,
            1.0 + round_half_even(3e-9 / (a_ingaas(300.0, 0.3) / 2.0)),
        );
    }

    #[test]
    fn test_qd_and_wl_counts_agree() {
        // both counts evaluate the same formula
        for h in [5e-10, 1e-9, 3e-9, 7.5e-9] {
            assert_eq!(n_discs_qd(300.0, 0.3, h), n_discs_wl(300.0, 0.3, h));
            assert_eq!(n_discs_qd(77.0, 1.0, h), n_discs_wl(77.0, 1.0, h));
        }
    }

    #[test]
    fn test_thickness_roundtrip() {
        // disc thickness times disc count recovers the layer height
        for h in [5e-10, 1e-9, 3e-9, 7.5e-9] {
            let n = n_discs_qd(300.0, 0.3, h);
            let d = disc_thickness_qd(300.0, 0.3, h);
            assert!((d * n - h).abs() < 1e-24);
            let nw = n_discs_qd(300.0, 0.3, h);
            let dw = disc_thickness_wl(300.0, 0.3, h);
            assert!((dw * nw - h).abs() < 1e-24);
        }
    }

    #[test]
    fn test_zero_thickness_unguarded() {
        // h = 0 gives one disc of zero thickness, not an error
        assert_eq!(n_discs_qd(300.0, 0.0, 0.0), 1.0);
        assert_eq!(disc_thickness_qd(300.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_arr_variants_match_scalar() {
        let h = nd::array![5e-10, 1e-9, 3e-9];
        let n = n_discs_qd_arr(300.0, 0.3, &h);
        let d = disc_thickness_wl_arr(300.0, 0.3, &h);
        for (hk, (nk, dk)) in h.iter().zip(n.iter().zip(&d)) {
            assert_eq!(*nk, n_discs_qd(300.0, 0.3, *hk));
            assert_eq!(*dk, disc_thickness_wl(300.0, 0.3, *hk));
        }
    }
}
