//! Miscellaneous tools.

use ndarray::{ self as nd, Ix1 };
use num_traits::Num;
use crate::error::LengthError;

/// Kronecker delta: 1 if `i == j`, 0 otherwise.
pub fn kronecker_delta<A>(i: A, j: A) -> i64
where A: Num
{
    if i == j { 1 } else { 0 }
}

/// Element-wise Kronecker delta over two index arrays.
///
/// Returns an integer array of the common shape with 1s exactly at positions
/// where the arrays agree.
pub fn kronecker_delta_arr<S, T, A>(
    i: &nd::ArrayBase<S, Ix1>,
    j: &nd::ArrayBase<T, Ix1>,
) -> Result<nd::Array1<i64>, LengthError>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Num,
{
    LengthError::check(i, j)?;
    let delta: nd::Array1<i64>
        = i.iter().zip(j)
        .map(|(ik, jk)| if ik == jk { 1 } else { 0 })
        .collect();
    Ok(delta)
}
