// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Optional checks that a matrix is a proper rotation.
//!
//! Nothing in this crate validates implicitly: non-finite angles produce
//! non-finite matrices, and it is up to the caller to check them here.
use approx::AbsDiffEq;
use ndarray::{Array2, ArrayBase, Data, Ix2, Ix3, LinalgScalar};
use num_traits::Float;

use crate::error::{from_kind, ErrorKind, RotationError};

/// Return the determinant of a 3×3 matrix.
///
/// **Panics** if `m` is not 3×3.
pub fn determinant<A, S>(m: &ArrayBase<S, Ix2>) -> A
where
    A: Float,
    S: Data<Elem = A>,
{
    assert_eq!(m.dim(), (3, 3), "determinant: matrix must be 3×3");
    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
}

/// Return `true` if `r` is orthogonal and has determinant +1, each within
/// `epsilon` (elementwise for `rᵗ·r − I`).
///
/// **Panics** if `r` is not 3×3.
///
/// ```
/// use ndarray::arr2;
/// use ndarray_bunge::{is_proper_rotation, rotation_matrix, Bunge};
///
/// assert!(is_proper_rotation(&rotation_matrix(Bunge::new(1., 2., 3.)), 1e-9));
/// // a reflection is orthogonal but not proper
/// assert!(!is_proper_rotation(&arr2(&[[-1., 0., 0.], [0., 1., 0.], [0., 0., 1.]]), 1e-9));
/// ```
pub fn is_proper_rotation<A, S>(r: &ArrayBase<S, Ix2>, epsilon: A) -> bool
where
    A: LinalgScalar + Float + AbsDiffEq<Epsilon = A>,
    S: Data<Elem = A>,
{
    check_rotation(r, epsilon).is_ok()
}

/// Check that `r` is a proper rotation within `epsilon`.
///
/// **Errors** with `ErrorKind::NonFinite` if any element is NaN or infinite,
/// `ErrorKind::NotOrthogonal` if `rᵗ·r` differs from the identity by more than
/// `epsilon` in any element, and `ErrorKind::Improper` if the determinant
/// differs from +1 by more than `epsilon`.
///
/// **Panics** if `r` is not 3×3.
pub fn check_rotation<A, S>(r: &ArrayBase<S, Ix2>, epsilon: A) -> Result<(), RotationError>
where
    A: LinalgScalar + Float + AbsDiffEq<Epsilon = A>,
    S: Data<Elem = A>,
{
    assert_eq!(r.dim(), (3, 3), "check_rotation: matrix must be 3×3");
    if !r.iter().all(|x| x.is_finite()) {
        return Err(from_kind(ErrorKind::NonFinite));
    }
    let r = r.view();
    let rtr = r.t().dot(&r);
    if !AbsDiffEq::abs_diff_eq(&rtr, &Array2::<A>::eye(3), epsilon) {
        return Err(from_kind(ErrorKind::NotOrthogonal));
    }
    if (determinant(&r) - A::one()).abs() > epsilon {
        return Err(from_kind(ErrorKind::Improper));
    }
    Ok(())
}

/// Check every matrix of a `(n, 3, 3)` batch with [`check_rotation`].
///
/// **Errors** with the first failure found; its [`RotationError::index`] is
/// the batch index of the offending matrix.
pub fn check_rotations<A, S>(rotations: &ArrayBase<S, Ix3>, epsilon: A) -> Result<(), RotationError>
where
    A: LinalgScalar + Float + AbsDiffEq<Epsilon = A>,
    S: Data<Elem = A>,
{
    for (i, r) in rotations.outer_iter().enumerate() {
        check_rotation(&r, epsilon).map_err(|e| e.at_index(i))?;
    }
    Ok(())
}
