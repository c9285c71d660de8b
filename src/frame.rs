// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Applying rotations to coordinate frames and second-order tensors.
use ndarray::{Array2, Array3, ArrayBase, ArrayView2, ArrayViewMut2, Axis, Data, Ix2, Ix3, LinalgScalar, Zip};

/// Return the reference coordinate frame, the 3×3 identity.
pub fn reference_frame<A>() -> Array2<A>
where A: LinalgScalar
{
    Array2::eye(3)
}

/// Rotate `frame` by `rotation`.
///
/// Return `(rotation · frame, rotation · frame · rotationᵗ)`: the first is
/// the frame's axes (or any set of column vectors) expressed after the change
/// of basis, the second is `frame` transformed as a second-order tensor.
///
/// For the identity frame the first result equals `rotation` and the second
/// is the identity again, up to rounding, since a rotation is orthogonal.
///
/// **Panics** if `rotation` or `frame` is not 3×3.
///
/// ```
/// use approx::assert_abs_diff_eq;
/// use ndarray::Array2;
/// use ndarray_bunge::{reference_frame, rotation_matrix, transform_frame, Bunge};
///
/// let r = rotation_matrix(Bunge::new(1., 1., 1.));
/// let (rotated, similarity) = transform_frame(&r, &reference_frame());
/// assert_eq!(rotated, r);
/// assert_abs_diff_eq!(similarity, Array2::<f64>::eye(3), epsilon = 1e-12);
/// ```
pub fn transform_frame<A, S, S2>(rotation: &ArrayBase<S, Ix2>, frame: &ArrayBase<S2, Ix2>) -> (Array2<A>, Array2<A>)
where
    A: LinalgScalar,
    S: Data<Elem = A>,
    S2: Data<Elem = A>,
{
    assert_eq!(rotation.dim(), (3, 3), "rotation must be 3×3");
    assert_eq!(frame.dim(), (3, 3), "frame must be 3×3");
    let rotation = rotation.view();
    let rotated = rotation.dot(&frame.view());
    let similarity = rotated.dot(&rotation.t());
    (rotated, similarity)
}

/// Apply [`transform_frame`] to every rotation of a `(n, 3, 3)` batch.
///
/// Return the rotated frames and the similarity-transformed frames, both of
/// shape `(n, 3, 3)` and in the same element order as `rotations`.
///
/// **Panics** if `rotations` is not of shape `(n, 3, 3)` or `frame` is not 3×3.
pub fn transform_frames<A, S, S2>(rotations: &ArrayBase<S, Ix3>, frame: &ArrayBase<S2, Ix2>) -> (Array3<A>, Array3<A>)
where
    A: LinalgScalar,
    S: Data<Elem = A>,
    S2: Data<Elem = A>,
{
    let (mut rotated, mut similarity) = frame_outputs(rotations, frame);
    let frame = frame.view();
    Zip::from(rotated.outer_iter_mut())
        .and(similarity.outer_iter_mut())
        .and(rotations.outer_iter())
        .for_each(|crd_sys, mat_rot, r| assign_transform(crd_sys, mat_rot, r, frame));
    (rotated, similarity)
}

pub(crate) fn frame_outputs<A, S, S2>(rotations: &ArrayBase<S, Ix3>, frame: &ArrayBase<S2, Ix2>) -> (Array3<A>, Array3<A>)
where
    A: LinalgScalar,
    S: Data<Elem = A>,
    S2: Data<Elem = A>,
{
    let n = rotations.len_of(Axis(0));
    assert_eq!(rotations.shape(), &[n, 3, 3], "rotations must have shape (n, 3, 3)");
    assert_eq!(frame.dim(), (3, 3), "frame must be 3×3");
    (Array3::zeros((n, 3, 3)), Array3::zeros((n, 3, 3)))
}

pub(crate) fn assign_transform<A>(
    mut rotated: ArrayViewMut2<'_, A>, mut similarity: ArrayViewMut2<'_, A>, rotation: ArrayView2<'_, A>,
    frame: ArrayView2<'_, A>,
) where
    A: LinalgScalar,
{
    let (crd_sys, mat_rot) = transform_frame(&rotation, &frame);
    rotated.assign(&crd_sys);
    similarity.assign(&mat_rot);
}

/// Return the active form of the passive `rotation`, its transpose.
///
/// A passive rotation turns the coordinate system, an active rotation turns
/// the body; the Bunge matrices built by this crate are passive.
pub fn active<A, S>(rotation: &ArrayBase<S, Ix2>) -> Array2<A>
where
    A: Clone,
    S: Data<Elem = A>,
{
    rotation.t().to_owned()
}
