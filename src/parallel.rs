// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parallel versions of the batch operations.
//!
//! Every element of a batch is computed independently, so the work is split
//! over the rayon thread pool with ndarray's parallel [`Zip`]. The results are
//! identical to the sequential functions, element order included.
//!
//! This requires the crate feature `rayon` to be enabled.
//!
//! ```
//! use ndarray_bunge::{build_rotation_matrices, AngleBatch, Bunge};
//! use ndarray_bunge::parallel::par_build_rotation_matrices;
//!
//! let batch = AngleBatch::from_elem(1000, Bunge::new(1., 1., 1.)).unwrap();
//! assert_eq!(par_build_rotation_matrices(&batch), build_rotation_matrices(&batch));
//! ```
use ndarray::{Array3, ArrayBase, Data, Ix2, Ix3, LinalgScalar, Zip};
use num_traits::Float;

use crate::frame::{assign_transform, frame_outputs};
use crate::rotation::fill_from_column;
use crate::AngleBatch;

/// Parallel [`build_rotation_matrices`](crate::build_rotation_matrices).
///
/// **Requires crate feature `"rayon"`**
pub fn par_build_rotation_matrices<A>(angles: &AngleBatch<A>) -> Array3<A>
where A: Float + Send + Sync
{
    let mut rmats = Array3::zeros((angles.len(), 3, 3));
    Zip::from(rmats.outer_iter_mut())
        .and(angles.angles().columns())
        .par_for_each(fill_from_column);
    rmats
}

/// Parallel [`transform_frames`](crate::transform_frames).
///
/// **Requires crate feature `"rayon"`**
///
/// **Panics** if `rotations` is not of shape `(n, 3, 3)` or `frame` is not 3×3.
pub fn par_transform_frames<A, S, S2>(rotations: &ArrayBase<S, Ix3>, frame: &ArrayBase<S2, Ix2>) -> (Array3<A>, Array3<A>)
where
    A: LinalgScalar + Send + Sync,
    S: Data<Elem = A>,
    S2: Data<Elem = A>,
{
    let (mut rotated, mut similarity) = frame_outputs(rotations, frame);
    let frame = frame.view();
    Zip::from(rotated.outer_iter_mut())
        .and(similarity.outer_iter_mut())
        .and(rotations.outer_iter())
        .par_for_each(|crd_sys, mat_rot, r| assign_transform(crd_sys, mat_rot, r, frame));
    (rotated, similarity)
}
