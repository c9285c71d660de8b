// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![doc(html_root_url = "https://docs.rs/ndarray-bunge/0.1/")]
#![allow(clippy::many_single_char_names)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Bunge Euler-angle rotation matrices for [`ndarray`].
//!
//! A Bunge triple (φ1, Φ, φ2) describes the intrinsic rotation sequence Z, X,
//! Z that is customary in crystallography and texture analysis. This crate
//! turns batches of such triples into batches of 3×3 rotation matrices and
//! applies them to coordinate frames and second-order tensors.
//!
//! - [`Bunge`]: one angle triple, in radians
//! - [`AngleBatch`]: an ordered batch of triples, stored as a `(3, n)` array
//! - [`rotation_matrix`], [`build_rotation_matrices`]: build the matrices;
//!   a batch of `n` triples gives an array of shape `(n, 3, 3)`
//! - [`transform_frame`], [`transform_frames`]: rotate a frame `F` into
//!   `R·F`, and transform it as a tensor into `R·F·Rᵗ`
//! - [`check_rotation`] and friends: optional validation, never applied
//!   implicitly
//! - [`replace_less_than`]: elementwise conditional replacement
//!
//! ## Crate Feature Flags
//!
//! - `rayon`
//!   - Enables the [`parallel`] module with parallel batch builders.
//! - `serde`
//!   - Enables serialization support for [`Bunge`] and [`AngleBatch`].
//!
//! ## Example
//!
//! ```
//! use approx::assert_abs_diff_eq;
//! use ndarray::{Array2, Axis};
//! use ndarray_bunge::prelude::*;
//!
//! let batch = AngleBatch::from_elem(4, Bunge::new(1., 1., 1.)).unwrap();
//! let rmats = build_rotation_matrices(&batch);
//! let (crd_sys_rot, mat_rot) = transform_frames(&rmats, &reference_frame());
//!
//! assert_eq!(crd_sys_rot, rmats);
//! for m in mat_rot.axis_iter(Axis(0)) {
//!     assert_abs_diff_eq!(m, Array2::<f64>::eye(3).view(), epsilon = 1e-12);
//! }
//! ```

mod batch;
mod error;
mod euler;
mod frame;
mod mask;
mod rotation;
mod validate;

#[cfg(feature = "serde")]
mod angle_serde;

#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
pub mod parallel;

pub use crate::batch::AngleBatch;
pub use crate::error::{ErrorKind, RotationError};
pub use crate::euler::Bunge;
pub use crate::frame::{active, reference_frame, transform_frame, transform_frames};
pub use crate::mask::{replace_less_than, replace_less_than_inplace};
pub use crate::rotation::{build_rotation_matrices, rotation_matrix};
pub use crate::validate::{check_rotation, check_rotations, determinant, is_proper_rotation};

/// The most commonly used items, for glob import.
pub mod prelude
{
    #[doc(no_inline)]
    pub use crate::{
        build_rotation_matrices, reference_frame, rotation_matrix, transform_frame, transform_frames, AngleBatch,
        Bunge,
    };

    #[cfg(feature = "rayon")]
    #[doc(no_inline)]
    pub use crate::parallel::{par_build_rotation_matrices, par_transform_frames};
}
