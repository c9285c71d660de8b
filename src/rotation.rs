// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Construction of rotation matrices from Bunge angles.
use ndarray::{Array2, Array3, ArrayView1, ArrayViewMut2, Zip};
use num_traits::Float;

use crate::{AngleBatch, Bunge};

/// Return the 3×3 rotation matrix of one Bunge angle triple.
///
/// With `s1, c1`, `s2, c2` and `s3, c3` the sine and cosine of φ1, Φ and φ2:
///
/// ```text
/// [[ c1*c3 - s1*s3*c2,  -c1*s3 - s1*c2*c3,   s1*s2],
///  [ s1*c3 + c1*c2*s3,  -s1*s3 + c1*c2*c3,  -c1*s2],
///  [ s2*s3,              s2*c3,              c2   ]]
/// ```
///
/// Non-finite angles produce a non-finite matrix; nothing is checked.
///
/// ```
/// use ndarray::Array2;
/// use ndarray_bunge::{rotation_matrix, Bunge};
///
/// assert_eq!(rotation_matrix(Bunge::<f64>::identity()), Array2::<f64>::eye(3));
/// ```
pub fn rotation_matrix<A>(angles: Bunge<A>) -> Array2<A>
where A: Float
{
    let mut r = Array2::zeros((3, 3));
    fill_rotation(r.view_mut(), angles);
    r
}

/// Return the rotation matrices of all triples in `angles`.
///
/// The result has shape `(n, 3, 3)` where `n` is the batch length, and
/// `result.index_axis(Axis(0), i)` is the rotation of triple `i`. Each matrix
/// depends only on its own triple.
///
/// ```
/// use ndarray::Axis;
/// use ndarray_bunge::{build_rotation_matrices, rotation_matrix, AngleBatch, Bunge};
///
/// let batch = AngleBatch::from_elem(4, Bunge::new(1., 1., 1.)).unwrap();
/// let rmats = build_rotation_matrices(&batch);
/// assert_eq!(rmats.shape(), &[4, 3, 3]);
/// assert_eq!(rmats.index_axis(Axis(0), 3), rotation_matrix(Bunge::new(1., 1., 1.)));
/// ```
pub fn build_rotation_matrices<A>(angles: &AngleBatch<A>) -> Array3<A>
where A: Float
{
    let mut rmats = Array3::zeros((angles.len(), 3, 3));
    Zip::from(rmats.outer_iter_mut())
        .and(angles.angles().columns())
        .for_each(fill_from_column);
    rmats
}

pub(crate) fn fill_from_column<A>(r: ArrayViewMut2<'_, A>, column: ArrayView1<'_, A>)
where A: Float
{
    fill_rotation(r, Bunge::new(column[0], column[1], column[2]));
}

fn fill_rotation<A>(mut r: ArrayViewMut2<'_, A>, angles: Bunge<A>)
where A: Float
{
    let [(s1, c1), (s2, c2), (s3, c3)] = angles.sin_cos();

    r[(0, 0)] = c1 * c3 - s1 * s3 * c2;
    r[(0, 1)] = -c1 * s3 - s1 * c2 * c3;
    r[(0, 2)] = s1 * s2;

    r[(1, 0)] = s1 * c3 + c1 * c2 * s3;
    r[(1, 1)] = -s1 * s3 + c1 * c2 * c3;
    r[(1, 2)] = -c1 * s2;

    r[(2, 0)] = s2 * s3;
    r[(2, 1)] = s2 * c3;
    r[(2, 2)] = c2;
}

#[cfg(test)]
mod tests
{
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{arr2, Axis};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn zero_angles_give_identity()
    {
        assert_eq!(rotation_matrix(Bunge::<f64>::identity()), Array2::<f64>::eye(3));
    }

    #[test]
    fn quarter_turn_about_z()
    {
        let r = rotation_matrix(Bunge::new(FRAC_PI_2, 0., 0.));
        let expected = arr2(&[[0., -1., 0.], [1., 0., 0.], [0., 0., 1.]]);
        assert_abs_diff_eq!(r, expected, epsilon = 1e-15);
    }

    #[test]
    fn quarter_turn_about_x()
    {
        let r = rotation_matrix(Bunge::new(0., FRAC_PI_2, 0.));
        let expected = arr2(&[[1., 0., 0.], [0., 0., -1.], [0., 1., 0.]]);
        assert_abs_diff_eq!(r, expected, epsilon = 1e-15);
    }

    #[test]
    fn batch_matches_single()
    {
        let triples = [Bunge::new(0.1, 0.2, 0.3), Bunge::new(-1., 2.5, 7.), Bunge::new(3., 0., 1.)];
        let batch = AngleBatch::from_triples(&triples).unwrap();
        let rmats = build_rotation_matrices(&batch);
        assert_eq!(rmats.len_of(Axis(0)), triples.len());
        for (i, &t) in triples.iter().enumerate() {
            assert_eq!(rmats.index_axis(Axis(0), i), rotation_matrix(t));
        }
    }

    #[test]
    fn non_finite_propagates()
    {
        let r = rotation_matrix(Bunge::new(f64::NAN, 0., 0.));
        assert!(r[(0, 0)].is_nan());
        assert_eq!(r[(2, 2)], 1.);
    }

    #[test]
    fn single_precision()
    {
        let r = rotation_matrix(Bunge::<f32>::new(0.5, 0.25, 1.));
        let rrt = r.dot(&r.t());
        assert_abs_diff_eq!(rrt, Array2::<f32>::eye(3), epsilon = 1e-6);
    }
}
