#![allow(clippy::many_single_char_names)]

use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use ndarray::prelude::*;
use ndarray_rand::RandomExt;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::Uniform;
use num_traits::Float;

use ndarray_bunge::{
    build_rotation_matrices, check_rotations, determinant, reference_frame, transform_frames, AngleBatch, Bunge,
};

const N: usize = 2048;

fn random_batch<A>(n: usize, low: f64, high: f64, seed: u64) -> AngleBatch<A>
where A: Float
{
    let mut rng = SmallRng::seed_from_u64(seed);
    let angles = Array::random_using((3, n), Uniform::new(low, high).unwrap(), &mut rng);
    AngleBatch::from_array(angles.mapv(|x| A::from(x).unwrap())).unwrap()
}

#[test]
fn orthogonal_and_proper()
{
    let batch = random_batch::<f64>(N, 0., 2. * PI, 1);
    let rmats = build_rotation_matrices(&batch);
    assert_eq!(rmats.len_of(Axis(0)), N);
    check_rotations(&rmats, 1e-9).unwrap();
    for r in rmats.outer_iter() {
        assert_abs_diff_eq!(r.t().dot(&r), Array2::<f64>::eye(3), epsilon = 1e-9);
        assert_abs_diff_eq!(determinant(&r), 1., epsilon = 1e-9);
    }
}

#[test]
fn large_angles_stay_proper()
{
    let batch = random_batch::<f64>(N, -1e3, 1e3, 2);
    check_rotations(&build_rotation_matrices(&batch), 1e-9).unwrap();
}

#[test]
fn single_precision_within_tolerance()
{
    let batch = random_batch::<f32>(N, 0., 2. * PI, 3);
    check_rotations(&build_rotation_matrices(&batch), 1e-5).unwrap();
}

#[test]
fn similarity_of_identity_is_identity()
{
    let batch = random_batch::<f64>(N, 0., 2. * PI, 4);
    let rmats = build_rotation_matrices(&batch);
    let (rotated, similarity) = transform_frames(&rmats, &reference_frame());
    assert_eq!(rotated, rmats);
    for m in similarity.outer_iter() {
        assert_abs_diff_eq!(m, Array2::<f64>::eye(3).view(), epsilon = 1e-9);
    }
}

#[test]
fn similarity_preserves_trace()
{
    let mut rng = SmallRng::seed_from_u64(5);
    let t = Array::random_using((3, 3), Uniform::new(-1., 1.).unwrap(), &mut rng);
    let batch = random_batch::<f64>(64, 0., 2. * PI, 6);
    let (_, similarity) = transform_frames(&build_rotation_matrices(&batch), &t);
    for m in similarity.outer_iter() {
        assert_abs_diff_eq!(m.diag().sum(), t.diag().sum(), epsilon = 1e-12);
    }
}

#[test]
fn rotated_columns_keep_length()
{
    let batch = random_batch::<f64>(64, 0., 2. * PI, 7);
    for (i, b) in batch.iter().enumerate() {
        assert!(b.is_finite(), "element {}", i);
    }
    let frame = array![[1., 0., 2.], [0., 3., 0.], [0., 0., 1.]];
    let (rotated, _) = transform_frames(&build_rotation_matrices(&batch), &frame);
    let norms = |m: ArrayView2<f64>| m.columns().into_iter().map(|c| c.dot(&c).sqrt()).collect::<Vec<_>>();
    for m in rotated.outer_iter() {
        let expected = norms(frame.view());
        for (got, want) in norms(m).into_iter().zip(expected) {
            assert_abs_diff_eq!(got, want, epsilon = 1e-12);
        }
    }
}

#[test]
fn identity_triple_in_random_batch()
{
    let mut batch = random_batch::<f64>(16, 0., 2. * PI, 8);
    batch.set(9, Bunge::identity());
    let rmats = build_rotation_matrices(&batch);
    assert_eq!(rmats.index_axis(Axis(0), 9), Array2::<f64>::eye(3));
}

#[cfg(feature = "rayon")]
#[test]
fn par_random_batches_are_proper()
{
    use ndarray_bunge::parallel::{par_build_rotation_matrices, par_transform_frames};

    let batch = random_batch::<f64>(N * 4, -10., 10., 9);
    let rmats = par_build_rotation_matrices(&batch);
    assert_eq!(rmats, build_rotation_matrices(&batch));
    check_rotations(&rmats, 1e-9).unwrap();

    let (rotated, similarity) = par_transform_frames(&rmats, &reference_frame());
    assert_eq!(rotated, rmats);
    for m in similarity.outer_iter() {
        assert_abs_diff_eq!(m, Array2::<f64>::eye(3).view(), epsilon = 1e-9);
    }
}
