//! Masking and Bunge-angle rotation of a coordinate frame, printed for
//! inspection.
use ndarray::prelude::*;
use ndarray::s;

use ndarray_bunge::{build_rotation_matrices, reference_frame, replace_less_than_inplace, transform_frames};
use ndarray_bunge::{AngleBatch, Bunge, RotationError};

fn main() -> Result<(), RotationError>
{
    let mut a = Array::from_elem((5, 2), 3.0);
    a.slice_mut(s![.., 0]).fill(1.0);
    println!("\nA\n{:?}", a);

    replace_less_than_inplace(&mut a, 3.0, 4.0);
    println!("\nA\n{:?}", a);

    // four elements, every angle 1 rad
    let bunge = AngleBatch::from_elem(4, Bunge::new(1.0, 1.0, 1.0))?;
    let rmat = build_rotation_matrices(&bunge);
    println!("\nrmat\n{:?}", rmat.index_axis(Axis(0), 0));

    // all elements share the same angles, so the first one is representative
    let (crd_sys_rot, mat_rot) = transform_frames(&rmat, &reference_frame());
    println!("\ncrd_sys_rot\n{:?}", crd_sys_rot.index_axis(Axis(0), 0));
    println!("\nmat_rot\n{:?}", mat_rot.index_axis(Axis(0), 0));

    Ok(())
}
