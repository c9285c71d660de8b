// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Elementwise conditional replacement.
use ndarray::{Array, ArrayBase, Data, DataMut, Dimension};

/// Return a copy of `a` where every element strictly less than `threshold`
/// is replaced by `value`; all other elements are unchanged.
///
/// ```
/// use ndarray::{array, s, Array2};
/// use ndarray_bunge::replace_less_than;
///
/// let mut a = Array2::from_elem((5, 2), 3.0);
/// a.slice_mut(s![.., 0]).fill(1.0);
/// let b = replace_less_than(&a, 3.0, 4.0);
/// assert_eq!(b.column(0), array![4., 4., 4., 4., 4.]);
/// assert_eq!(b.column(1), array![3., 3., 3., 3., 3.]);
/// ```
pub fn replace_less_than<A, S, D>(a: &ArrayBase<S, D>, threshold: A, value: A) -> Array<A, D>
where
    A: PartialOrd + Copy,
    S: Data<Elem = A>,
    D: Dimension,
{
    a.mapv(|x| if x < threshold { value } else { x })
}

/// Replace, in place, every element of `a` strictly less than `threshold`
/// by `value`.
pub fn replace_less_than_inplace<A, S, D>(a: &mut ArrayBase<S, D>, threshold: A, value: A)
where
    A: PartialOrd + Copy,
    S: DataMut<Elem = A>,
    D: Dimension,
{
    for x in a.iter_mut().filter(|x| **x < threshold) {
        *x = value;
    }
}
