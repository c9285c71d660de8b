// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An ordered batch of Bunge angle triples.
use ndarray::{Array2, ArrayView2, Axis};
use num_traits::Float;

use crate::error::{from_kind, ErrorKind, RotationError};
use crate::Bunge;

/// An ordered, non-empty batch of Bunge angle triples.
///
/// The angles are stored as a two-dimensional array of shape `(3, n)`: row 0
/// holds φ1, row 1 holds Φ and row 2 holds φ2, so that column `i` is the
/// triple of element `i`. Element order is significant: rotation matrix `i`
/// built from the batch belongs to column `i`.
///
/// ```
/// use ndarray::array;
/// use ndarray_bunge::AngleBatch;
///
/// let batch = AngleBatch::from_array(array![[0., 1.], [0., 1.], [0., 1.]]).unwrap();
/// assert_eq!(batch.len(), 2);
/// assert_eq!(batch.get(1).unwrap().cap_phi, 1.);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AngleBatch<A>
{
    angles: Array2<A>,
}

impl<A> AngleBatch<A>
where A: Float
{
    /// Create a batch from an array of shape `(3, n)`.
    ///
    /// **Errors** with `ErrorKind::IncompatibleShape` if the array does not
    /// have exactly three rows, and with `ErrorKind::EmptyBatch` if it has no
    /// columns.
    pub fn from_array(angles: Array2<A>) -> Result<Self, RotationError>
    {
        if angles.nrows() != 3 {
            return Err(from_kind(ErrorKind::IncompatibleShape));
        }
        if angles.ncols() == 0 {
            return Err(from_kind(ErrorKind::EmptyBatch));
        }
        Ok(AngleBatch { angles })
    }

    /// Create a batch from a slice of triples, preserving their order.
    ///
    /// **Errors** with `ErrorKind::EmptyBatch` if `triples` is empty.
    pub fn from_triples(triples: &[Bunge<A>]) -> Result<Self, RotationError>
    {
        Self::from_array(collect_columns(triples.iter().copied()))
    }

    /// Create a batch of `n` copies of `angles`.
    ///
    /// **Errors** with `ErrorKind::EmptyBatch` if `n` is zero.
    pub fn from_elem(n: usize, angles: Bunge<A>) -> Result<Self, RotationError>
    {
        Self::from_array(collect_columns(std::iter::repeat(angles).take(n)))
    }

    /// Return the number of angle triples in the batch.
    #[inline]
    pub fn len(&self) -> usize
    {
        self.angles.len_of(Axis(1))
    }

    /// Return `true` if the batch has no triples, which a constructed batch never does.
    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Return the triple at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<Bunge<A>>
    {
        if index >= self.len() {
            return None;
        }
        Some(column_triple(&self.angles, index))
    }

    /// Replace the triple at `index`.
    ///
    /// **Panics** if `index` is out of bounds.
    pub fn set(&mut self, index: usize, angles: Bunge<A>)
    {
        let mut col = self.angles.column_mut(index);
        col[0] = angles.phi1;
        col[1] = angles.cap_phi;
        col[2] = angles.phi2;
    }

    /// Return an iterator over the triples in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Bunge<A>> + '_
    {
        self.angles
            .columns()
            .into_iter()
            .map(|col| Bunge::new(col[0], col[1], col[2]))
    }

    /// Return a view of the underlying `(3, n)` angle array.
    #[inline]
    pub fn angles(&self) -> ArrayView2<'_, A>
    {
        self.angles.view()
    }

    /// Return the underlying `(3, n)` angle array.
    pub fn into_array(self) -> Array2<A>
    {
        self.angles
    }

    /// Return `true` if every angle in the batch is finite.
    pub fn is_finite(&self) -> bool
    {
        self.angles.iter().all(|a| a.is_finite())
    }
}

impl<A> FromIterator<Bunge<A>> for AngleBatch<A>
where A: Float
{
    /// Collect triples into a batch.
    ///
    /// **Panics** if the iterator is empty.
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = Bunge<A>>
    {
        let angles = collect_columns(iter.into_iter());
        assert!(angles.ncols() > 0, "AngleBatch: cannot collect an empty batch");
        AngleBatch { angles }
    }
}

fn column_triple<A: Float>(angles: &Array2<A>, index: usize) -> Bunge<A>
{
    Bunge::new(angles[(0, index)], angles[(1, index)], angles[(2, index)])
}

fn collect_columns<A, I>(iter: I) -> Array2<A>
where
    A: Float,
    I: Iterator<Item = Bunge<A>>,
{
    let rows: [Vec<A>; 3] = iter.fold([Vec::new(), Vec::new(), Vec::new()], |mut rows, b| {
        rows[0].push(b.phi1);
        rows[1].push(b.cap_phi);
        rows[2].push(b.phi2);
        rows
    });
    Array2::from_shape_fn((3, rows[0].len()), |(r, c)| rows[r][c])
}
