// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error related to angle batch construction or rotation validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotationError
{
    // we want to be able to change this representation later
    repr: ErrorKind,
    index: Option<usize>,
}

impl RotationError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }

    /// Return the batch index of the offending element, if the error
    /// refers to a single element of a batch.
    #[inline]
    pub fn index(&self) -> Option<usize>
    {
        self.index
    }

    /// Create a new `RotationError`
    pub fn from_kind(error: ErrorKind) -> Self
    {
        from_kind(error)
    }

    pub(crate) fn at_index(mut self, index: usize) -> Self
    {
        self.index = Some(index);
        self
    }
}

/// Error code for an error related to angle batches or rotation matrices.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind
{
    /// angle array does not have three rows
    IncompatibleShape,
    /// batch contains no angle triples
    EmptyBatch,
    /// matrix contains NaN or infinite elements
    NonFinite,
    /// matrix is not orthogonal within tolerance
    NotOrthogonal,
    /// matrix determinant is not +1 within tolerance
    Improper,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> RotationError
{
    RotationError { repr: k, index: None }
}

impl Error for RotationError {}

impl fmt::Display for RotationError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let description = match self.kind() {
            ErrorKind::IncompatibleShape => "incompatible shape: angle array must have three rows",
            ErrorKind::EmptyBatch => "angle batch is empty",
            ErrorKind::NonFinite => "rotation matrix has non-finite elements",
            ErrorKind::NotOrthogonal => "rotation matrix is not orthogonal",
            ErrorKind::Improper => "rotation matrix determinant is not +1",
        };
        match self.index {
            Some(i) => write!(f, "RotationError/{:?}: {} (element {})", self.kind(), description, i),
            None => write!(f, "RotationError/{:?}: {}", self.kind(), description),
        }
    }
}
