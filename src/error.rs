// Copyright 2024 ndbroadcast developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

use crate::Dim;

/// An error related to array shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// operands could not be broadcast together, (lhs, rhs)
    ///
    /// The shapes are the ones the operation was called with, before any
    /// rank padding.
    IncompatibleShapes(Dim, Dim),
    /// element count does not match the shape, (shape, number of elements)
    IncompatibleLength(Dim, usize),
}

/// Error code for an error related to array shape.
///
/// This enumeration is not exhaustive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// incompatible shapes in broadcasting
    IncompatibleShape,
    /// data length does not fit the shape
    IncompatibleLength,
}

impl ShapeError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match *self {
            ShapeError::IncompatibleShapes(..) => ErrorKind::IncompatibleShape,
            ShapeError::IncompatibleLength(..) => ErrorKind::IncompatibleLength,
        }
    }
}

impl Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ShapeError::IncompatibleShapes(ref a, ref b) => {
                write!(f, "operands could not be broadcast together with shapes {:?} and {:?}",
                       a, b)
            }
            ShapeError::IncompatibleLength(ref dim, len) => {
                write!(f, "cannot fit {} elements into an array of shape {:?}", len, dim)
            }
        }
    }
}

pub(crate) fn incompatible_shapes(a: &Dim, b: &Dim) -> ShapeError {
    ShapeError::IncompatibleShapes(a.clone(), b.clone())
}
