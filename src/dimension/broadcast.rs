// Copyright 2024 ndbroadcast developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::{incompatible_shapes, ShapeError};
use crate::Dim;

/// Pad the shape with fewer axes with leading axes of length 1, so that both
/// shapes have the same number of axes.
///
/// Shapes that already have the same number of axes are returned unchanged,
/// whatever their axis lengths. Only shape metadata is involved; see
/// [`ArrayView::pad_to_rank`](crate::ArrayView::pad_to_rank) for the matching
/// operation on array views.
///
/// ```
/// use ndbroadcast::{align_ranks, Dim};
///
/// let (a, b) = align_ranks(&Dim([2, 3]), &Dim([3]));
/// assert_eq!(a, Dim([2, 3]));
/// assert_eq!(b, Dim([1, 3]));
/// ```
pub fn align_ranks(shape1: &Dim, shape2: &Dim) -> (Dim, Dim) {
    let (k, overflow) = shape1.ndim().overflowing_sub(shape2.ndim());
    // Swap the order if shape2 is longer.
    if overflow {
        let (padded2, padded1) = align_ranks(shape2, shape1);
        return (padded1, padded2);
    }
    (shape1.clone(), shape2.prepend_ones(k))
}

/// Calculate the common shape of two shapes with the same number of axes.
///
/// Axis pairs are visited from the innermost axis outward. Two axis lengths
/// are compatible when they are equal or one of them is 1; the result takes
/// the length that is not 1. The first incompatible pair aborts with
/// `ShapeError::IncompatibleShapes` holding both shapes.
///
/// The shapes must already have equal rank (see [`align_ranks`]).
pub(crate) fn co_broadcast(shape1: &Dim, shape2: &Dim) -> Result<Dim, ShapeError> {
    debug_assert_eq!(shape1.ndim(), shape2.ndim(),
                     "co_broadcast: shapes {:?} and {:?} differ in rank",
                     shape1, shape2);
    let mut out = shape1.clone();
    for (out, &s2) in out.slice_mut().iter_mut().zip(shape2.slice()).rev() {
        if *out != s2 {
            if *out == 1 {
                *out = s2;
            } else if s2 != 1 {
                return Err(incompatible_shapes(shape1, shape2));
            }
        }
    }
    Ok(out)
}

/// Calculate the shape that two shapes broadcast to, using the
/// [NumPy broadcasting rules].
///
/// The shapes may differ in rank: the shorter one is first padded with
/// leading axes of length 1. If the shapes are not compatible, the error
/// reports the shapes as they were passed in.
///
/// [NumPy broadcasting rules]: https://numpy.org/doc/stable/user/basics.broadcasting.html#general-broadcasting-rules
///
/// ```
/// use ndbroadcast::{broadcast_shape, Dim, ErrorKind};
///
/// assert_eq!(broadcast_shape(&Dim([8, 1, 6, 1]), &Dim([7, 1, 5])).unwrap(),
///            Dim([8, 7, 6, 5]));
///
/// let err = broadcast_shape(&Dim([2, 3]), &Dim([2])).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::IncompatibleShape);
/// ```
pub fn broadcast_shape(shape1: &Dim, shape2: &Dim) -> Result<Dim, ShapeError> {
    let (padded1, padded2) = align_ranks(shape1, shape2);
    co_broadcast(&padded1, &padded2).map_err(|_| incompatible_shapes(shape1, shape2))
}
