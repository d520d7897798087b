// Copyright 2024 ndbroadcast developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::ops::{Index, IndexMut};

use super::{Axis, IntoDimension};
use crate::Ix;

/// Dimension description.
///
/// `Dim` describes the number of axes and the length of each axis
/// in an array. It is also used as an index type: a coordinate into an
/// array is a `Dim` with one component per axis.
///
/// The rank is dynamic, so `Dim` can describe arrays with any number
/// of axes.
///
/// # Examples
///
/// To create an array with a particular dimension, you'd just pass
/// a tuple (in this example (3, 2) is used), which is converted to
/// `Dim` by the array constructor.
///
/// ```
/// use ndbroadcast::Array;
/// use ndbroadcast::Dim;
///
/// let array = Array::<i32>::zeros((3, 2));
/// assert_eq!(array.raw_dim(), Dim([3, 2]));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Dim {
    index: Vec<Ix>,
}

impl Dim {
    #[inline]
    pub(crate) fn new(index: Vec<Ix>) -> Dim {
        Dim { index }
    }

    /// Create a dimension of `ndim` axes, all of length zero.
    pub fn zeros(ndim: usize) -> Dim {
        Dim::new(vec![0; ndim])
    }

    /// Return the number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.index.len()
    }

    /// Compute the size of the dimension (number of elements).
    ///
    /// The size of a dimension with no axes is 1.
    pub fn size(&self) -> usize {
        self.index.iter().product()
    }

    /// Compute the size while checking for overflow.
    pub fn size_checked(&self) -> Option<usize> {
        self.index
            .iter()
            .try_fold(1usize, |s, &a| s.checked_mul(a))
    }

    /// Borrow the axis lengths (or index components) as a slice.
    #[inline]
    pub fn slice(&self) -> &[Ix] {
        &self.index
    }

    #[inline]
    pub(crate) fn slice_mut(&mut self) -> &mut [Ix] {
        &mut self.index
    }

    /// Return a copy of `self` with `n` axes of length `value` in front.
    pub(crate) fn prepend(&self, n: usize, value: Ix) -> Dim {
        let mut index = Vec::with_capacity(n + self.ndim());
        index.resize(n, value);
        index.extend_from_slice(&self.index);
        Dim::new(index)
    }

    /// Return a copy of `self` with `n` leading axes of length 1.
    pub fn prepend_ones(&self, n: usize) -> Dim {
        self.prepend(n, 1)
    }

    /// Return a copy of `self` with a new axis of length 1 at `axis`.
    ///
    /// **Panics** if `axis` is greater than the number of axes.
    pub fn insert_axis(&self, axis: Axis) -> Dim {
        assert!(axis.index() <= self.ndim(),
                "insert_axis: axis {} out of bounds for {} axes",
                axis.index(), self.ndim());
        let mut index = self.index.clone();
        index.insert(axis.index(), 1);
        Dim::new(index)
    }

    /// Row-major strides of a contiguous array with this shape.
    ///
    /// Shape (a, b, c) gives strides (b * c, c, 1).
    pub(crate) fn default_strides(&self) -> Dim {
        let mut strides = Dim::zeros(self.ndim());
        // use 0 strides everywhere for an empty array
        if self.index.iter().all(|&d| d != 0) {
            let mut cum_prod = 1;
            for (rs, &dim) in strides.slice_mut().iter_mut().zip(self.slice()).rev() {
                *rs = cum_prod;
                cum_prod *= dim;
            }
        }
        strides
    }

    /// The first index of this shape in lexicographic order, or `None` if
    /// the shape has no elements.
    #[inline]
    pub(crate) fn first_index(&self) -> Option<Dim> {
        if self.index.iter().any(|&d| d == 0) {
            None
        } else {
            Some(Dim::zeros(self.ndim()))
        }
    }

    /// Use `self` as the shape and return the index that follows `index` in
    /// lexicographic order, or `None` if `index` was the last one.
    ///
    /// The last axis varies fastest.
    #[inline]
    pub(crate) fn next_for(&self, mut index: Dim) -> Option<Dim> {
        let mut done = false;
        for (&dim, ix) in self.slice().iter().zip(index.slice_mut()).rev() {
            *ix += 1;
            if *ix == dim {
                *ix = 0;
            } else {
                done = true;
                break;
            }
        }
        if done {
            Some(index)
        } else {
            None
        }
    }

    /// Inverse of the row-major offset: the index whose position in
    /// lexicographic order is `offset`.
    #[cfg_attr(not(feature = "rayon"), allow(dead_code))]
    pub(crate) fn index_from_offset(&self, mut offset: usize) -> Dim {
        let mut index = Dim::zeros(self.ndim());
        for (ix, &dim) in index.slice_mut().iter_mut().zip(self.slice()).rev() {
            *ix = offset % dim;
            offset /= dim;
        }
        index
    }

    /// Return the memory offset of `index`, or `None` if it is out of bounds.
    pub(crate) fn stride_offset_checked(&self, strides: &Dim, index: &Dim) -> Option<usize> {
        if index.ndim() != self.ndim() {
            return None;
        }
        let mut offset = 0;
        for (&d, &i, &s) in izip!(self.slice(), index.slice(), strides.slice()) {
            if i >= d {
                return None;
            }
            offset += i * s;
        }
        Some(offset)
    }
}

/// Create a new dimension value.
///
/// ```
/// use ndbroadcast::Dim;
///
/// assert_eq!(Dim([2, 3]).slice(), &[2, 3]);
/// assert_eq!(Dim(vec![4]).ndim(), 1);
/// ```
#[allow(non_snake_case)]
pub fn Dim<T>(index: T) -> Dim
where T: IntoDimension
{
    index.into_dimension()
}

impl fmt::Debug for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.index.fmt(f)
    }
}

impl Index<usize> for Dim {
    type Output = Ix;
    #[inline]
    fn index(&self, index: usize) -> &Ix {
        &self.index[index]
    }
}

impl IndexMut<usize> for Dim {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Ix {
        &mut self.index[index]
    }
}

impl PartialEq<[Ix]> for Dim {
    fn eq(&self, rhs: &[Ix]) -> bool {
        self.slice() == rhs
    }
}
