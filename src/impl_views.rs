// Copyright 2024 ndbroadcast developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::{Dim, Ix};

/// A read-only array view.
///
/// A view borrows the elements of an [`Array`](crate::Array) and carries its
/// own shape and strides, so a view can have a different shape from the
/// array it was taken from without touching the elements. Rank padding for
/// broadcasting is done this way, see [`ArrayView::pad_to_rank`].
#[derive(Clone, Debug)]
pub struct ArrayView<'a, A> {
    data: &'a [A],
    dim: Dim,
    strides: Dim,
}

impl<'a, A> ArrayView<'a, A> {
    #[inline]
    pub(crate) fn new(data: &'a [A], dim: Dim, strides: Dim) -> Self {
        debug_assert_eq!(dim.ndim(), strides.ndim());
        ArrayView { data, dim, strides }
    }

    /// Return the shape of the view as a slice.
    pub fn shape(&self) -> &[Ix] {
        self.dim.slice()
    }

    /// Return the shape of the view as a `Dim`.
    pub fn raw_dim(&self) -> Dim {
        self.dim.clone()
    }

    /// Return the number of dimensions (axes) in the view.
    pub fn ndim(&self) -> usize {
        self.dim.ndim()
    }

    /// Return a view with leading axes of length 1 added until it has `ndim`
    /// axes.
    ///
    /// Only the shape and strides change: the returned view borrows the same
    /// elements, and the new axes have stride 0.
    ///
    /// **Panics** if `ndim` is less than the current number of axes.
    ///
    /// ```
    /// use ndbroadcast::arr1;
    ///
    /// let a = arr1(&[1, 2, 3]);
    /// let v = a.view().pad_to_rank(3);
    /// assert_eq!(v.shape(), &[1, 1, 3]);
    /// ```
    pub fn pad_to_rank(self, ndim: usize) -> Self {
        assert!(ndim >= self.ndim(),
                "pad_to_rank: cannot pad a view of {} axes to {} axes",
                self.ndim(), ndim);
        let n = ndim - self.ndim();
        if n == 0 {
            return self;
        }
        ArrayView {
            data: self.data,
            dim: self.dim.prepend_ones(n),
            strides: self.strides.prepend(n, 0),
        }
    }

    /// Return a reference to the element that `index` reads when the view is
    /// stretched to a broadcast shape.
    ///
    /// `index` must have one component per axis of the view. On every axis of
    /// length 1 the component is replaced by 0, so any position along that
    /// axis reads the single stored slice; on the other axes the component is
    /// used as is.
    ///
    /// An `index` out of bounds on an axis that is not of length 1 is a
    /// caller error: it panics in debug builds and may read an unrelated
    /// element or panic otherwise.
    ///
    /// ```
    /// use ndbroadcast::{arr2, Dim};
    ///
    /// let row = arr2(&[[10, 20, 30]]);
    /// let v = row.view();
    /// assert_eq!(*v.get_stretched(&Dim([4, 2])), 30);
    /// ```
    pub fn get_stretched(&self, index: &Dim) -> &'a A {
        debug_assert_eq!(index.ndim(), self.ndim(),
                         "get_stretched: index {:?} does not match shape {:?}",
                         index, self.dim);
        let mut offset = 0;
        for (&d, &i, &s) in izip!(self.dim.slice(), index.slice(), self.strides.slice()) {
            if d != 1 {
                debug_assert!(i < d, "get_stretched: index {:?} out of bounds for shape {:?}",
                              index, self.dim);
                offset += i * s;
            }
        }
        &self.data[offset]
    }
}
