// Copyright 2024 ndbroadcast developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for `Array`.

use num_traits::Zero;

use crate::error::ShapeError;
use crate::indexes::indices;
use crate::{Array, Dim, IntoDimension};

/// # Constructor Methods for Arrays
impl<A> Array<A> {
    /// Create a one-dimensional array from a vector (no copying needed).
    ///
    /// ```
    /// use ndbroadcast::Array;
    ///
    /// let array = Array::from_vec(vec![1, 2, 3, 4]);
    /// assert_eq!(array.shape(), &[4]);
    /// ```
    pub fn from_vec(v: Vec<A>) -> Self {
        let dim = Dim::new(vec![v.len()]);
        Array::from_shape_vec_unchecked(dim, v)
    }

    /// Create an array with the given shape from a vector of elements in
    /// row-major order (no copying needed).
    ///
    /// **Errors** if the length of `v` is not the number of elements of
    /// `shape`.
    ///
    /// ```
    /// use ndbroadcast::{arr2, Array, ErrorKind};
    ///
    /// let a = Array::from_shape_vec((2, 2), vec![1, 2, 3, 4]);
    /// assert_eq!(a, Ok(arr2(&[[1, 2], [3, 4]])));
    ///
    /// let e = Array::from_shape_vec((2, 2), vec![1, 2, 3]).unwrap_err();
    /// assert_eq!(e.kind(), ErrorKind::IncompatibleLength);
    /// ```
    pub fn from_shape_vec<Sh>(shape: Sh, v: Vec<A>) -> Result<Self, ShapeError>
    where Sh: IntoDimension
    {
        let dim = shape.into_dimension();
        if dim.size_checked() != Some(v.len()) {
            return Err(ShapeError::IncompatibleLength(dim, v.len()));
        }
        Ok(Array::from_shape_vec_unchecked(dim, v))
    }

    #[inline]
    pub(crate) fn from_shape_vec_unchecked(dim: Dim, v: Vec<A>) -> Self {
        debug_assert_eq!(dim.size(), v.len());
        Array { data: v, dim }
    }

    /// Create an array with copies of `elem`, shape `shape`.
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `usize`.
    pub fn from_elem<Sh>(shape: Sh, elem: A) -> Self
    where
        Sh: IntoDimension,
        A: Clone,
    {
        let dim = shape.into_dimension();
        let size = size_of_shape_checked_unwrap(&dim);
        Array::from_shape_vec_unchecked(dim, vec![elem; size])
    }

    /// Create an array with zeros, shape `shape`.
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `usize`.
    pub fn zeros<Sh>(shape: Sh) -> Self
    where
        Sh: IntoDimension,
        A: Clone + Zero,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create an array with values created by the function `f`.
    ///
    /// `f` is called with the index of the element to create, in
    /// lexicographic order.
    ///
    /// ```
    /// use ndbroadcast::{arr2, Array};
    ///
    /// let a = Array::from_shape_fn((2, 3), |ix| 10 * ix[0] + ix[1]);
    /// assert_eq!(a, arr2(&[[0, 1, 2], [10, 11, 12]]));
    /// ```
    pub fn from_shape_fn<Sh, F>(shape: Sh, f: F) -> Self
    where
        Sh: IntoDimension,
        F: FnMut(Dim) -> A,
    {
        let dim = shape.into_dimension();
        size_of_shape_checked_unwrap(&dim);
        let v = indices(dim.clone()).map(f).collect();
        Array::from_shape_vec_unchecked(dim, v)
    }
}

// One set of impls per element type: a blanket `From<Vec<A>>` would also
// accept `Vec<[A; N]>` and build a 1-D array of rows.
macro_rules! impl_from_nested_vec {
    ($($elem:ty),*) => {$(
        impl From<Vec<$elem>> for Array<$elem> {
            /// Create a one-dimensional array from a vector (no copying needed).
            fn from(v: Vec<$elem>) -> Self {
                Array::from_vec(v)
            }
        }

        impl<const N: usize> From<Vec<[$elem; N]>> for Array<$elem> {
            /// Create a two-dimensional array with one row per element of `xs`.
            fn from(xs: Vec<[$elem; N]>) -> Self {
                let dim = Dim::new(vec![xs.len(), N]);
                let v = xs.into_iter().flatten().collect();
                Array::from_shape_vec_unchecked(dim, v)
            }
        }

        impl<const N: usize, const M: usize> From<Vec<[[$elem; N]; M]>> for Array<$elem> {
            /// Create a three-dimensional array of shape `(xs.len(), M, N)`.
            fn from(xs: Vec<[[$elem; N]; M]>) -> Self {
                let dim = Dim::new(vec![xs.len(), M, N]);
                let v = xs.into_iter().flatten().flatten().collect();
                Array::from_shape_vec_unchecked(dim, v)
            }
        }
    )*};
}

impl_from_nested_vec!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

fn size_of_shape_checked_unwrap(dim: &Dim) -> usize {
    match dim.size_checked() {
        Some(sz) => sz,
        None => panic!("ndbroadcast: Shape too large, product of non-zero axis lengths overflows usize"),
    }
}

#[cfg(test)]
mod tests {
    use crate::{Array, Dim};

    #[test]
    fn zeros_and_from_elem() {
        let z = Array::<u8>::zeros((2, 3));
        assert_eq!(z.shape(), &[2, 3]);
        assert!(z.iter().all(|&x| x == 0));
        let s = Array::from_elem((), 7i64);
        assert_eq!(s.ndim(), 0);
        assert_eq!(s.len(), 1);
        assert_eq!(s[()], 7);
    }

    #[test]
    fn from_shape_vec_rejects_length() {
        let e = Array::from_shape_vec((3, 2), vec![0; 5]).unwrap_err();
        assert_eq!(e, crate::ShapeError::IncompatibleLength(Dim([3, 2]), 5));
    }

    #[test]
    fn from_nested_vec_with_empty_rows() {
        let a = Array::from(Vec::<[u32; 0]>::new());
        assert_eq!(a.shape(), &[0, 0]);
        let b = Array::from(vec![[[0u8; 0]; 2]; 3]);
        assert_eq!(b.shape(), &[3, 2, 0]);
        assert!(b.is_empty());
    }

    #[test]
    fn from_shape_fn_row_major() {
        let a = Array::from_shape_fn((2, 2, 2), |ix| ix[0] * 4 + ix[1] * 2 + ix[2]);
        assert_eq!(a.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }
}
