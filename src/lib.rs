// Copyright 2024 ndbroadcast developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![doc(html_root_url = "https://docs.rs/ndbroadcast/0.1/")]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `ndbroadcast` crate provides an n-dimensional integer container,
//! [`Array`], and NumPy-style broadcasting of two arrays under addition.
//!
//! Two shapes are *broadcast compatible* when, after the shorter one has been
//! padded with leading axes of length 1, every pair of axis lengths is either
//! equal or contains a 1. An axis of length 1 is then virtually *stretched*:
//! its single slice is read again at every position of the other operand's
//! axis.
//!
//! ```
//! use ndbroadcast::{add, arr2, Array, Axis};
//!
//! // shape (2, 3) plus shape (1, 3)
//! let a = arr2(&[[1, 2, 3],
//!                [4, 5, 6]]);
//! let b = arr2(&[[10, 20, 30]]);
//! assert_eq!(add(&a, &b).unwrap(), arr2(&[[11, 22, 33],
//!                                         [14, 25, 36]]));
//!
//! // a column (5, 1) plus a row (6,) gives (5, 6)
//! let col = Array::from_vec(vec![1, 2, 3, 4, 5]).insert_axis(Axis(1));
//! let row = Array::from_vec(vec![1, 2, 3, 4, 5, 6]);
//! let sum = &col + &row;
//! assert_eq!(sum.shape(), &[5, 6]);
//! assert_eq!(sum[(4, 5)], 11);
//! ```
//!
//! ## Highlights
//!
//! - Dynamic rank: shapes and coordinates are [`Dim`] values of any length.
//! - Rank padding is a view: [`ArrayView::pad_to_rank`] adds leading
//!   length-1 axes without copying the elements.
//! - The shape rules are available on their own: [`align_ranks`] and
//!   [`broadcast_shape`].
//!
//! ## Crate Feature Flags
//!
//! - `rayon`
//!   - Enables [`par_add`], which fills the output in parallel.

#[macro_use]
extern crate itertools;

pub use crate::dimension::{align_ranks, broadcast_shape};
pub use crate::dimension::{Axis, Dim, IntoDimension};
pub use crate::error::{ErrorKind, ShapeError};
pub use crate::free_functions::*;
pub use crate::impl_ops::{add, element_at};
pub use crate::impl_views::ArrayView;
pub use crate::indexes::{indices, Indices};

#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
pub use crate::parallel::par_add;

#[macro_use]
mod free_functions;
mod arrayformat;
mod dimension;
mod error;
mod impl_constructors;
mod impl_methods;
mod impl_ops;
mod impl_views;
mod indexes;
#[cfg(feature = "rayon")]
mod parallel;

/// Array index type
pub type Ix = usize;

/// An n-dimensional array of integers with owned, row-major storage.
///
/// The shape is dynamic: an `Array` has any number of axes, described by a
/// [`Dim`]. Elements are stored contiguously with the last axis varying
/// fastest, so `iter()` visits them in lexicographic coordinate order.
///
/// Arrays are built with [`Array::from_shape_vec`], [`arr1`], [`arr2`] or the
/// [`array!`] macro, and combined with [`add`] or the `+` operator.
///
/// ```
/// use ndbroadcast::Array;
///
/// let a = Array::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(a[[1, 0]], 3);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Array<A> {
    /// Row-major element storage; `data.len() == dim.size()`.
    data: Vec<A>,
    dim: Dim,
}

#[cold]
#[inline(never)]
fn array_out_of_bounds(index: &Dim, dim: &Dim) -> ! {
    panic!("ndbroadcast: index {:?} is out of bounds for array of shape {:?}",
           index, dim)
}
