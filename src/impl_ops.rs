// Copyright 2024 ndbroadcast developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::Add;

use num_traits::PrimInt;

use crate::dimension::{align_ranks, co_broadcast};
use crate::error::{incompatible_shapes, ShapeError};
use crate::{Array, ArrayView, Dim};

/// Read the element of `view` at `index` of the broadcast shape.
///
/// This is [`ArrayView::get_stretched`] by value: axes of length 1 in the
/// view read index 0 whatever the component of `index` is.
///
/// `index` must have as many axes as the view and lie within the broadcast
/// shape; a bad index may panic.
#[inline]
pub fn element_at<A: Copy>(view: &ArrayView<'_, A>, index: &Dim) -> A {
    *view.get_stretched(index)
}

/// Pad both operands to the same rank and compute their broadcast shape.
///
/// The views share storage with `a` and `b`; nothing is copied.
pub(crate) fn broadcast_operands<'a, 'b, A>(a: &'a Array<A>, b: &'b Array<A>)
    -> Result<(ArrayView<'a, A>, ArrayView<'b, A>, Dim), ShapeError>
{
    let (dim_a, dim_b) = align_ranks(&a.dim, &b.dim);
    let dim = co_broadcast(&dim_a, &dim_b).map_err(|_| incompatible_shapes(&a.dim, &b.dim))?;
    let view_a = a.view().pad_to_rank(dim_a.ndim());
    let view_b = b.view().pad_to_rank(dim_b.ndim());
    Ok((view_a, view_b, dim))
}

/// Add two arrays element-wise, broadcasting them to a common shape.
///
/// The shape with fewer axes is padded with leading axes of length 1, then
/// the shapes are broadcast axis by axis (see [`broadcast_shape`](crate::broadcast_shape)).
/// The result is a new array of the broadcast shape whose element at each
/// index is the sum of the two stretched input elements at that index.
/// The inputs are not modified.
///
/// **Errors** with `ShapeError::IncompatibleShapes`, holding the shapes of
/// `a` and `b`, if they can not be broadcast together. No output is produced
/// in that case.
///
/// ```
/// use ndbroadcast::{add, arr1, arr2, ErrorKind};
///
/// let a = arr2(&[[1, 2, 3],
///                [4, 5, 6]]);
/// let b = arr1(&[10, 20, 30]);
/// assert_eq!(add(&a, &b).unwrap(), arr2(&[[11, 22, 33],
///                                         [14, 25, 36]]));
///
/// let c = arr1(&[1, 2]);
/// assert_eq!(add(&a, &c).unwrap_err().kind(), ErrorKind::IncompatibleShape);
/// ```
pub fn add<A>(a: &Array<A>, b: &Array<A>) -> Result<Array<A>, ShapeError>
where A: PrimInt
{
    let (view_a, view_b, dim) = broadcast_operands(a, b)?;
    let mut data = Vec::with_capacity(dim.size());
    let mut index = dim.first_index();
    while let Some(ix) = index {
        data.push(element_at(&view_a, &ix) + element_at(&view_b, &ix));
        index = dim.next_for(ix);
    }
    Ok(Array::from_shape_vec_unchecked(dim, data))
}

/// Perform elementwise addition between `self` and `rhs`, broadcasting
/// both to their common shape, and return the result as a new array.
///
/// **Panics** if broadcasting isn't possible; use [`add`] to get the error
/// instead.
impl<'a, 'b, A> Add<&'b Array<A>> for &'a Array<A>
where A: PrimInt
{
    type Output = Array<A>;

    fn add(self, rhs: &'b Array<A>) -> Array<A> {
        match add(self, rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("ndbroadcast: {}", e),
        }
    }
}

/// Perform elementwise addition between `self` and `rhs`, broadcasting
/// both to their common shape.
///
/// **Panics** if broadcasting isn't possible.
impl<A> Add<Array<A>> for Array<A>
where A: PrimInt
{
    type Output = Array<A>;

    fn add(self, rhs: Array<A>) -> Array<A> {
        &self + &rhs
    }
}
