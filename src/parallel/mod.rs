// Copyright 2024 ndbroadcast developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parallelization features for ndbroadcast.
//!
//! Parallelization is based on the crate [rayon] and its parallel
//! iterators. It requires the crate feature `rayon` to be enabled.
//!
//! Every element of a broadcast sum depends only on the two read-only
//! operands, so the output is filled one element per task, in arbitrary
//! order.
//!
//! [rayon]: https://docs.rs/rayon/

use num_traits::PrimInt;
use rayon::prelude::*;

use crate::error::ShapeError;
use crate::impl_ops::{broadcast_operands, element_at};
use crate::Array;

/// Parallel version of [`add`](crate::add).
///
/// The result, and the error for incompatible shapes, are the same as for
/// `add`; only the order in which output elements are computed differs.
///
/// ```
/// use ndbroadcast::{add, par_add, Array};
///
/// let a = Array::from_shape_fn((64, 1), |ix| ix[0] as i64);
/// let b = Array::from_shape_fn(128, |ix| ix[0] as i64);
/// assert_eq!(par_add(&a, &b).unwrap(), add(&a, &b).unwrap());
/// ```
pub fn par_add<A>(a: &Array<A>, b: &Array<A>) -> Result<Array<A>, ShapeError>
where A: PrimInt + Send + Sync
{
    let (view_a, view_b, dim) = broadcast_operands(a, b)?;
    let mut data = vec![A::zero(); dim.size()];
    data.par_iter_mut()
        .enumerate()
        .for_each(|(offset, elt)| {
            let ix = dim.index_from_offset(offset);
            *elt = element_at(&view_a, &ix) + element_at(&view_b, &ix);
        });
    Ok(Array::from_shape_vec_unchecked(dim, data))
}
