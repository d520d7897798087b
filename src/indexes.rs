// Copyright 2024 ndbroadcast developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::iter::FusedIterator;

use crate::{Dim, IntoDimension};

/// An iterator over the indexes of an array shape.
///
/// Indexes are produced in lexicographic order: the last axis varies
/// fastest. A shape with no axes has exactly one index, the empty one; a
/// shape with a zero-length axis has none.
///
/// Iterator element type is `Dim`.
#[derive(Clone, Debug)]
pub struct Indices {
    dim: Dim,
    index: Option<Dim>,
}

/// Create an iterable of the array shape `shape`.
///
/// ```
/// use ndbroadcast::{indices, Dim};
///
/// let ix: Vec<Dim> = indices((2, 2)).collect();
/// assert_eq!(ix, vec![Dim([0, 0]), Dim([0, 1]), Dim([1, 0]), Dim([1, 1])]);
/// ```
pub fn indices<E>(shape: E) -> Indices
where E: IntoDimension
{
    let dim = shape.into_dimension();
    Indices {
        index: dim.first_index(),
        dim,
    }
}

impl Iterator for Indices {
    type Item = Dim;

    #[inline]
    fn next(&mut self) -> Option<Dim> {
        let index = self.index.take()?;
        self.index = self.dim.next_for(index.clone());
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let l = match self.index {
            None => 0,
            Some(ref ix) => {
                let gone: usize = self
                    .dim
                    .default_strides()
                    .slice()
                    .iter()
                    .zip(ix.slice())
                    .map(|(&s, &i)| s * i)
                    .sum();
                self.dim.size() - gone
            }
        };
        (l, Some(l))
    }
}

impl ExactSizeIterator for Indices {}

impl FusedIterator for Indices {}

#[cfg(test)]
mod tests {
    use super::indices;
    use crate::Dim;

    #[test]
    fn scalar_shape_has_one_index() {
        let ix: Vec<_> = indices(()).collect();
        assert_eq!(ix, vec![Dim(())]);
    }

    #[test]
    fn empty_shape_has_no_index() {
        assert_eq!(indices((3, 0, 2)).count(), 0);
    }

    #[test]
    fn len_counts_down() {
        let mut it = indices((2, 3, 4));
        assert_eq!(it.len(), 24);
        it.nth(9);
        assert_eq!(it.len(), 14);
        assert_eq!(it.next(), Some(Dim([0, 2, 2])));
    }
}
