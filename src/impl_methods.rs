// Copyright 2024 ndbroadcast developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::Index;
use std::slice;

use crate::error::ShapeError;
use crate::indexes::indices;
use crate::{array_out_of_bounds, Array, ArrayView, Axis, Dim, IntoDimension, Ix};

/// # Methods For All Arrays
impl<A> Array<A> {
    /// Return the total number of elements in the array.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return whether the array has any elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the number of dimensions (axes) in the array
    pub fn ndim(&self) -> usize {
        self.dim.ndim()
    }

    /// Return the shape of the array as a `Dim`.
    pub fn raw_dim(&self) -> Dim {
        self.dim.clone()
    }

    /// Return the shape of the array as a slice.
    ///
    /// ```
    /// use ndbroadcast::Array;
    ///
    /// let a = Array::<u32>::zeros((3, 4, 1));
    /// assert_eq!(a.shape(), &[3, 4, 1]);
    /// ```
    pub fn shape(&self) -> &[Ix] {
        self.dim.slice()
    }

    /// Return the elements as a slice, in row-major order.
    pub fn as_slice(&self) -> &[A] {
        &self.data
    }

    /// Return the elements as a vector, in row-major order.
    pub fn into_raw_vec(self) -> Vec<A> {
        self.data
    }

    /// Return a read-only view of the array.
    pub fn view(&self) -> ArrayView<'_, A> {
        ArrayView::new(&self.data, self.dim.clone(), self.dim.default_strides())
    }

    /// Return an iterator of references to the elements of the array.
    ///
    /// Elements are visited in lexicographic index order.
    pub fn iter(&self) -> slice::Iter<'_, A> {
        self.data.iter()
    }

    /// Return an iterator of indexes and references to the elements of the
    /// array.
    ///
    /// Elements are visited in lexicographic index order.
    pub fn indexed_iter(&self) -> impl ExactSizeIterator<Item = (Dim, &A)> + '_ {
        indices(self.dim.clone()).zip(self.data.iter())
    }

    /// Return a reference to the element at `index`, or return `None`
    /// if the index is out of bounds.
    ///
    /// ```
    /// use ndbroadcast::arr2;
    ///
    /// let a = arr2(&[[1, 2],
    ///                [3, 4]]);
    ///
    /// assert!(
    ///     a.get((0, 1)) == Some(&2) &&
    ///     a.get((0, 2)) == None
    /// );
    /// ```
    pub fn get<I>(&self, index: I) -> Option<&A>
    where I: IntoDimension
    {
        let index = index.into_dimension();
        self.offset_of(&index).map(|offset| &self.data[offset])
    }

    fn offset_of(&self, index: &Dim) -> Option<usize> {
        self.dim
            .stride_offset_checked(&self.dim.default_strides(), index)
    }

    /// Transform the array into `shape`; any shape with the same number of
    /// elements is accepted. The elements keep their row-major order.
    ///
    /// **Errors** if the shapes don't have the same number of elements.
    ///
    /// ```
    /// use ndbroadcast::{arr1, arr2};
    ///
    /// assert!(
    ///     arr1(&[1, 2, 3, 4]).into_shape((2, 2)).unwrap()
    ///     == arr2(&[[1, 2],
    ///               [3, 4]])
    /// );
    /// ```
    pub fn into_shape<Sh>(self, shape: Sh) -> Result<Self, ShapeError>
    where Sh: IntoDimension
    {
        Array::from_shape_vec(shape, self.data)
    }

    /// Insert a new axis of length 1 at `axis`, moving the following axes
    /// one position inward.
    ///
    /// The elements are not moved or copied.
    ///
    /// **Panics** if the axis is out of bounds.
    ///
    /// ```
    /// use ndbroadcast::{arr1, arr2, Axis};
    ///
    /// assert!(
    ///     arr1(&[1, 2, 3]).insert_axis(Axis(1))
    ///     == arr2(&[[1], [2], [3]])
    /// );
    /// ```
    pub fn insert_axis(self, axis: Axis) -> Self {
        let dim = self.dim.insert_axis(axis);
        Array::from_shape_vec_unchecked(dim, self.data)
    }
}

/// Access the element at **index**.
///
/// **Panics** if index is out of bounds.
impl<A, I> Index<I> for Array<A>
where I: IntoDimension
{
    type Output = A;
    #[inline]
    fn index(&self, index: I) -> &A {
        let index = index.into_dimension();
        match self.offset_of(&index) {
            Some(offset) => &self.data[offset],
            None => array_out_of_bounds(&index, &self.dim),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{arr2, Array, Axis, Dim};

    #[test]
    fn indexed_iter_matches_index() {
        let a = Array::from_shape_vec((2, 3), (0..6).collect()).unwrap();
        for (ix, &elt) in a.indexed_iter() {
            assert_eq!(a[&ix], elt);
        }
        assert_eq!(a.indexed_iter().len(), 6);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let a = arr2(&[[1, 2], [3, 4]]);
        let _x = a[(2, 0)];
    }

    #[test]
    fn get_wrong_rank() {
        let a = arr2(&[[1, 2], [3, 4]]);
        assert_eq!(a.get(1), None);
        assert_eq!(a.get((1, 1, 0)), None);
    }

    #[test]
    fn insert_axis_keeps_data() {
        let a = Array::from_vec(vec![1, 2, 3]).insert_axis(Axis(0));
        assert_eq!(a.raw_dim(), Dim([1, 3]));
        assert_eq!(a.into_raw_vec(), vec![1, 2, 3]);
    }
}
