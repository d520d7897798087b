// Copyright 2024 ndbroadcast developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tuple, array and vector conversion to `Dim`.

use crate::{Dim, Ix};

/// Argument conversion into a dimension.
///
/// Shapes and indices can be given as `usize` (one axis), `()` (no axes),
/// tuples of up to six `usize`, fixed size arrays, vectors and slices.
pub trait IntoDimension {
    fn into_dimension(self) -> Dim;
}

impl IntoDimension for Ix {
    #[inline(always)]
    fn into_dimension(self) -> Dim {
        Dim::new(vec![self])
    }
}

impl IntoDimension for () {
    #[inline(always)]
    fn into_dimension(self) -> Dim {
        Dim::new(Vec::new())
    }
}

impl IntoDimension for Dim {
    #[inline(always)]
    fn into_dimension(self) -> Dim {
        self
    }
}

impl<'a> IntoDimension for &'a Dim {
    #[inline]
    fn into_dimension(self) -> Dim {
        self.clone()
    }
}

impl IntoDimension for Vec<Ix> {
    #[inline(always)]
    fn into_dimension(self) -> Dim {
        Dim::new(self)
    }
}

impl<'a> IntoDimension for &'a [Ix] {
    #[inline]
    fn into_dimension(self) -> Dim {
        Dim::new(self.to_vec())
    }
}

impl<const N: usize> IntoDimension for [Ix; N] {
    #[inline]
    fn into_dimension(self) -> Dim {
        Dim::new(self.to_vec())
    }
}

macro_rules! tuple_into_dimension {
    ($(($($t:ident $i:tt),+))+) => {
        $(
        impl IntoDimension for ($($t,)+) {
            #[inline]
            fn into_dimension(self) -> Dim {
                Dim::new(vec![$(self.$i),+])
            }
        }
        )+
    };
}

tuple_into_dimension! {
    (Ix 0)
    (Ix 0, Ix 1)
    (Ix 0, Ix 1, Ix 2)
    (Ix 0, Ix 1, Ix 2, Ix 3)
    (Ix 0, Ix 1, Ix 2, Ix 3, Ix 4)
    (Ix 0, Ix 1, Ix 2, Ix 3, Ix 4, Ix 5)
}

#[cfg(test)]
mod tests {
    use super::IntoDimension;
    use crate::Dim;

    #[test]
    fn conversions_agree() {
        let d = Dim(vec![2, 3, 4]);
        assert_eq!((2usize, 3usize, 4usize).into_dimension(), d);
        assert_eq!([2usize, 3, 4].into_dimension(), d);
        assert_eq!((&[2usize, 3, 4][..]).into_dimension(), d);
        assert_eq!((&d).into_dimension(), d);
        assert_eq!(7usize.into_dimension(), Dim(vec![7]));
        assert_eq!((7usize,).into_dimension(), Dim(vec![7]));
        assert_eq!(().into_dimension().ndim(), 0);
    }
}
