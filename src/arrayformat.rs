// Copyright 2024 ndbroadcast developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::{Array, Ix};

fn format_array<A, F>(array: &Array<A>, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result
{
    if array.is_empty() {
        // one pair of brackets per axis, no rows
        for _ in 0..array.ndim() {
            f.write_str("[")?;
        }
        for _ in 0..array.ndim() {
            f.write_str("]")?;
        }
        return Ok(());
    }
    format_block(array.as_slice(), array.shape(), 0, f, &mut format)
}

/// Write the row-major block `data` of shape `shape`, found at nesting
/// level `depth`, as nested brackets.
///
/// Rows of the innermost axis share a line; every outer separator starts a
/// new line indented to the column after the enclosing brackets.
fn format_block<A, F>(data: &[A], shape: &[Ix], depth: usize, f: &mut fmt::Formatter<'_>, format: &mut F)
    -> fmt::Result
where F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result
{
    let (&len, inner) = match shape.split_first() {
        Some(split) => split,
        None => return format(&data[0], f),
    };
    let block_len: usize = inner.iter().product();
    f.write_str("[")?;
    for (i, block) in data.chunks(block_len).take(len).enumerate() {
        if i > 0 {
            if inner.is_empty() {
                f.write_str(", ")?;
            } else {
                writeln!(f, ",")?;
                write!(f, "{:width$}", "", width = depth + 1)?;
            }
        }
        format_block(block, inner, depth + 1, f, format)?;
    }
    f.write_str("]")
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style, one innermost row per line.
impl<A: fmt::Display> fmt::Display for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style, followed by its shape.
impl<A: fmt::Debug> fmt::Debug for Array<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)?;
        write!(f, " shape={:?}, ndim={}", self.shape(), self.ndim())
    }
}

#[cfg(test)]
mod tests {
    use crate::{arr1, arr2, arr3, Array};

    #[test]
    fn display_1d() {
        assert_eq!(format!("{}", arr1(&[1, 2, 3])), "[1, 2, 3]");
    }

    #[test]
    fn display_0d() {
        assert_eq!(format!("{}", Array::from_elem((), 4)), "4");
    }

    #[test]
    fn display_3d() {
        let a = arr3(&[[[0, 1], [2, 3]], [[4, 5], [6, 7]]]);
        assert_eq!(format!("{}", a), "[[[0, 1],\n  [2, 3]],\n [[4, 5],\n  [6, 7]]]");
    }

    #[test]
    fn display_column_and_empty() {
        let a = arr2(&[[1], [2], [3]]);
        assert_eq!(format!("{}", a), "[[1],\n [2],\n [3]]");
        assert_eq!(format!("{}", Array::<u8>::zeros((0, 2, 2))), "[[[]]]");
        assert_eq!(format!("{}", Array::<u8>::zeros(0)), "[]");
    }

    #[test]
    fn display_width_applies_to_elements() {
        let a = arr2(&[[1, 22], [333, 4]]);
        assert_eq!(format!("{:3}", a), "[[  1,  22],\n [333,   4]]");
    }

    #[test]
    fn debug_shows_shape() {
        let a = arr2(&[[1, 2]]);
        assert_eq!(format!("{:?}", a), "[[1, 2]] shape=[1, 2], ndim=2");
    }
}
