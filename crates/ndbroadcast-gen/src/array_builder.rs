// Copyright 2024 ndbroadcast developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use ndbroadcast::Array;
use ndbroadcast::Dim;
use ndbroadcast::IntoDimension;

use num_traits::PrimInt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayBuilder
{
    dim: Dim,
    generator: ElementGenerator,
}

/// How to generate elements
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementGenerator
{
    /// 0, 1, 2, ... in row-major order
    Sequential,
    /// 1, 2, 3, ... in row-major order
    OneBased,
    Zero,
}

impl Default for ArrayBuilder
{
    fn default() -> Self
    {
        Self::new(1)
    }
}

impl ArrayBuilder
{
    pub fn new(dim: impl IntoDimension) -> Self
    {
        ArrayBuilder {
            dim: dim.into_dimension(),
            generator: ElementGenerator::Sequential,
        }
    }

    pub fn generator(mut self, generator: ElementGenerator) -> Self
    {
        self.generator = generator;
        self
    }

    pub fn build<T>(self) -> Array<T>
    where T: PrimInt
    {
        let mut current = match self.generator {
            ElementGenerator::OneBased => T::one(),
            ElementGenerator::Sequential | ElementGenerator::Zero => T::zero(),
        };
        let size = self.dim.size();
        let use_zeros = self.generator == ElementGenerator::Zero;
        let v = (0..size)
            .map(|_| {
                let ret = current;
                if !use_zeros {
                    current = ret + T::one();
                }
                ret
            })
            .collect();
        Array::from_shape_vec(self.dim, v).unwrap()
    }
}

#[test]
fn test_generators()
{
    let (m, n) = (3, 4);
    let seq = ArrayBuilder::new((m, n)).build::<i32>();
    let one = ArrayBuilder::new((m, n))
        .generator(ElementGenerator::OneBased)
        .build::<i32>();
    let zero = ArrayBuilder::new((m, n))
        .generator(ElementGenerator::Zero)
        .build::<u8>();

    assert_eq!(seq.shape(), &[m, n]);
    assert_eq!(seq[(2, 3)], 11);
    assert_eq!(one[(0, 0)], 1);
    assert_eq!(one[(2, 3)], 12);
    assert!(zero.iter().all(|&x| x == 0));
}
