#![feature(test)]

extern crate test;

use ndbroadcast::{add, Array};
use ndbroadcast_gen::array_builder::ArrayBuilder;

use test::black_box;

#[bench]
fn add_same_shape_64x64(bench: &mut test::Bencher)
{
    let a = ArrayBuilder::new((64, 64)).build::<i32>();
    let b = ArrayBuilder::new((64, 64)).build::<i32>();
    bench.iter(|| add(black_box(&a), black_box(&b)));
}

#[bench]
fn add_outer_64x64(bench: &mut test::Bencher)
{
    let a = ArrayBuilder::new((64, 1)).build::<i32>();
    let b = ArrayBuilder::new(64).build::<i32>();
    bench.iter(|| add(black_box(&a), black_box(&b)));
}

#[bench]
fn add_scalar_16x16x16(bench: &mut test::Bencher)
{
    let a = ArrayBuilder::new((16, 16, 16)).build::<i64>();
    let b = Array::from_elem((), 1i64);
    bench.iter(|| add(black_box(&a), black_box(&b)));
}

#[cfg(feature = "rayon")]
#[bench]
fn par_add_outer_512x512(bench: &mut test::Bencher)
{
    let a = ArrayBuilder::new((512, 1)).build::<i64>();
    let b = ArrayBuilder::new(512).build::<i64>();
    bench.iter(|| ndbroadcast::par_add(black_box(&a), black_box(&b)));
}
