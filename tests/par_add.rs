#![cfg(feature = "rayon")]

use ndbroadcast::{add, par_add, Array, Dim, ShapeError};
use ndbroadcast_gen::array_builder::{ArrayBuilder, ElementGenerator};

const M: usize = 256;
const N: usize = 100;

#[test]
fn test_par_add_outer()
{
    let a = ArrayBuilder::new((M, 1)).build::<i64>();
    let b = ArrayBuilder::new(N).generator(ElementGenerator::OneBased).build::<i64>();
    let sum = par_add(&a, &b).unwrap();
    assert_eq!(sum.shape(), &[M, N]);
    for (ix, &elt) in sum.indexed_iter() {
        assert_eq!(elt, (ix[0] + ix[1] + 1) as i64);
    }
}

#[test]
fn test_par_add_matches_add()
{
    let a = ArrayBuilder::new((3, 1, 5, 1)).build::<i32>();
    let b = ArrayBuilder::new((4, 1, 7)).build::<i32>();
    assert_eq!(par_add(&a, &b), add(&a, &b));
}

#[test]
fn test_par_add_incompatible()
{
    let a = Array::<i32>::zeros((M, 2));
    let b = Array::<i32>::zeros(3);
    assert_eq!(par_add(&a, &b).unwrap_err(),
               ShapeError::IncompatibleShapes(Dim([M, 2]), Dim([3])));
}
