use defmac::defmac;
use ndbroadcast::{arr2, arr3, array, Array, Axis, Dim, ErrorKind};

#[test]
fn test_from_shape_fn()
{
    let a = Array::from_shape_fn((4, 7), |i| i);
    for (i, elt) in a.indexed_iter() {
        assert_eq!(i, *elt);
    }
}

#[test]
fn test_from_shape_fn_with_zero()
{
    defmac!(test_from_shape_fn_with_zero shape => {
        let a = Array::from_shape_fn(shape, |_| 0u32);
        assert_eq!(a.len(), 0);
        assert_eq!(a.shape(), &shape);
    });
    test_from_shape_fn_with_zero!([0]);
    test_from_shape_fn_with_zero!([0, 1]);
    test_from_shape_fn_with_zero!([2, 0]);
    test_from_shape_fn_with_zero!([0, 1, 2]);
    test_from_shape_fn_with_zero!([2, 0, 1]);
    test_from_shape_fn_with_zero!([1, 2, 0]);
}

#[test]
fn test_array_macro()
{
    let a = array![[1, 2], [3, 4]];
    assert_eq!(a, arr2(&[[1, 2], [3, 4]]));
    let b = array![[[1, 2], [3, 4]], [[5, 6], [7, 8]]];
    assert_eq!(b.shape(), &[2, 2, 2]);
    assert_eq!(b[(1, 0, 1)], 6);
}

#[test]
fn test_into_shape()
{
    let a = array![1, 2, 3, 4, 5, 6];
    let b = a.clone().into_shape((3, 2)).unwrap();
    assert_eq!(b, arr2(&[[1, 2], [3, 4], [5, 6]]));
    let e = a.into_shape((4, 2)).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleLength);
}

#[test]
fn test_insert_axis()
{
    let a = array![1, 2, 3];
    assert_eq!(a.clone().insert_axis(Axis(0)).raw_dim(), Dim([1, 3]));
    assert_eq!(a.clone().insert_axis(Axis(1)).raw_dim(), Dim([3, 1]));
}

#[test]
#[should_panic]
fn test_insert_axis_out_of_bounds()
{
    array![1, 2, 3].insert_axis(Axis(2));
}

#[test]
fn test_from_vec()
{
    let a: Array<i16> = vec![4, 5].into();
    assert_eq!(a.shape(), &[2]);
    assert_eq!(a.into_raw_vec(), vec![4, 5]);
}

#[test]
fn test_from_nested_vec()
{
    let a = Array::from(vec![[1, 2, 3], [4, 5, 6]]);
    assert_eq!(a.shape(), &[2, 3]);
    assert_eq!(a, arr2(&[[1, 2, 3], [4, 5, 6]]));

    let b = Array::from(vec![[[1i64, 2], [3, 4]], [[5, 6], [7, 8]], [[9, 0], [1, 2]]]);
    assert_eq!(b.shape(), &[3, 2, 2]);
    assert_eq!(b[(2, 0, 1)], 0);
    assert_eq!(b, arr3(&[[[1, 2], [3, 4]], [[5, 6], [7, 8]], [[9, 0], [1, 2]]]));
}
