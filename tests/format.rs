use ndbroadcast::{add, arr1, arr2, Array, Axis};

#[test]
fn formatting()
{
    let a = arr2(&[[1, 2, 3], [4, 5, 6]]);
    assert_eq!(format!("{}", a), "[[1, 2, 3],\n [4, 5, 6]]");
    assert_eq!(format!("{:2}", a), "[[ 1,  2,  3],\n [ 4,  5,  6]]");

    let empty = Array::<i32>::zeros((2, 0));
    assert_eq!(format!("{}", empty), "[[]]");
}

#[test]
fn format_broadcast_sum()
{
    let a = arr1(&[1, 2, 3, 4, 5]).insert_axis(Axis(1));
    let b = arr2(&[[1, 2, 3, 4, 5, 6]]);
    let c = arr1(&[1, 2, 3, 4, 5, 6]);
    let sum = add(&add(&a, &b).unwrap(), &c).unwrap();
    assert_eq!(format!("{:2}", sum),
               "[[ 3,  5,  7,  9, 11, 13],\n \
                 [ 4,  6,  8, 10, 12, 14],\n \
                 [ 5,  7,  9, 11, 13, 15],\n \
                 [ 6,  8, 10, 12, 14, 16],\n \
                 [ 7,  9, 11, 13, 15, 17]]");
}

#[test]
fn debug_format()
{
    let a = arr1(&[1, 2]).insert_axis(Axis(0));
    assert_eq!(format!("{:?}", a), "[[1, 2]] shape=[1, 2], ndim=2");
}
