use itertools::iproduct;
use ndbroadcast::{indices, Dim};

#[test]
fn indices_lexicographic()
{
    let ix: Vec<Vec<usize>> = indices((3, 2, 4)).map(|d| d.slice().to_vec()).collect();
    let expected: Vec<Vec<usize>> = iproduct!(0..3, 0..2, 0..4)
        .map(|(i, j, k)| vec![i, j, k])
        .collect();
    assert_eq!(ix, expected);
}

#[test]
fn indices_len()
{
    for shape in [vec![], vec![0], vec![4], vec![2, 3], vec![2, 1, 0], vec![1, 1, 1, 5]] {
        let dim = Dim(shape);
        let it = indices(&dim);
        assert_eq!(it.len(), dim.size());
        assert_eq!(it.count(), dim.size());
    }
}
