use crate::*;

#[test]
fn test_zero_is_all_zeros() {
    let mat: Matrix4<f32> = Matrix4::zero();
    assert_eq!(mat.data, [0.0; 16]);
}

#[test]
fn test_identity_layout() {
    let mat: Matrix4<f32> = Matrix4::identity();
    for row in 0..4 {
        for col in 0..4 {
            let expected = if row == col { 1.0 } else { 0.0 };
            assert_eq!(mat[(row, col)], expected);
        }
    }
}

#[test]
fn test_row_major_indexing() {
    let mat = Matrix4::from([
        0.0f32, 1.0, 2.0, 3.0, //
        4.0, 5.0, 6.0, 7.0, //
        8.0, 9.0, 10.0, 11.0, //
        12.0, 13.0, 14.0, 15.0,
    ]);
    assert_eq!(mat[(0, 0)], 0.0);
    assert_eq!(mat[(1, 2)], 6.0);
    assert_eq!(mat[(3, 1)], 13.0);

    let mut mat = mat;
    mat[(2, 3)] = -1.0;
    assert_eq!(mat.data[11], -1.0);
}

#[test]
fn test_approx_eq() {
    let a: Matrix4<f32> = Matrix4::identity();
    let mut b = a;
    b.data[5] += 1e-7;
    assert!(a.approx_eq(&b, 1e-6));
    b.data[5] += 1.0;
    assert!(!a.approx_eq(&b, 1e-6));
}
