use core::ops::{Index, IndexMut};
use num_traits::Float;

/// 4x4 matrix as sixteen scalars in a single row-major buffer: entry
/// (row, col) lives at `data[row * 4 + col]`.
///
/// This is an output buffer for the quaternion-to-matrix conversions, it
/// carries no invariant of its own and is not validated in any way.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4<T>
{
    pub data: [T; 16],
}

impl<T: Float> From<[T; 16]> for Matrix4<T> {
    fn from(data: [T; 16]) -> Self {
        Matrix4 { data }
    }
}

impl<T: Float> Matrix4<T>
{
    /// Returns an all-zeros matrix, including the homogeneous corner.
    ///
    pub fn zero() -> Self {
        Matrix4 { data: [T::zero(); 16] }
    }

    /// Returns the 4x4 identity matrix.
    ///
    pub fn identity() -> Self {
        let mut mat = Matrix4::zero();
        mat.data[0] = T::one();
        mat.data[5] = T::one();
        mat.data[10] = T::one();
        mat.data[15] = T::one();
        mat
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Matrix4<T>, tol: T) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (*a - *b).abs() <= tol)
    }
}

impl<T> Index<(usize, usize)> for Matrix4<T>
{
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * 4 + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix4<T>
{
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * 4 + col]
    }
}
