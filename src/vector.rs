use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use num_traits::Float;

/// Plain 3-component vector with named fields, used as the rotation axis in
/// axis-angle construction and as the payload of `Quaternion::apply`.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3<T>
{
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Float> From<[T; 3]> for Vector3<T> {
    fn from(values: [T; 3]) -> Self {
        Self {
            x: values[0],
            y: values[1],
            z: values[2],
        }
    }
}

impl<T: Float> Vector3<T>
{
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector3 { x, y, z }
    }

    /// Returns a zero vector.
    ///
    pub fn zero() -> Self {
        Vector3 { x: T::zero(), y: T::zero(), z: T::zero() }
    }

    /// Calculate the length/magnitude of the vector
    ///
    pub fn magnitude(&self) -> T {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Normalize the vector
    ///
    pub fn normalize(&self) -> Vector3<T> {
        let len = self.magnitude();
        if len == T::zero() {
            // Avoid division by zero; return a zero vector
            return Vector3::zero();
        }
        *self / len
    }

    /// Take the dot product of two vectors.
    ///
    pub fn dot(&self, other: &Vector3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Get the cross product of two vectors.
    ///
    pub fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Vector3<T>, tol: T) -> bool {
        (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.z - other.z).abs() <= tol
    }
}

impl<T: Float> Add for Vector3<T>
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Vector3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Float> AddAssign for Vector3<T>
{
    fn add_assign(&mut self, other: Self) {
        self.x = self.x + other.x;
        self.y = self.y + other.y;
        self.z = self.z + other.z;
    }
}

impl<T: Float> Sub for Vector3<T>
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T: Float> SubAssign for Vector3<T>
{
    fn sub_assign(&mut self, other: Self) {
        self.x = self.x - other.x;
        self.y = self.y - other.y;
        self.z = self.z - other.z;
    }
}

impl<T: Float> Mul<T> for Vector3<T>
{
    type Output = Self;

    fn mul(self, other: T) -> Self::Output {
        Vector3 {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

impl<T: Float> MulAssign<T> for Vector3<T>
{
    fn mul_assign(&mut self, other: T) {
        self.x = self.x * other;
        self.y = self.y * other;
        self.z = self.z * other;
    }
}

impl<T: Float> Div<T> for Vector3<T>
{
    type Output = Self;

    fn div(self, other: T) -> Self::Output {
        Vector3 {
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}

impl<T: Float> DivAssign<T> for Vector3<T>
{
    fn div_assign(&mut self, other: T) {
        self.x = self.x / other;
        self.y = self.y / other;
        self.z = self.z / other;
    }
}
