use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use num_traits::{Float, FloatConst};
use crate::*;

/// Quaternion with real part `w` and vector part `(x, y, z)`, used to
/// represent 3D rotations without gimbal lock.
///
/// Components are stored in (x, y, z, w) order, see [`Quaternion::to_array`].
/// Equality is exact componentwise comparison with no tolerance; use
/// [`Quaternion::approx_eq`] when floating-point error is involved. Nothing
/// forces unit length, callers may hold non-normalized quaternions.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T>
{
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Float + FloatConst> From<[T; 4]> for Quaternion<T> {
    /// Builds from components in scalar-first `[w, x, y, z]` order, same as
    /// [`Quaternion::new`].
    fn from(values: [T; 4]) -> Self {
        Self {
            w: values[0],
            x: values[1],
            y: values[2],
            z: values[3],
        }
    }
}

impl<T: Float + FloatConst> Default for Quaternion<T> {
    fn default() -> Self {
        Quaternion::zero()
    }
}

impl<T: Float + FloatConst> Quaternion<T>
{
    /// Create a new quaternion with the given values, scalar part first.
    ///
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Quaternion { x, y, z, w }
    }

    /// Returns the all-zeros quaternion.
    ///
    /// This is the default value and the fallback result of the degenerate
    /// cases (zero-length axis, zero norm). It carries no rotation
    /// information and is NOT the identity rotation.
    ///
    pub fn zero() -> Self {
        Quaternion {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
            w: T::zero(),
        }
    }

    /// Returns the identity quaternion (no rotation)
    ///
    pub fn identity() -> Self {
        Quaternion {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
            w: T::one(),
        }
    }

    /// Builds the rotation of `angle` around `axis`. The axis does not need
    /// to be unit length, and the angle is taken in radians unless the
    /// `radians` flag is false, in which case it is taken in degrees.
    ///
    /// A zero-length axis has no direction to rotate around, so it yields
    /// the exact [`Quaternion::zero`] value. Any other axis yields a unit
    /// quaternion by construction.
    ///
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T, radians: bool) -> Self {
        let norm = axis.magnitude();
        if norm == T::zero() {
            return Quaternion::zero();
        }
        let angle = if radians { angle } else { deg_to_rad(angle) };
        let half_angle = angle / (T::one() + T::one());
        let s = half_angle.sin();
        Quaternion {
            x: axis.x * s / norm,
            y: axis.y * s / norm,
            z: axis.z * s / norm,
            w: half_angle.cos(),
        }
    }

    /// Get the Euclidean magnitude over all four components.
    ///
    pub fn norm(&self) -> T {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Normalize to a unit quaternion, or `None` when the norm is zero and
    /// there is nothing to normalize.
    ///
    pub fn try_normalize(&self) -> Option<Quaternion<T>> {
        let norm = self.norm();
        if norm == T::zero() {
            return None;
        }
        Some(Quaternion {
            x: self.x / norm,
            y: self.y / norm,
            z: self.z / norm,
            w: self.w / norm,
        })
    }

    /// Normalize to a unit quaternion. The zero quaternion cannot be
    /// normalized and is returned unchanged.
    ///
    pub fn normalize(&self) -> Quaternion<T> {
        self.try_normalize().unwrap_or(*self)
    }

    /// Compute the conjugate of the quaternion: negated vector part,
    /// unchanged real part. Applying it twice returns the original value
    /// exactly. Equals the inverse for unit quaternions.
    ///
    pub fn conjugate(&self) -> Self {
        Quaternion {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Raw components in internal (x, y, z, w) order.
    ///
    pub fn to_array(&self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Hamilton product, the non-commutative quaternion multiplication.
    ///
    pub fn multiply(&self, other: &Quaternion<T>) -> Quaternion<T> {
        Quaternion {
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            z: self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
        }
    }

    /// Fills a 4x4 homogeneous rotation matrix from the normalized
    /// components.
    ///
    /// A zero-norm quaternion holds no rotation, so the result is all
    /// sixteen entries zero, including the homogeneous corner that would be
    /// 1 in a well-formed rotation matrix.
    ///
    pub fn rotation_matrix(&self) -> Matrix4<T> {
        let unit = match self.try_normalize() {
            Some(unit) => unit,
            None => return Matrix4::zero(),
        };
        let Quaternion { x, y, z, w } = unit;
        let one = T::one();
        let two = one + one;
        Matrix4::from([
            one - two * y * y - two * z * z,
            two * x * y + two * z * w,
            two * x * z - two * y * w,
            T::zero(),
            //
            two * x * y - two * z * w,
            one - two * x * x - two * z * z,
            two * z * y + two * x * w,
            T::zero(),
            //
            two * x * z + two * y * w,
            two * y * z - two * x * w,
            one - two * x * x - two * y * y,
            T::zero(),
            //
            T::zero(),
            T::zero(),
            T::zero(),
            one,
        ])
    }

    /// The left-multiplication matrix of this quaternion, built from the raw
    /// components with no normalization or zero check (the structure is
    /// linear in the components regardless of magnitude).
    ///
    /// Applied to a 4-vector holding another quaternion in (w, x, y, z)
    /// order, it reproduces the Hamilton product `self * other`.
    ///
    pub fn matrix(&self) -> Matrix4<T> {
        let Quaternion { x, y, z, w } = *self;
        Matrix4::from([
            w, -x, -y, -z, //
            x, w, -z, y, //
            y, z, w, -x, //
            z, -y, x, w,
        ])
    }

    /// The rotation angle around the quaternion's axis, in radians unless
    /// the `radians` flag is false, in which case in degrees.
    ///
    /// A zero-norm quaternion holds no rotation and yields exactly 0.
    ///
    pub fn angle(&self, radians: bool) -> T {
        let norm = self.norm();
        if norm == T::zero() {
            return T::zero();
        }
        let two = T::one() + T::one();
        let angle = two * (self.w / norm).acos();
        if radians {
            angle
        } else {
            rad_to_deg(angle)
        }
    }

    /// Rotate a vector by this quaternion using the sandwich product
    /// `u * vec * u.conjugate()` of the normalized quaternion, returning the
    /// vector part of the result.
    ///
    /// A zero-norm quaternion holds no rotation and yields the zero vector.
    ///
    pub fn apply(&self, vec: &Vector3<T>) -> Vector3<T> {
        let unit = match self.try_normalize() {
            Some(unit) => unit,
            None => return Vector3::zero(),
        };
        let rotated = unit * *vec * unit.conjugate();
        Vector3::new(rotated.x, rotated.y, rotated.z)
    }

    /// Approximate equality check with a given tolerance.
    ///
    pub fn approx_eq(&self, other: &Quaternion<T>, tol: T) -> bool {
        (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.z - other.z).abs() <= tol
            && (self.w - other.w).abs() <= tol
    }
}

impl<T: Float + FloatConst> Add for Quaternion<T>
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        let mut tmp = self;
        tmp += other;
        tmp
    }
}

impl<T: Float + FloatConst> AddAssign for Quaternion<T>
{
    fn add_assign(&mut self, other: Self) {
        self.x = self.x + other.x;
        self.y = self.y + other.y;
        self.z = self.z + other.z;
        self.w = self.w + other.w;
    }
}

impl<T: Float + FloatConst> Sub for Quaternion<T>
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        let mut tmp = self;
        tmp -= other;
        tmp
    }
}

impl<T: Float + FloatConst> SubAssign for Quaternion<T>
{
    fn sub_assign(&mut self, other: Self) {
        self.x = self.x - other.x;
        self.y = self.y - other.y;
        self.z = self.z - other.z;
        self.w = self.w - other.w;
    }
}

impl<T: Float + FloatConst> Mul<Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    fn mul(self, other: Quaternion<T>) -> Self::Output {
        self.multiply(&other)
    }
}
impl<T: Float + FloatConst> Mul<&Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    fn mul(self, other: &Quaternion<T>) -> Self::Output {
        self.multiply(other)
    }
}
impl<T: Float + FloatConst> Mul<Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;
    fn mul(self, other: Quaternion<T>) -> Self::Output {
        (&self).multiply(&other)
    }
}
impl<T: Float + FloatConst> Mul<&Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;
    fn mul(self, other: &Quaternion<T>) -> Self::Output {
        (&self).multiply(other)
    }
}

impl<T: Float + FloatConst> Mul<Vector3<T>> for Quaternion<T>
{
    type Output = Quaternion<T>;

    /// Product of this quaternion with `vec` treated as a pure quaternion
    /// (w = 0). This is the left half of the sandwich product used by
    /// [`Quaternion::apply`], not a rotation by itself.
    fn mul(self, vec: Vector3<T>) -> Self::Output {
        Quaternion {
            x: self.w * vec.x + self.y * vec.z - self.z * vec.y,
            y: self.w * vec.y - self.x * vec.z + self.z * vec.x,
            z: self.w * vec.z + self.x * vec.y - self.y * vec.x,
            w: -self.x * vec.x - self.y * vec.y - self.z * vec.z,
        }
    }
}

impl<T: Float + FloatConst> Mul<T> for Quaternion<T>
{
    type Output = Self;

    fn mul(self, scalar: T) -> Self::Output {
        Quaternion {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w * scalar,
        }
    }
}
