use num_traits::{cast, Float, FloatConst};

/// Convert an angle in degrees to radians.
///
pub fn deg_to_rad<T: Float + FloatConst>(angle: T) -> T {
    angle * T::PI() / cast(180.0).unwrap()
}

/// Convert an angle in radians to degrees.
///
pub fn rad_to_deg<T: Float + FloatConst>(angle: T) -> T {
    angle * cast(180.0).unwrap() / T::PI()
}
