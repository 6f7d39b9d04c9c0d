//! Mathematical utilities for terminator and distance calculations.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Mathematical modulo: the result always lies in `[0, divisor)` for a positive divisor.
///
/// Plain `%` is a truncating remainder and keeps the sign of the dividend, which
/// would shift angles before J2000 by a full turn.
pub fn modulo(value: f64, divisor: f64) -> f64 {
    let remainder = fmod(value, divisor);
    if remainder < 0.0 {
        remainder + divisor
    } else {
        remainder
    }
}

/// Normalizes an angle in degrees to the range [0, 360).
#[inline]
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    modulo(degrees, 360.0)
}

/// Normalizes an hour value to the range [0, 24).
#[inline]
pub fn normalize_hours_0_to_24(hours: f64) -> f64 {
    modulo(hours, 24.0)
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes sqrt(x) using the appropriate function for the compilation target.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Truncating floating-point remainder, same sign as `x`.
#[inline]
fn fmod(x: f64, y: f64) -> f64 {
    #[cfg(feature = "std")]
    return x % y;

    #[cfg(not(feature = "std"))]
    return libm::fmod(x, y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_radian_conversion() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPSILON);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < EPSILON);
        assert!((degrees_to_radians(0.0)).abs() < EPSILON);

        assert!((radians_to_degrees(PI) - 180.0).abs() < EPSILON);
        assert!((radians_to_degrees(PI / 2.0) - 90.0).abs() < EPSILON);
        assert!((radians_to_degrees(0.0)).abs() < EPSILON);
    }

    #[test]
    fn test_modulo_sign_follows_divisor() {
        assert_eq!(modulo(370.0, 360.0), 10.0);
        assert_eq!(modulo(-10.0, 360.0), 350.0);
        assert_eq!(modulo(-360.0, 360.0), 0.0);
        assert_eq!(modulo(-1.5, 24.0), 22.5);
        assert_eq!(modulo(48.0, 24.0), 0.0);

        // truncating remainder would keep the negative sign
        assert!((-10.0_f64 % 360.0) < 0.0);
    }

    #[test]
    fn test_normalize_degrees_0_to_360() {
        assert_eq!(normalize_degrees_0_to_360(0.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(90.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(360.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(450.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(-90.0), 270.0);
        assert_eq!(normalize_degrees_0_to_360(-360.0), 0.0);
    }

    #[test]
    fn test_normalize_hours_0_to_24() {
        assert_eq!(normalize_hours_0_to_24(25.0), 1.0);
        assert_eq!(normalize_hours_0_to_24(-1.0), 23.0);
        assert_eq!(normalize_hours_0_to_24(12.5), 12.5);
    }

    #[test]
    fn test_trigonometric_functions() {
        assert!((sin(0.0)).abs() < EPSILON);
        assert!((cos(0.0) - 1.0).abs() < EPSILON);
        assert!((tan(0.0)).abs() < EPSILON);
        assert!((atan(1.0) - PI / 4.0).abs() < EPSILON);
        assert!((asin(1.0) - PI / 2.0).abs() < EPSILON);
        assert!((atan2(1.0, 1.0) - PI / 4.0).abs() < EPSILON);
        assert!((sqrt(16.0) - 4.0).abs() < EPSILON);
        assert_eq!(floor(-0.5), -1.0);
    }
}
