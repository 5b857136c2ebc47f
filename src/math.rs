//! Numeric helpers shared by the interpolator, the axis mapper and the path writer.

#[cfg(not(feature = "std"))]
use libm;

/// Linear interpolation `a·(1 − t) + b·t`.
///
/// Exact at both ends: `t = 0` yields `a` and `t = 1` yields `b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Computes sqrt(x) using the appropriate function for the compilation target.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// Computes x^y using the appropriate function for the compilation target.
#[inline]
pub fn powf(x: f64, y: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.powf(y);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, y);
}
