//! Shared numerical helpers for the Krylov kernels.
//!
//! Only the handful of BLAS-1 style operations the kernels need internally.
//! Vector storage and general linear algebra belong to the calling solver.

/// Square root of the double-precision machine epsilon.
///
/// Used as the relative threshold below which the constant term of a
/// quadratic is considered negligible.
pub const SQRT_EPS: f64 = 1.490_116_119_384_765_6e-8;

/// Sign of `x`: `1.0`, `-1.0`, or `0.0` for a zero (of either sign).
///
/// Unlike [`f64::signum`], zero maps to zero. Callers that need a nonzero
/// sign for zero must handle that case explicitly.
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Dot product of two equal-length vectors.
///
/// Callers are responsible for checking the lengths; extra trailing
/// elements of the longer slice are ignored.
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Compute the squared L2 norm of a vector.
#[inline]
pub fn norm_squared(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum()
}
