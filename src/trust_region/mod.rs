//! Trust-region boundary step.
//!
//! Given a point `x` inside the closed ball `||x|| <= radius` and a direction
//! `d`, find the step `σ >= 0` with `||x + σ d|| = radius`. Squaring gives
//!
//! ```text
//! ||d||^2 σ^2 + 2 (x·d) σ + (||x||^2 - radius^2) = 0
//! ```
//!
//! whose constant term is non-positive whenever `x` is feasible, so the
//! discriminant is non-negative and the larger root is the forward crossing.
//! Truncated CG (Steihaug-Toint), CG-Lanczos and trust-region LSQR/LSMR use
//! this to stop an iterate on the boundary.
//!
//! The slice functions here cover the common CPU case. The
//! [`TrustRegionBoundaryAlgorithms`] trait computes the same step for `numr`
//! tensors on any backend, keeping the dot products on the device.

mod cpu;
#[cfg(feature = "cuda")]
mod cuda;
pub mod impl_generic;
mod traits;
#[cfg(feature = "wgpu")]
mod wgpu;

pub use traits::TrustRegionBoundaryAlgorithms;

use tracing::debug;

use crate::error::{KrylovError, KrylovResult};
use crate::quadratic::{QuadraticOptions, roots_quadratic};
use crate::utils::{dot, norm_squared};

/// Options for the boundary step.
///
/// Either norm may be supplied when the calling solver already tracks it.
/// A value of `0.0` means "not supplied" and the norm is computed from the
/// vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundaryOptions {
    /// Precomputed `||x||^2`
    pub x_norm2: f64,
    /// Precomputed `||d||^2`
    pub d_norm2: f64,
}

impl BoundaryOptions {
    /// Supply a precomputed `||x||^2`.
    pub fn with_x_norm2(mut self, x_norm2: f64) -> Self {
        self.x_norm2 = x_norm2;
        self
    }

    /// Supply a precomputed `||d||^2`.
    pub fn with_d_norm2(mut self, d_norm2: f64) -> Self {
        self.d_norm2 = d_norm2;
        self
    }
}

/// Step length from `x` along `d` to the trust-region boundary.
///
/// # Arguments
/// * `x` - Current point, must satisfy `||x|| <= radius`
/// * `d` - Search direction, same length as `x`
/// * `radius` - Trust-region radius, must be positive
/// * `options` - Optional precomputed norms
///
/// # Returns
/// The largest `σ` with `||x + σ d|| = radius`. It is non-negative, and zero
/// only when `x` already lies on the boundary and `d` points outward or is zero.
///
/// # Errors
/// * `InvalidInput` if `x` and `d` differ in length
/// * `InvalidRadius` if `radius <= 0`
/// * `OutsideTrustRegion` if `||x||^2 > radius^2`
/// * `NoBoundaryCrossing` if `d` is zero and `x` is strictly inside the ball
pub fn to_boundary(
    x: &[f64],
    d: &[f64],
    radius: f64,
    options: &BoundaryOptions,
) -> KrylovResult<f64> {
    boundary_steps(x, d, radius, options).map(|(_, sigma)| sigma)
}

/// Both intersections of the line `x + σ d` with the trust-region boundary.
///
/// Returns `(σ_min, σ_max)`. For a feasible `x`, `σ_min <= 0 <= σ_max`.
/// When the line touches the sphere once (zero direction with `x` on the
/// boundary) both values coincide.
///
/// # Errors
/// Same as [`to_boundary`].
pub fn boundary_steps(
    x: &[f64],
    d: &[f64],
    radius: f64,
    options: &BoundaryOptions,
) -> KrylovResult<(f64, f64)> {
    if x.len() != d.len() {
        debug!(x_len = x.len(), d_len = d.len(), "to_boundary: length mismatch");
        return Err(KrylovError::InvalidInput {
            context: format!(
                "to_boundary: x has length {} but d has length {}",
                x.len(),
                d.len()
            ),
        });
    }

    let x_norm2 = if options.x_norm2 != 0.0 {
        options.x_norm2
    } else {
        norm_squared(x)
    };
    let d_norm2 = if options.d_norm2 != 0.0 {
        options.d_norm2
    } else {
        norm_squared(d)
    };

    boundary_interval(x_norm2, dot(x, d), d_norm2, radius, "to_boundary")
}

/// Solve the boundary quadratic from its inner products.
///
/// Shared by the slice and tensor entry points.
pub(crate) fn boundary_interval(
    x_norm2: f64,
    x_dot_d: f64,
    d_norm2: f64,
    radius: f64,
    context: &str,
) -> KrylovResult<(f64, f64)> {
    if radius.is_nan() || radius <= 0.0 {
        debug!(radius = radius, "{}: non-positive radius", context);
        return Err(KrylovError::InvalidRadius { radius });
    }

    let radius2 = radius * radius;
    if x_norm2 > radius2 {
        debug!(
            x_norm2 = x_norm2,
            radius = radius,
            "{}: point outside trust region",
            context
        );
        return Err(KrylovError::OutsideTrustRegion { x_norm2, radius });
    }

    let roots = roots_quadratic(
        d_norm2,
        2.0 * x_dot_d,
        x_norm2 - radius2,
        &QuadraticOptions::default(),
    );

    match roots.as_slice() {
        [root] => Ok((*root, *root)),
        [r1, r2] => Ok((r1.min(*r2), r1.max(*r2))),
        _ => {
            debug!(d_norm2 = d_norm2, "{}: direction never reaches boundary", context);
            Err(KrylovError::NoBoundaryCrossing {
                context: format!("{}: zero direction from an interior point", context),
            })
        }
    }
}
