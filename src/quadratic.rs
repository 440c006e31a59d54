//! Real roots of a quadratic with iterative refinement.
//!
//! Solves `q2*x^2 + q1*x + q0 = 0` for real `x`. The two roots are formed
//! from Vieta's relations, `d/q2` and `q0/d` with
//! `d = -(q1 + sign(q1)*sqrt(q1^2 - 4*q2*q0)) / 2`, so the sum inside `d`
//! never cancels. When `q0` is negligible next to `q1` the small root is
//! reported as zero instead of being formed from a cancelling difference.
//! A fixed number of Newton steps then polishes both roots.

use std::ops::Deref;

use tracing::trace;

use crate::utils::SQRT_EPS;

/// Options for [`roots_quadratic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadraticOptions {
    /// Number of Newton refinement steps applied to each root
    pub nitref: usize,
}

impl Default for QuadraticOptions {
    fn default() -> Self {
        Self { nitref: 1 }
    }
}

impl QuadraticOptions {
    /// Set the number of Newton refinement steps.
    pub fn with_nitref(mut self, nitref: usize) -> Self {
        self.nitref = nitref;
        self
    }
}

/// The real roots of a polynomial of degree at most two.
///
/// Holds zero, one or two roots inline, in the order they were computed.
/// Dereferences to `[f64]`, so `len`, `is_empty`, `iter` and indexing work
/// as on a slice.
#[derive(Debug, Clone, Copy)]
pub struct QuadraticRoots {
    roots: [f64; 2],
    len: usize,
}

impl QuadraticRoots {
    /// No real roots.
    pub const fn none() -> Self {
        Self {
            roots: [0.0; 2],
            len: 0,
        }
    }

    /// A single root.
    pub const fn one(root: f64) -> Self {
        Self {
            roots: [root, 0.0],
            len: 1,
        }
    }

    /// Two roots, kept in the given order.
    pub const fn two(first: f64, second: f64) -> Self {
        Self {
            roots: [first, second],
            len: 2,
        }
    }

    /// The roots as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.roots[..self.len]
    }

    /// Largest root, or `None` if there are no roots.
    pub fn max(&self) -> Option<f64> {
        self.as_slice().iter().copied().reduce(f64::max)
    }

    /// Smallest root, or `None` if there are no roots.
    pub fn min(&self) -> Option<f64> {
        self.as_slice().iter().copied().reduce(f64::min)
    }
}

impl Deref for QuadraticRoots {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        self.as_slice()
    }
}

impl PartialEq for QuadraticRoots {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl From<QuadraticRoots> for Vec<f64> {
    fn from(roots: QuadraticRoots) -> Self {
        roots.as_slice().to_vec()
    }
}

/// Evaluate `q2*x^2 + q1*x + q0` by Horner's rule.
#[inline]
pub fn evaluate(q2: f64, q1: f64, q0: f64, x: f64) -> f64 {
    (q2 * x + q1) * x + q0
}

/// Compute the real roots of `q2*x^2 + q1*x + q0 = 0`.
///
/// # Arguments
/// * `q2` - Quadratic coefficient; zero reduces the problem to a linear one
/// * `q1` - Linear coefficient
/// * `q0` - Constant coefficient
/// * `options` - Refinement options
///
/// # Returns
/// * No roots if the equation has no real solution (negative discriminant,
///   or a nonzero constant)
/// * `[0.0]` for the identically zero polynomial
/// * `[-q0/q1]` for a linear equation
/// * Two roots for a genuine quadratic, `d/q2` first and `q0/d` second
///
/// # Note
/// If `q1 == 0` the discriminant's square root takes a positive sign, so
/// `x^2 - 4` yields `[-2, 2]` rather than dividing by zero.
pub fn roots_quadratic(q2: f64, q1: f64, q0: f64, options: &QuadraticOptions) -> QuadraticRoots {
    if q2 == 0.0 {
        if q1 == 0.0 {
            return if q0 == 0.0 {
                QuadraticRoots::one(0.0)
            } else {
                QuadraticRoots::none()
            };
        }
        return QuadraticRoots::one(-q0 / q1);
    }

    let rhs = SQRT_EPS * q1 * q1;
    let (mut root1, mut root2) = if (q0 * q2).abs() > rhs {
        let rho = q1 * q1 - 4.0 * q2 * q0;
        if rho < 0.0 {
            return QuadraticRoots::none();
        }
        let sign_q1 = if q1 < 0.0 { -1.0 } else { 1.0 };
        let d = -0.5 * (q1 + sign_q1 * rho.sqrt());
        (d / q2, q0 / d)
    } else {
        trace!(q2 = q2, q1 = q1, q0 = q0, "roots_quadratic: negligible constant term");
        (-q1 / q2, 0.0)
    };

    for _ in 0..options.nitref {
        root1 = newton_step(q2, q1, q0, root1);
        root2 = newton_step(q2, q1, q0, root2);
    }

    QuadraticRoots::two(root1, root2)
}

/// Convenience wrapper for [`roots_quadratic`] with one refinement step.
pub fn roots_quadratic_default(q2: f64, q1: f64, q0: f64) -> QuadraticRoots {
    roots_quadratic(q2, q1, q0, &QuadraticOptions::default())
}

/// One Newton step on `q`, skipped when the derivative vanishes.
#[inline]
fn newton_step(q2: f64, q1: f64, q0: f64, root: f64) -> f64 {
    let dq = 2.0 * q2 * root + q1;
    if dq == 0.0 {
        trace!(root = root, "roots_quadratic: zero derivative, refinement skipped");
        return root;
    }
    root - evaluate(q2, q1, q0, root) / dq
}
