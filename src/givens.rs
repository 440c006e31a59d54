//! Symmetric Givens rotations.
//!
//! Computes a reflection-style plane rotation
//!
//! ```text
//! [ c   s ] [ a ]   [ rho ]
//! [ s  -c ] [ b ] = [  0  ]
//! ```
//!
//! as used by LSQR, LSMR and MINRES to annihilate the subdiagonal of a
//! bidiagonal or tridiagonal factor. The parameters are formed by dividing
//! by the larger of `|a|` and `|b|`, so `a^2 + b^2` is never evaluated and
//! neither overflow nor harmful underflow can occur for finite inputs.

use crate::error::{KrylovError, KrylovResult};
use crate::utils::sign;

/// Parameters of a symmetric Givens rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GivensRotation {
    /// Cosine of the rotation
    pub c: f64,
    /// Sine of the rotation
    pub s: f64,
    /// Resulting magnitude, `rho = c*a + s*b`
    pub rho: f64,
}

impl GivensRotation {
    /// Apply the rotation to the pair `(x, y)`.
    ///
    /// Returns `(c*x + s*y, s*x - c*y)`. The matrix is symmetric and
    /// orthogonal, so applying it twice restores the original pair.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.c * x + self.s * y, self.s * x - self.c * y)
    }

    /// Apply the rotation in place to two rows of equal length.
    ///
    /// # Errors
    /// * `InvalidInput` if `x` and `y` differ in length
    pub fn apply_slices(&self, x: &mut [f64], y: &mut [f64]) -> KrylovResult<()> {
        if x.len() != y.len() {
            return Err(KrylovError::InvalidInput {
                context: format!(
                    "GivensRotation::apply_slices: length mismatch ({} vs {})",
                    x.len(),
                    y.len()
                ),
            });
        }

        for (xi, yi) in x.iter_mut().zip(y.iter_mut()) {
            let (u, v) = self.apply(*xi, *yi);
            *xi = u;
            *yi = v;
        }
        Ok(())
    }
}

/// Compute a symmetric Givens rotation zeroing `b` against `a`.
///
/// # Arguments
/// * `a` - First component, rotated onto the axis
/// * `b` - Second component, annihilated
///
/// # Returns
/// `(c, s, rho)` with `c*a + s*b = rho`, `s*a - c*b = 0` and `c^2 + s^2 = 1`.
///
/// # Note
/// When `a == b == 0` the rotation is the reflection `c = 1, s = 0` rather
/// than the degenerate `c = 0`, so `c` is nonzero whenever `b` is zero.
pub fn sym_givens(a: f64, b: f64) -> GivensRotation {
    if b == 0.0 {
        let c = if a == 0.0 { 1.0 } else { sign(a) };
        return GivensRotation {
            c,
            s: 0.0,
            rho: a.abs(),
        };
    }

    if a == 0.0 {
        return GivensRotation {
            c: 0.0,
            s: sign(b),
            rho: b.abs(),
        };
    }

    if b.abs() > a.abs() {
        let t = a / b;
        let s = sign(b) / (1.0 + t * t).sqrt();
        let c = s * t;
        GivensRotation { c, s, rho: b / s }
    } else {
        let t = b / a;
        let c = sign(a) / (1.0 + t * t).sqrt();
        let s = c * t;
        GivensRotation { c, s, rho: a / c }
    }
}
