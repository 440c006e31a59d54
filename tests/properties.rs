//! Property-based tests for the Krylov kernels.
//!
//! These tests use proptest to generate random inputs and verify the
//! numerical identities each kernel promises.
//!
//! Run with: cargo test --test properties

use proptest::prelude::*;
use solvr_krylov::quadratic::evaluate;
use solvr_krylov::{
    BoundaryOptions, KrylovError, QuadraticOptions, boundary_steps, roots_quadratic, sym_givens,
    to_boundary,
};

// =============================================================================
// Strategies
// =============================================================================

/// A finite value spread over many orders of magnitude, either sign.
fn arb_wide_scalar() -> impl Strategy<Value = f64> {
    (-1.0..1.0f64, -150i32..150).prop_map(|(m, e)| m * 10f64.powi(e))
}

/// Quadratic coefficients with two well-separated real roots.
///
/// Returns `(q2, q1, q0, r_lo, r_hi)`.
fn arb_separated_quadratic() -> impl Strategy<Value = (f64, f64, f64, f64, f64)> {
    (-100.0..100.0f64, 0.5..50.0f64, 0.1..10.0f64, any::<bool>()).prop_map(
        |(r1, gap, k, negate)| {
            let r2 = r1 + gap;
            let k = if negate { -k } else { k };
            (k, -k * (r1 + r2), k * r1 * r2, r1, r2)
        },
    )
}

/// A point strictly inside the ball of the given radius, a direction, and the radius.
fn arb_feasible_problem() -> impl Strategy<Value = (Vec<f64>, Vec<f64>, f64)> {
    (1usize..8).prop_flat_map(|n| {
        (
            prop::collection::vec(-10.0..10.0f64, n),
            prop::collection::vec(-10.0..10.0f64, n),
            0.1..10.0f64,
            0.0..0.99f64,
        )
            .prop_map(|(x_raw, d, radius, frac)| {
                let norm = x_raw.iter().map(|v| v * v).sum::<f64>().sqrt();
                let x = if norm > 0.0 {
                    x_raw.iter().map(|v| v * radius * frac / norm).collect()
                } else {
                    x_raw
                };
                (x, d, radius)
            })
    })
}

fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

// =============================================================================
// Property Tests: Givens rotation
// =============================================================================

proptest! {
    /// The rotation maps (a, b) onto (rho, 0) and is orthogonal.
    #[test]
    fn givens_annihilates_second_component(a in arb_wide_scalar(), b in arb_wide_scalar()) {
        let g = sym_givens(a, b);
        let scale = a.abs().max(b.abs()).max(f64::MIN_POSITIVE);
        let tol = 8.0 * f64::EPSILON * scale;

        prop_assert!((g.c * a + g.s * b - g.rho).abs() <= tol);
        prop_assert!((g.s * a - g.c * b).abs() <= tol);
        prop_assert!((g.c * g.c + g.s * g.s - 1.0).abs() <= 8.0 * f64::EPSILON);
        prop_assert!(g.rho >= 0.0);
    }

    /// Identical inputs give bit-identical outputs.
    #[test]
    fn givens_is_pure(a in arb_wide_scalar(), b in arb_wide_scalar()) {
        let g1 = sym_givens(a, b);
        let g2 = sym_givens(a, b);
        prop_assert_eq!(g1.c.to_bits(), g2.c.to_bits());
        prop_assert_eq!(g1.s.to_bits(), g2.s.to_bits());
        prop_assert_eq!(g1.rho.to_bits(), g2.rho.to_bits());
    }
}

// =============================================================================
// Property Tests: Quadratic roots
// =============================================================================

proptest! {
    /// Both roots of a well-separated quadratic are recovered.
    #[test]
    fn quadratic_recovers_roots((q2, q1, q0, r_lo, r_hi) in arb_separated_quadratic()) {
        let roots = roots_quadratic(q2, q1, q0, &QuadraticOptions::default());
        prop_assert_eq!(roots.len(), 2);

        let lo = roots.min().unwrap();
        let hi = roots.max().unwrap();
        prop_assert!((lo - r_lo).abs() <= 1e-9 * (1.0 + r_lo.abs()));
        prop_assert!((hi - r_hi).abs() <= 1e-9 * (1.0 + r_hi.abs()));
    }

    /// Newton refinement never makes a residual worse beyond rounding.
    #[test]
    fn quadratic_refinement_does_not_increase_residual(
        (q2, q1, q0, _, _) in arb_separated_quadratic()
    ) {
        let before = roots_quadratic(q2, q1, q0, &QuadraticOptions::default().with_nitref(0));
        let after = roots_quadratic(q2, q1, q0, &QuadraticOptions::default().with_nitref(1));
        prop_assert_eq!(before.len(), after.len());

        for (&r0, &r1) in before.iter().zip(after.iter()) {
            let res0 = evaluate(q2, q1, q0, r0).abs();
            let res1 = evaluate(q2, q1, q0, r1).abs();
            let floor = 16.0 * f64::EPSILON * (q2.abs() * r1 * r1 + (q1 * r1).abs() + q0.abs());
            prop_assert!(res1 <= res0 + floor, "residual grew: {} -> {}", res0, res1);
        }
    }

    /// A quadratic with positive-definite form has no real roots.
    #[test]
    fn quadratic_negative_discriminant_is_empty(
        q2 in 0.1..10.0f64,
        q1 in -1.0..1.0f64,
        extra in 0.1..10.0f64,
    ) {
        // q0 chosen so that q1^2 - 4 q2 q0 = -extra
        let q0 = (q1 * q1 + extra) / (4.0 * q2);
        let roots = roots_quadratic(q2, q1, q0, &QuadraticOptions::default());
        prop_assert!(roots.is_empty());
    }
}

// =============================================================================
// Property Tests: Trust-region boundary
// =============================================================================

proptest! {
    /// The step lands on the sphere: ||x + σ d|| = radius.
    #[test]
    fn boundary_step_reconstructs_radius((x, d, radius) in arb_feasible_problem()) {
        prop_assume!(norm(&d) > 1e-3);

        let sigma = to_boundary(&x, &d, radius, &BoundaryOptions::default()).unwrap();
        prop_assert!(sigma > 0.0);

        let p: Vec<f64> = x.iter().zip(&d).map(|(xi, di)| xi + sigma * di).collect();
        prop_assert!((norm(&p) - radius).abs() <= 1e-10 * radius);
    }

    /// Both intersections straddle the starting point.
    #[test]
    fn boundary_steps_straddle_origin((x, d, radius) in arb_feasible_problem()) {
        prop_assume!(norm(&d) > 1e-3);

        let (lo, hi) = boundary_steps(&x, &d, radius, &BoundaryOptions::default()).unwrap();
        prop_assert!(lo < 0.0);
        prop_assert!(hi > 0.0);
    }

    /// Identical inputs give bit-identical outputs.
    #[test]
    fn boundary_step_is_pure((x, d, radius) in arb_feasible_problem()) {
        prop_assume!(norm(&d) > 1e-3);

        let a = to_boundary(&x, &d, radius, &BoundaryOptions::default()).unwrap();
        let b = to_boundary(&x, &d, radius, &BoundaryOptions::default()).unwrap();
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    /// A non-positive radius is always rejected.
    #[test]
    fn boundary_rejects_non_positive_radius(
        (x, d, _) in arb_feasible_problem(),
        radius in -10.0..=0.0f64,
    ) {
        let result = to_boundary(&x, &d, radius, &BoundaryOptions::default());
        prop_assert!(matches!(result, Err(KrylovError::InvalidRadius { .. })), "{:?}", result);
    }

    /// A point outside the ball is always rejected.
    #[test]
    fn boundary_rejects_infeasible_point(
        x_raw in prop::collection::vec(-10.0..10.0f64, 3),
        d in prop::collection::vec(-10.0..10.0f64, 3),
        radius in 0.1..10.0f64,
        factor in 1.01..10.0f64,
    ) {
        let n = norm(&x_raw);
        prop_assume!(n > 1e-6);
        let x: Vec<f64> = x_raw.iter().map(|v| v * radius * factor / n).collect();

        let result = to_boundary(&x, &d, radius, &BoundaryOptions::default());
        prop_assert!(
            matches!(result, Err(KrylovError::OutsideTrustRegion { .. })),
            "{:?}",
            result
        );
    }
}
