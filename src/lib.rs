//! solvr-krylov - Numerically careful kernels for Krylov and trust-region solvers
//!
//! Iterative solvers such as LSQR, LSMR, MINRES and truncated CG spend their
//! time in matrix-vector products, but their robustness hinges on a few
//! scalar computations done once per iteration. This crate provides those
//! computations as small, pure functions:
//!
//! - [`sym_givens`] - Symmetric Givens rotation `(c, s, rho)` zeroing one of two values
//! - [`roots_quadratic`] - Real roots of `q2*x^2 + q1*x + q0` with Newton refinement
//! - [`to_boundary`] - Step length to a spherical trust-region boundary
//!
//! None of them keeps state, so they may be called from any number of threads.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │        Krylov / trust-region driver (caller)              │
//! └───────┬──────────────────┬────────────────────┬───────────┘
//!         │                  │                    │
//! ┌───────▼──────┐  ┌────────▼────────┐  ┌────────▼─────────┐
//! │    givens    │  │    quadratic    │◄─┤   trust_region   │
//! └──────────────┘  └─────────────────┘  └──────────────────┘
//! ```
//!
//! # Backend Support
//!
//! The scalar kernels work on `f64` values and slices. The trust-region step
//! is also available for `numr` tensors through
//! [`TrustRegionBoundaryAlgorithms`], implemented for the CPU client and,
//! behind the `cuda` and `wgpu` features, for the GPU clients.
//!
//! # Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `cuda`  | Enable CUDA GPU acceleration | CUDA 12.x, numr/cuda |
//! | `wgpu`  | Enable WebGPU cross-platform GPU | numr/wgpu |
//!
//! # Example
//!
//! ```
//! use solvr_krylov::{BoundaryOptions, QuadraticOptions, roots_quadratic, sym_givens, to_boundary};
//!
//! let g = sym_givens(3.0, 4.0);
//! assert!((g.rho - 5.0).abs() < 1e-15);
//!
//! let roots = roots_quadratic(1.0, -3.0, 2.0, &QuadraticOptions::default());
//! assert_eq!(roots.as_slice(), &[2.0, 1.0]);
//!
//! let sigma = to_boundary(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], 2.0, &BoundaryOptions::default())?;
//! assert_eq!(sigma, 2.0);
//! # Ok::<(), solvr_krylov::KrylovError>(())
//! ```

pub mod error;
pub mod givens;
pub mod quadratic;
pub mod trust_region;
pub mod utils;

pub use error::{KrylovError, KrylovResult};
pub use givens::{GivensRotation, sym_givens};
pub use quadratic::{QuadraticOptions, QuadraticRoots, roots_quadratic, roots_quadratic_default};
pub use trust_region::{
    BoundaryOptions, TrustRegionBoundaryAlgorithms, boundary_steps, to_boundary,
};

// Re-export numr types that users will commonly need
pub use numr::runtime::{Runtime, RuntimeClient};
pub use numr::tensor::Tensor;
