//! Error types for the Krylov kernels.

use std::fmt;

/// Result type for Krylov kernel operations.
pub type KrylovResult<T> = Result<T, KrylovError>;

/// Errors that can occur in the Krylov kernels.
///
/// Only the trust-region boundary step can fail. The Givens rotation and
/// the quadratic root solver accept every finite input and encode all
/// outcomes in their return values.
#[derive(Debug, Clone, PartialEq)]
pub enum KrylovError {
    /// Trust-region radius is not strictly positive.
    InvalidRadius { radius: f64 },

    /// The starting point lies strictly outside the trust region.
    OutsideTrustRegion { x_norm2: f64, radius: f64 },

    /// The line `x + σd` never meets the trust-region boundary.
    NoBoundaryCrossing { context: String },

    /// Invalid input array size or dimensions.
    InvalidInput { context: String },

    /// Error from underlying numr operation.
    NumrError(String),
}

impl fmt::Display for KrylovError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius { radius } => {
                write!(
                    f,
                    "Invalid trust-region radius {}: radius must be positive",
                    radius
                )
            }
            Self::OutsideTrustRegion { x_norm2, radius } => {
                write!(
                    f,
                    "Point outside trust region: ||x||^2 = {} exceeds radius^2 = {}",
                    x_norm2,
                    radius * radius
                )
            }
            Self::NoBoundaryCrossing { context } => {
                write!(f, "No trust-region boundary crossing in {}", context)
            }
            Self::InvalidInput { context } => {
                write!(f, "Invalid input in {}", context)
            }
            Self::NumrError(msg) => {
                write!(f, "numr error: {}", msg)
            }
        }
    }
}

impl std::error::Error for KrylovError {}

impl From<numr::error::Error> for KrylovError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumrError(err.to_string())
    }
}
