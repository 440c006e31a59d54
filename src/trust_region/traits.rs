//! Trust-region boundary step over `numr` tensors.

use numr::runtime::Runtime;
use numr::tensor::Tensor;

use super::BoundaryOptions;
use crate::error::KrylovResult;

/// Boundary step algorithms for 1-D tensors.
///
/// Implemented for every `numr` client so that a solver running on a GPU
/// can truncate its step without copying vectors back to the host. Only the
/// three inner products leave the device.
pub trait TrustRegionBoundaryAlgorithms<R: Runtime> {
    /// Step length from `x` along `d` to the trust-region boundary.
    ///
    /// Tensor counterpart of [`to_boundary`](super::to_boundary), with the
    /// same errors. `x` and `d` must be 1-D tensors of equal shape.
    fn to_boundary_tensor(
        &self,
        x: &Tensor<R>,
        d: &Tensor<R>,
        radius: f64,
        options: &BoundaryOptions,
    ) -> KrylovResult<f64>;

    /// The point `x + σ d` on the trust-region boundary.
    fn move_to_boundary(
        &self,
        x: &Tensor<R>,
        d: &Tensor<R>,
        radius: f64,
        options: &BoundaryOptions,
    ) -> KrylovResult<Tensor<R>>;
}
