//! CPU implementation of the tensor boundary step.

use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

use super::BoundaryOptions;
use super::impl_generic::{move_to_boundary_impl, to_boundary_impl};
use super::traits::TrustRegionBoundaryAlgorithms;
use crate::error::KrylovResult;

impl TrustRegionBoundaryAlgorithms<CpuRuntime> for CpuClient {
    fn to_boundary_tensor(
        &self,
        x: &Tensor<CpuRuntime>,
        d: &Tensor<CpuRuntime>,
        radius: f64,
        options: &BoundaryOptions,
    ) -> KrylovResult<f64> {
        to_boundary_impl(self, x, d, radius, options)
    }

    fn move_to_boundary(
        &self,
        x: &Tensor<CpuRuntime>,
        d: &Tensor<CpuRuntime>,
        radius: f64,
        options: &BoundaryOptions,
    ) -> KrylovResult<Tensor<CpuRuntime>> {
        move_to_boundary_impl(self, x, d, radius, options)
    }
}
