//! Runtime-generic boundary step.
//!
//! Forms `x·x`, `x·d` and `d·d` with tensor ops on the client's device and
//! hands the scalars to the same quadratic solve the slice version uses.

use numr::dtype::DType;
use numr::ops::{ScalarOps, TensorOps};
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

use super::{BoundaryOptions, boundary_interval};
use crate::error::{KrylovError, KrylovResult};

/// Step length from `x` along `d` to the trust-region boundary.
pub fn to_boundary_impl<R, C>(
    client: &C,
    x: &Tensor<R>,
    d: &Tensor<R>,
    radius: f64,
    options: &BoundaryOptions,
) -> KrylovResult<f64>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    if x.shape().len() != 1 || x.shape() != d.shape() {
        return Err(KrylovError::InvalidInput {
            context: format!(
                "to_boundary_tensor: x and d must be 1-D tensors of equal shape, got {:?} and {:?}",
                x.shape(),
                d.shape()
            ),
        });
    }

    let x_norm2 = if options.x_norm2 != 0.0 {
        options.x_norm2
    } else {
        tensor_dot(client, x, x)?
    };
    let d_norm2 = if options.d_norm2 != 0.0 {
        options.d_norm2
    } else {
        tensor_dot(client, d, d)?
    };
    let x_dot_d = tensor_dot(client, x, d)?;

    let (_, sigma) = boundary_interval(x_norm2, x_dot_d, d_norm2, radius, "to_boundary_tensor")?;
    Ok(sigma)
}

/// The boundary point `x + σ d`.
pub fn move_to_boundary_impl<R, C>(
    client: &C,
    x: &Tensor<R>,
    d: &Tensor<R>,
    radius: f64,
    options: &BoundaryOptions,
) -> KrylovResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R> + RuntimeClient<R>,
{
    let sigma = to_boundary_impl(client, x, d, radius, options)?;
    let sigma_d = client.mul_scalar(d, sigma)?;
    Ok(client.add(x, &sigma_d)?)
}

/// Dot product of two 1-D tensors, read back as `f64`.
fn tensor_dot<R, C>(client: &C, a: &Tensor<R>, b: &Tensor<R>) -> KrylovResult<f64>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    let prod = client.mul(a, b)?;
    let sum = client.sum(&prod, &[0], false)?;
    // WebGPU has no F64
    let value = match sum.dtype() {
        DType::F32 => {
            let v: f32 = sum.item()?;
            f64::from(v)
        }
        _ => sum.item()?,
    };
    Ok(value)
}
