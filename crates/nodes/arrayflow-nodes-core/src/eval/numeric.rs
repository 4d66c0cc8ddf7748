//! Elementwise kernels shared by the operator dispatch.

use arrayflow_api_core::{coercion, Elements, NdArray};

use super::EvalError;

/// Align two operands for pointwise application, broadcasting lone elements.
/// Boolean buffers are coerced to 0/1 reals on the way in.
fn aligned(lhs: &NdArray, rhs: &NdArray) -> Result<(Vec<usize>, Vec<f32>, Vec<f32>), EvalError> {
    let a = coercion::to_real(lhs);
    let b = coercion::to_real(rhs);

    if lhs.shape == rhs.shape {
        return Ok((lhs.shape.clone(), a, b));
    }
    if lhs.is_scalar() {
        let value = a.first().copied().unwrap_or(f32::NAN);
        return Ok((rhs.shape.clone(), vec![value; b.len()], b));
    }
    if rhs.is_scalar() {
        let value = b.first().copied().unwrap_or(f32::NAN);
        let repeated = vec![value; a.len()];
        return Ok((lhs.shape.clone(), a, repeated));
    }

    Err(EvalError::ShapeMismatch {
        lhs: lhs.shape.clone(),
        rhs: rhs.shape.clone(),
    })
}

/// Apply `op` pairwise, producing a real array.
pub fn binary_real<F>(lhs: &NdArray, rhs: &NdArray, op: F) -> Result<NdArray, EvalError>
where
    F: Fn(f32, f32) -> f32 + Copy,
{
    let (shape, a, b) = aligned(lhs, rhs)?;
    let data: Vec<f32> = a.iter().zip(b.iter()).map(|(x, y)| op(*x, *y)).collect();
    Ok(NdArray {
        shape,
        elements: Elements::Real(data),
    })
}

/// Apply `pred` pairwise, producing a boolean mask.
pub fn binary_mask<F>(lhs: &NdArray, rhs: &NdArray, pred: F) -> Result<NdArray, EvalError>
where
    F: Fn(f32, f32) -> bool + Copy,
{
    let (shape, a, b) = aligned(lhs, rhs)?;
    let data: Vec<bool> = a.iter().zip(b.iter()).map(|(x, y)| pred(*x, *y)).collect();
    Ok(NdArray {
        shape,
        elements: Elements::Bool(data),
    })
}

/// Apply `op` to every element, keeping the input's shape.
pub fn unary_real<F>(input: &NdArray, op: F) -> NdArray
where
    F: Fn(f32) -> f32 + Copy,
{
    let data: Vec<f32> = coercion::to_real(input).iter().map(|x| op(*x)).collect();
    NdArray {
        shape: input.shape.clone(),
        elements: Elements::Real(data),
    }
}
