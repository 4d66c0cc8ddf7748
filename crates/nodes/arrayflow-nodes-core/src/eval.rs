//! Evaluation of the selected elementwise operation.
//!
//! [`evaluate`] is the compute half of the operator node: the reconfigure
//! pass (see [`crate::resolver`]) has already resolved the selection to a
//! concrete [`OpKind`], and this module applies it to the connected arrays.
//! [`numeric`] holds the shared elementwise kernels.

mod numeric;

#[cfg(test)]
mod tests;

use arrayflow_api_core::NdArray;
use thiserror::Error;

use crate::types::{OpArity, OpKind};
use numeric::{binary_mask, binary_real, unary_real};

/// Outcome of a compute pass.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalOutcome {
    /// A freshly built array to publish on the output port.
    Published(NdArray),
    /// Nothing to do: node disabled or no inputs connected. The output port
    /// is left untouched.
    Idle,
}

/// Failures scoped to a single compute invocation. Reported to the host,
/// never fatal to it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("operand shapes {lhs:?} and {rhs:?} do not align")]
    ShapeMismatch { lhs: Vec<usize>, rhs: Vec<usize> },
    #[error("operation '{op}' cannot take {operands} array operands")]
    ArityMismatch { op: &'static str, operands: usize },
}

/// Apply the selected operation to the connected arrays.
///
/// Binary operations are applied left-to-right and never commuted: with both
/// ports connected, `Divide` computes left / right. With a single port
/// connected, a binary operation takes the array as its left operand and
/// `scalar` as its right; a unary operation ignores `scalar`. Either a
/// complete result is returned for publication or nothing is.
pub fn evaluate(
    op: OpKind,
    left: Option<&NdArray>,
    right: Option<&NdArray>,
    scalar: f32,
    enabled: bool,
) -> Result<EvalOutcome, EvalError> {
    if !enabled {
        return Ok(EvalOutcome::Idle);
    }

    match (left, right) {
        (None, None) => Ok(EvalOutcome::Idle),
        (Some(lhs), Some(rhs)) => {
            if op.arity() == OpArity::Unary {
                return Err(EvalError::ArityMismatch {
                    op: op.label(),
                    operands: 2,
                });
            }
            apply_binary(op, lhs, rhs).map(EvalOutcome::Published)
        }
        (Some(arr), None) | (None, Some(arr)) => {
            let out = match op.arity() {
                OpArity::Unary => apply_unary(op, arr),
                OpArity::Binary => apply_binary(op, arr, &NdArray::scalar(scalar))?,
            };
            Ok(EvalOutcome::Published(out))
        }
    }
}

fn apply_binary(op: OpKind, lhs: &NdArray, rhs: &NdArray) -> Result<NdArray, EvalError> {
    use OpKind::*;
    match op {
        Add => binary_real(lhs, rhs, |x, y| x + y),
        Subtract => binary_real(lhs, rhs, |x, y| x - y),
        Multiply => binary_real(lhs, rhs, |x, y| x * y),
        Divide => binary_real(lhs, rhs, |x, y| if y != 0.0 { x / y } else { f32::NAN }),
        Power => binary_real(lhs, rhs, |x, y| x.powf(y)),
        ArcTan2 => binary_real(lhs, rhs, |x, y| x.atan2(y)),
        Max => binary_real(lhs, rhs, f32::max),
        Min => binary_real(lhs, rhs, f32::min),
        Greater => binary_mask(lhs, rhs, |x, y| x > y),
        Less => binary_mask(lhs, rhs, |x, y| x < y),
        Equal => binary_mask(lhs, rhs, |x, y| x == y),
        NotEqual => binary_mask(lhs, rhs, |x, y| x != y),
        GreaterEqual => binary_mask(lhs, rhs, |x, y| x >= y),
        LessEqual => binary_mask(lhs, rhs, |x, y| x <= y),
        _ => unreachable!("unary operation dispatched as binary"),
    }
}

fn apply_unary(op: OpKind, input: &NdArray) -> NdArray {
    use OpKind::*;
    match op {
        Exponential => unary_real(input, f32::exp),
        LogN => unary_real(input, f32::ln),
        Log10 => unary_real(input, f32::log10),
        Reciprocal => unary_real(input, f32::recip),
        // Identity on real data; complex buffers are not modeled.
        Conjugate => unary_real(input, |x| x),
        Magnitude => unary_real(input, f32::abs),
        Sin => unary_real(input, f32::sin),
        Cos => unary_real(input, f32::cos),
        Tan => unary_real(input, f32::tan),
        ArcSin => unary_real(input, f32::asin),
        ArcCos => unary_real(input, f32::acos),
        ArcTan => unary_real(input, f32::atan),
        _ => unreachable!("binary operation dispatched as unary"),
    }
}
