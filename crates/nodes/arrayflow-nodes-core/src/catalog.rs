//! Operation tables for each mode/connectivity pair.

use crate::types::{Arity, Mode, OpKind};

use OpKind::*;

/// Every operation the node can expose, in widget order. This is the list
/// shown before the first reconfigure pass narrows it down.
pub const ALL: &[OpKind] = &[
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Exponential,
    LogN,
    Log10,
    Reciprocal,
    Conjugate,
    Magnitude,
    Sin,
    Cos,
    Tan,
    ArcSin,
    ArcCos,
    ArcTan,
    ArcTan2,
    Max,
    Min,
    Greater,
    Less,
    Equal,
    NotEqual,
    GreaterEqual,
    LessEqual,
];

const DUAL_STANDARD: &[OpKind] = &[Add, Subtract, Multiply, Divide, Power];

const DUAL_TRIGONOMETRIC: &[OpKind] = &[ArcTan2];

const DUAL_COMPARISON: &[OpKind] = &[
    Max,
    Min,
    Greater,
    Less,
    Equal,
    NotEqual,
    GreaterEqual,
    LessEqual,
];

const SINGLE_STANDARD: &[OpKind] = &[
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Exponential,
    LogN,
    Log10,
    Reciprocal,
    Conjugate,
    Magnitude,
];

const SINGLE_TRIGONOMETRIC: &[OpKind] = &[Sin, Cos, Tan, ArcSin, ArcCos, ArcTan];

const SINGLE_COMPARISON: &[OpKind] = &[Greater, Less, Equal, NotEqual, GreaterEqual, LessEqual];

/// Operations valid for `mode` at the given connectivity. `None` when idle:
/// with no inputs connected the previous catalog is left untouched.
pub fn operations(mode: Mode, arity: Arity) -> Option<&'static [OpKind]> {
    match arity {
        Arity::Idle => None,
        Arity::Single => Some(match mode {
            Mode::Standard => SINGLE_STANDARD,
            Mode::Trigonometric => SINGLE_TRIGONOMETRIC,
            Mode::Comparison => SINGLE_COMPARISON,
        }),
        Arity::Dual => Some(match mode {
            Mode::Standard => DUAL_STANDARD,
            Mode::Trigonometric => DUAL_TRIGONOMETRIC,
            Mode::Comparison => DUAL_COMPARISON,
        }),
    }
}
