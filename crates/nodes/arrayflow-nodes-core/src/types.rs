use serde::{Deserialize, Serialize};

use crate::catalog;

/// High-level operation category selected by the node's mode buttons.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Standard,
    Trigonometric,
    Comparison,
}

/// Number of connected array inputs. Distinct from an operation's own arity:
/// a binary operation at `Single` connectivity takes the scalar operand as
/// its right-hand side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Idle,
    Single,
    Dual,
}

impl Arity {
    /// Derive connectivity from the two optional input ports.
    pub fn from_connected(left: bool, right: bool) -> Self {
        match (left, right) {
            (false, false) => Arity::Idle,
            (true, true) => Arity::Dual,
            _ => Arity::Single,
        }
    }

    /// Connected-input count, 0 through 2.
    pub fn count(self) -> usize {
        match self {
            Arity::Idle => 0,
            Arity::Single => 1,
            Arity::Dual => 2,
        }
    }
}

/// Whether an operation consumes one operand or two.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpArity {
    Unary,
    Binary,
}

/// Operation identifier. Variants are ordered as the full widget list the
/// node starts out with; catalogs for each mode/connectivity pair are subsets
/// of this order.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
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
}

impl OpKind {
    /// Operand count this operation requires.
    pub fn arity(self) -> OpArity {
        use OpKind::*;
        match self {
            Add | Subtract | Multiply | Divide | Power | ArcTan2 | Max | Min | Greater | Less
            | Equal | NotEqual | GreaterEqual | LessEqual => OpArity::Binary,
            Exponential | LogN | Log10 | Reciprocal | Conjugate | Magnitude | Sin | Cos | Tan
            | ArcSin | ArcCos | ArcTan => OpArity::Unary,
        }
    }

    /// Label shown in the operation widget.
    pub fn label(self) -> &'static str {
        use OpKind::*;
        match self {
            Add => "Add",
            Subtract => "Subtract",
            Multiply => "Multiply",
            Divide => "Divide",
            Power => "Power",
            Exponential => "Exponential",
            LogN => "LogN",
            Log10 => "Log10",
            Reciprocal => "Reciprocal",
            Conjugate => "Conjugate",
            Magnitude => "Magnitude",
            Sin => "Sin",
            Cos => "Cos",
            Tan => "Tan",
            ArcSin => "arcSin",
            ArcCos => "arcCos",
            ArcTan => "arcTan",
            ArcTan2 => "arcTan2",
            Max => "Max",
            Min => "Min",
            Greater => ">",
            Less => "<",
            Equal => "==",
            NotEqual => "!=",
            GreaterEqual => ">=",
            LessEqual => "<=",
        }
    }
}

/// Node state carried between the host's validate and compute callbacks.
///
/// `operations` is the catalog currently exposed through the operation
/// widget; `selected` indexes into it and is re-clamped whenever the catalog
/// changes. `mode` and `arity` persist until the host reports a relevant
/// change event.
#[derive(Clone, Debug)]
pub struct ResolverState {
    pub mode: Mode,
    pub arity: Arity,
    pub operations: &'static [OpKind],
    pub selected: usize,
}

impl Default for ResolverState {
    fn default() -> Self {
        ResolverState {
            mode: Mode::Standard,
            arity: Arity::Idle,
            operations: catalog::ALL,
            selected: 0,
        }
    }
}
