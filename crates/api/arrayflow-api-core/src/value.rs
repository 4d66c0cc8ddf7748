//! NdArray: dense arrays exchanged between node ports.
//! All real elements use f32, matching the host's wire format.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lightweight element-kind enum for dispatch and error reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElemKind {
    Real,
    Bool,
}

/// Errors raised while constructing an [`NdArray`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArrayError {
    #[error("{count} elements do not fill shape {shape:?}")]
    LengthMismatch { shape: Vec<usize>, count: usize },
}

/// Element storage. Real buffers are the common case; boolean buffers are
/// produced by the comparison operators.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Elements {
    Real(Vec<f32>),
    Bool(Vec<bool>),
}

impl Elements {
    pub fn len(&self) -> usize {
        match self {
            Elements::Real(data) => data.len(),
            Elements::Bool(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dense row-major array with an explicit shape.
///
/// The shape is carried for alignment checks and host display only; no axis
/// semantics are attached to it here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NdArray {
    pub shape: Vec<usize>,
    pub elements: Elements,
}

impl NdArray {
    /// Construct a real array, checking that `data` fills `shape`.
    pub fn real(shape: Vec<usize>, data: Vec<f32>) -> Result<Self, ArrayError> {
        if shape.iter().product::<usize>() != data.len() {
            return Err(ArrayError::LengthMismatch {
                shape,
                count: data.len(),
            });
        }
        Ok(NdArray {
            shape,
            elements: Elements::Real(data),
        })
    }

    /// Construct a boolean array, checking that `data` fills `shape`.
    pub fn mask(shape: Vec<usize>, data: Vec<bool>) -> Result<Self, ArrayError> {
        if shape.iter().product::<usize>() != data.len() {
            return Err(ArrayError::LengthMismatch {
                shape,
                count: data.len(),
            });
        }
        Ok(NdArray {
            shape,
            elements: Elements::Bool(data),
        })
    }

    /// A zero-dimensional array holding a single real value.
    pub fn scalar(value: f32) -> Self {
        NdArray {
            shape: Vec::new(),
            elements: Elements::Real(vec![value]),
        }
    }

    /// A one-dimensional real array.
    pub fn from_vec(data: Vec<f32>) -> Self {
        NdArray {
            shape: vec![data.len()],
            elements: Elements::Real(data),
        }
    }

    /// Return the coarse element kind of this array.
    #[inline]
    pub fn kind(&self) -> ElemKind {
        match self.elements {
            Elements::Real(_) => ElemKind::Real,
            Elements::Bool(_) => ElemKind::Bool,
        }
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// True for arrays that broadcast against any shape: a lone element,
    /// whatever the declared rank.
    pub fn is_scalar(&self) -> bool {
        self.len() == 1
    }

    /// Serialize the elements (not the shape) to little-endian raw bytes.
    ///
    /// Reals become 4-byte IEEE-754 words, booleans single 0/1 bytes. This is
    /// the headerless payload format of the raw export node.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        match &self.elements {
            Elements::Real(data) => {
                let mut bytes = Vec::with_capacity(data.len() * 4);
                for value in data {
                    bytes.extend_from_slice(&value.to_le_bytes());
                }
                bytes
            }
            Elements::Bool(data) => data.iter().map(|b| u8::from(*b)).collect(),
        }
    }
}
