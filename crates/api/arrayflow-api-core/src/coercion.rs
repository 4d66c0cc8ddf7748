//! Coercion helpers between element kinds.
//! Minimal rules: bool -> 0/1 reals where a numeric operand is required,
//! first-element extraction for scalar contexts.

use crate::value::{Elements, NdArray};

/// View an array's elements as reals, converting booleans to 0.0 / 1.0.
pub fn to_real(arr: &NdArray) -> Vec<f32> {
    match &arr.elements {
        Elements::Real(data) => data.clone(),
        Elements::Bool(data) => data.iter().map(|b| if *b { 1.0 } else { 0.0 }).collect(),
    }
}

/// Collapse an array to a single real value: its first element, or 0.0 when
/// empty.
pub fn to_float(arr: &NdArray) -> f32 {
    match &arr.elements {
        Elements::Real(data) => data.first().copied().unwrap_or(0.0),
        Elements::Bool(data) => data.first().map(|b| if *b { 1.0 } else { 0.0 }).unwrap_or(0.0),
    }
}
