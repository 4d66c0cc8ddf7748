//! JSON shorthand for array values.
//!
//! Hosts and fixtures write arrays as plain JSON (`4.0`, `[1, 2, 3]`,
//! `[[1, 2], [3, 4]]`, `[true, false]`), while the serde derives on
//! [`NdArray`] expect the canonical `{ "shape": ..., "elements": ... }`
//! object. [`parse_array`] accepts both.

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::value::{ArrayError, NdArray};

/// Errors produced while interpreting shorthand array JSON.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("array json parse error: {0}")]
    Parse(String),
    #[error("nested arrays are ragged at depth {0}")]
    Ragged(usize),
    #[error("array mixes boolean and numeric elements")]
    MixedElements,
    #[error("unsupported json element: {0}")]
    Unsupported(String),
    #[error(transparent)]
    Array(#[from] ArrayError),
}

enum Flat {
    Real(Vec<f32>),
    Bool(Vec<bool>),
}

impl Flat {
    fn push_real(&mut self, value: f32) -> Result<(), JsonError> {
        match self {
            Flat::Real(data) => {
                data.push(value);
                Ok(())
            }
            Flat::Bool(data) if data.is_empty() => {
                *self = Flat::Real(vec![value]);
                Ok(())
            }
            Flat::Bool(_) => Err(JsonError::MixedElements),
        }
    }

    fn push_bool(&mut self, value: bool) -> Result<(), JsonError> {
        match self {
            Flat::Bool(data) => {
                data.push(value);
                Ok(())
            }
            Flat::Real(data) if data.is_empty() => {
                *self = Flat::Bool(vec![value]);
                Ok(())
            }
            Flat::Real(_) => Err(JsonError::MixedElements),
        }
    }
}

/// Parse canonical or shorthand array JSON into an [`NdArray`].
pub fn parse_array(value: JsonValue) -> Result<NdArray, JsonError> {
    if let JsonValue::Object(obj) = &value {
        if obj.contains_key("shape") && obj.contains_key("elements") {
            return serde_json::from_value(value).map_err(|e| JsonError::Parse(e.to_string()));
        }
    }

    let mut shape = Vec::new();
    let mut flat = Flat::Real(Vec::new());
    collect(&value, 0, &mut shape, &mut flat)?;

    let arr = match flat {
        Flat::Real(data) => NdArray::real(shape, data)?,
        Flat::Bool(data) => NdArray::mask(shape, data)?,
    };
    Ok(arr)
}

fn collect(
    value: &JsonValue,
    depth: usize,
    shape: &mut Vec<usize>,
    flat: &mut Flat,
) -> Result<(), JsonError> {
    match value {
        JsonValue::Number(n) => {
            if depth != shape.len() {
                return Err(JsonError::Ragged(depth));
            }
            flat.push_real(n.as_f64().unwrap_or(f64::NAN) as f32)
        }
        JsonValue::Bool(b) => {
            if depth != shape.len() {
                return Err(JsonError::Ragged(depth));
            }
            flat.push_bool(*b)
        }
        JsonValue::Array(items) => {
            if depth == shape.len() {
                shape.push(items.len());
            } else if shape[depth] != items.len() {
                return Err(JsonError::Ragged(depth));
            }
            for item in items {
                collect(item, depth + 1, shape, flat)?;
            }
            Ok(())
        }
        other => Err(JsonError::Unsupported(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Elements;
    use serde_json::json;

    #[test]
    fn number_becomes_scalar() {
        let arr = parse_array(json!(4.0)).unwrap();
        assert!(arr.shape.is_empty());
        assert_eq!(arr.elements, Elements::Real(vec![4.0]));
    }

    #[test]
    fn flat_list_becomes_1d() {
        let arr = parse_array(json!([1, 2, 3])).unwrap();
        assert_eq!(arr.shape, vec![3]);
        assert_eq!(arr.elements, Elements::Real(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn nested_lists_become_2d() {
        let arr = parse_array(json!([[1, 2], [3, 4]])).unwrap();
        assert_eq!(arr.shape, vec![2, 2]);
        assert_eq!(arr.elements, Elements::Real(vec![1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn bool_lists_become_masks() {
        let arr = parse_array(json!([true, false])).unwrap();
        assert_eq!(arr.elements, Elements::Bool(vec![true, false]));
    }

    #[test]
    fn ragged_nesting_rejected() {
        assert!(matches!(
            parse_array(json!([[1, 2], [3]])),
            Err(JsonError::Ragged(_))
        ));
    }

    #[test]
    fn mixed_elements_rejected() {
        assert!(matches!(
            parse_array(json!([1, true])),
            Err(JsonError::MixedElements)
        ));
    }

    #[test]
    fn canonical_objects_pass_through() {
        let arr = NdArray::real(vec![2], vec![0.5, 1.5]).unwrap();
        let json = serde_json::to_value(&arr).unwrap();
        assert_eq!(parse_array(json).unwrap(), arr);
    }
}
