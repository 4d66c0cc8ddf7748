//! arrayflow-api-core: unified array value API (core, host-agnostic)

pub mod coercion;
pub mod json;
pub mod value;

pub use value::{ArrayError, ElemKind, Elements, NdArray};
