pub mod catalog;
pub mod eval;
pub mod host;
pub mod node;
pub mod resolver;
pub mod schema;
pub mod types;
pub mod writer;

pub use eval::{evaluate, EvalError, EvalOutcome};
pub use node::ElementwiseNode;
pub use resolver::{reconfigure, PanelUpdate};
pub use types::*;
pub use writer::{ExportError, RawExportNode};
