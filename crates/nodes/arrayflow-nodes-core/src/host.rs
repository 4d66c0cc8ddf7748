//! Capability interfaces between nodes and their host.
//!
//! The host owns widgets and ports behind its own machinery; nodes see only
//! the narrow accessors below. [`memory`] provides a self-contained
//! implementation backing the test suite and host integration checks.

pub mod memory;

use arrayflow_api_core::NdArray;

use crate::types::{Mode, OpKind};

/// Which of the operator node's ports and widgets changed since the last
/// callback. Reported by the host's event system.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub left_port: bool,
    pub right_port: bool,
    pub mode: bool,
}

impl ChangeSet {
    /// True when mode and connectivity must be re-derived.
    pub fn topology_changed(&self) -> bool {
        self.left_port || self.right_port || self.mode
    }
}

/// Control-panel surface of the elementwise operator node.
pub trait OperatorPanel {
    fn mode(&self) -> Mode;
    fn selected_operation(&self) -> usize;
    fn scalar_operand(&self) -> f32;
    fn compute_enabled(&self) -> bool;

    /// Replace the operation choices offered to the user.
    fn set_operation_choices(&mut self, operations: &'static [OpKind]);
    fn set_selected_operation(&mut self, index: usize);
    fn set_scalar_visible(&mut self, visible: bool);
}

/// Array ports of the elementwise operator node.
pub trait OperandPorts {
    fn left(&self) -> Option<&NdArray>;
    fn right(&self) -> Option<&NdArray>;

    /// Publish a fresh output array downstream.
    fn publish(&mut self, out: NdArray);
}

/// Control-panel surface of the raw export node.
pub trait ExportPanel {
    /// Current browser selection; empty when nothing has been picked.
    fn target_path(&self) -> String;
    /// Write-mode toggle: when set the node writes on every event.
    fn write_every_event(&self) -> bool;
    /// Momentary write trigger.
    fn write_now(&self) -> bool;

    fn set_write_mode_caption(&mut self, caption: &'static str);
}

/// The raw export node's single, required input.
pub trait SourcePort {
    fn array(&self) -> &NdArray;
}
