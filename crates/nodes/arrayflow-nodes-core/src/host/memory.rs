//! In-memory host used by the test suite and by integrators smoke-testing
//! node wiring without a full host.

use arrayflow_api_core::NdArray;

use super::{ExportPanel, OperandPorts, OperatorPanel, SourcePort};
use crate::catalog;
use crate::types::{Mode, OpKind};

/// Widget state for the operator node.
#[derive(Clone, Debug)]
pub struct MemoryPanel {
    pub mode: Mode,
    pub selected: usize,
    pub scalar: f32,
    pub enabled: bool,
    pub choices: &'static [OpKind],
    pub scalar_visible: bool,
}

impl Default for MemoryPanel {
    fn default() -> Self {
        MemoryPanel {
            mode: Mode::Standard,
            selected: 0,
            scalar: 0.0,
            enabled: true,
            choices: catalog::ALL,
            scalar_visible: false,
        }
    }
}

impl OperatorPanel for MemoryPanel {
    fn mode(&self) -> Mode {
        self.mode
    }

    fn selected_operation(&self) -> usize {
        self.selected
    }

    fn scalar_operand(&self) -> f32 {
        self.scalar
    }

    fn compute_enabled(&self) -> bool {
        self.enabled
    }

    fn set_operation_choices(&mut self, operations: &'static [OpKind]) {
        self.choices = operations;
    }

    fn set_selected_operation(&mut self, index: usize) {
        self.selected = index;
    }

    fn set_scalar_visible(&mut self, visible: bool) {
        self.scalar_visible = visible;
    }
}

/// Port state for the operator node.
#[derive(Clone, Debug, Default)]
pub struct MemoryPorts {
    pub left: Option<NdArray>,
    pub right: Option<NdArray>,
    pub published: Option<NdArray>,
}

impl OperandPorts for MemoryPorts {
    fn left(&self) -> Option<&NdArray> {
        self.left.as_ref()
    }

    fn right(&self) -> Option<&NdArray> {
        self.right.as_ref()
    }

    fn publish(&mut self, out: NdArray) {
        self.published = Some(out);
    }
}

/// Widget state for the raw export node.
#[derive(Clone, Debug, Default)]
pub struct MemoryExportPanel {
    pub target: String,
    pub every_event: bool,
    pub write_now: bool,
    pub caption: &'static str,
}

impl ExportPanel for MemoryExportPanel {
    fn target_path(&self) -> String {
        self.target.clone()
    }

    fn write_every_event(&self) -> bool {
        self.every_event
    }

    fn write_now(&self) -> bool {
        self.write_now
    }

    fn set_write_mode_caption(&mut self, caption: &'static str) {
        self.caption = caption;
    }
}

/// A connected upstream array for the raw export node.
#[derive(Clone, Debug)]
pub struct MemorySource(pub NdArray);

impl SourcePort for MemorySource {
    fn array(&self) -> &NdArray {
        &self.0
    }
}
