//! Reconfigure pass: connectivity/mode resolution for the operator node.

use crate::catalog;
use crate::host::ChangeSet;
use crate::types::{Arity, Mode, OpArity, OpKind, ResolverState};

/// Widget updates the host must apply after a reconfigure pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelUpdate {
    /// Refreshed operation choices, or `None` when the catalog was left
    /// untouched (idle connectivity).
    pub operations: Option<&'static [OpKind]>,
    /// Selected index after clamping. Differs from the requested index only
    /// when the catalog shrank underneath it.
    pub selected: usize,
    /// Whether the scalar operand control should be shown.
    pub scalar_visible: bool,
}

/// Re-derive the operation catalog and widget layout after a connectivity or
/// mode change.
///
/// Pure configuration: this never fails. A selection stranded past the end of
/// a shrunken catalog is clamped back to index 0 rather than rejected.
pub fn reconfigure(
    state: &mut ResolverState,
    mode: Mode,
    left_connected: bool,
    right_connected: bool,
    selected: usize,
    events: &ChangeSet,
) -> PanelUpdate {
    if events.topology_changed() {
        state.mode = mode;
        state.arity = Arity::from_connected(left_connected, right_connected);
    }

    let refreshed = catalog::operations(state.mode, state.arity);
    if let Some(operations) = refreshed {
        state.operations = operations;
    }

    state.selected = if selected >= state.operations.len() {
        0
    } else {
        selected
    };

    // The scalar stands in for the missing second operand, so it is only
    // meaningful for a binary operation on a single connected input.
    let scalar_visible = state.arity == Arity::Single
        && state.operations[state.selected].arity() == OpArity::Binary;

    PanelUpdate {
        operations: refreshed,
        selected: state.selected,
        scalar_visible,
    }
}
