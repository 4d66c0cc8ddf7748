//! The elementwise operator node: host callbacks in host order.

use crate::eval::{evaluate, EvalError, EvalOutcome};
use crate::host::{ChangeSet, OperandPorts, OperatorPanel};
use crate::resolver::reconfigure;
use crate::types::ResolverState;

/// Elementwise math/trig/comparison operator over one or two array inputs.
///
/// The host calls [`validate`](Self::validate) whenever connectivity or a
/// widget changed, then [`compute`](Self::compute) on every execution tick.
/// Operations that do not commute apply left to right: with both ports
/// connected the output of `Divide` is left / right.
#[derive(Clone, Debug, Default)]
pub struct ElementwiseNode {
    state: ResolverState,
}

impl ElementwiseNode {
    pub fn new() -> Self {
        ElementwiseNode::default()
    }

    /// Current resolver state, mainly for host inspection.
    pub fn state(&self) -> &ResolverState {
        &self.state
    }

    /// Reconfigure the panel after connectivity or widget changes.
    ///
    /// Pure configuration: always succeeds, pushing the refreshed operation
    /// choices, a clamped selection if the catalog shrank, and the scalar
    /// control's visibility through the panel capability.
    pub fn validate(
        &mut self,
        panel: &mut impl OperatorPanel,
        ports: &impl OperandPorts,
        events: &ChangeSet,
    ) {
        let selected = panel.selected_operation();
        let update = reconfigure(
            &mut self.state,
            panel.mode(),
            ports.left().is_some(),
            ports.right().is_some(),
            selected,
            events,
        );

        if let Some(operations) = update.operations {
            panel.set_operation_choices(operations);
        }
        if update.selected != selected {
            panel.set_selected_operation(update.selected);
        }
        panel.set_scalar_visible(update.scalar_visible);
    }

    /// Apply the selected operation and publish the result.
    ///
    /// On failure the error is returned to the host and the output port is
    /// left untouched.
    pub fn compute(
        &self,
        panel: &impl OperatorPanel,
        ports: &mut impl OperandPorts,
    ) -> Result<(), EvalError> {
        let op = self.state.operations[self.state.selected];
        match evaluate(
            op,
            ports.left(),
            ports.right(),
            panel.scalar_operand(),
            panel.compute_enabled(),
        )? {
            EvalOutcome::Published(out) => ports.publish(out),
            EvalOutcome::Idle => {}
        }
        Ok(())
    }
}
