//! Behavioural coverage for the operator node's compute path.

use arrayflow_api_core::{Elements, NdArray};

use crate::eval::{evaluate, EvalError, EvalOutcome};
use crate::host::memory::{MemoryPanel, MemoryPorts};
use crate::host::ChangeSet;
use crate::node::ElementwiseNode;
use crate::types::{Mode, OpKind};

fn published(outcome: EvalOutcome) -> NdArray {
    match outcome {
        EvalOutcome::Published(arr) => arr,
        EvalOutcome::Idle => panic!("expected a published array"),
    }
}

fn reals(arr: &NdArray) -> Vec<f32> {
    match &arr.elements {
        Elements::Real(data) => data.clone(),
        other => panic!("expected real elements, got {:?}", other),
    }
}

fn bools(arr: &NdArray) -> Vec<bool> {
    match &arr.elements {
        Elements::Bool(data) => data.clone(),
        other => panic!("expected boolean elements, got {:?}", other),
    }
}

// --- Operand order -------------------------------------------------------

#[test]
fn divide_is_left_to_right() {
    let left = NdArray::from_vec(vec![4.0]);
    let right = NdArray::from_vec(vec![2.0]);

    let out = evaluate(OpKind::Divide, Some(&left), Some(&right), 0.0, true).unwrap();
    assert_eq!(reals(&published(out)), vec![2.0]);

    let out = evaluate(OpKind::Divide, Some(&right), Some(&left), 0.0, true).unwrap();
    assert_eq!(reals(&published(out)), vec![0.5]);
}

#[test]
fn single_input_binary_takes_the_array_as_left_operand() {
    let arr = NdArray::from_vec(vec![10.0, 20.0]);

    let out = evaluate(OpKind::Subtract, Some(&arr), None, 3.0, true).unwrap();
    assert_eq!(reals(&published(out)), vec![7.0, 17.0]);

    // Same contract when only the right port is connected.
    let out = evaluate(OpKind::Subtract, None, Some(&arr), 3.0, true).unwrap();
    assert_eq!(reals(&published(out)), vec![7.0, 17.0]);
}

// --- Unary operations ----------------------------------------------------

#[test]
fn reciprocal_ignores_the_scalar() {
    let arr = NdArray::from_vec(vec![2.0, 4.0]);
    let out = evaluate(OpKind::Reciprocal, Some(&arr), None, 99.0, true).unwrap();
    assert_eq!(reals(&published(out)), vec![0.5, 0.25]);
}

#[test]
fn conjugate_is_identity_on_reals() {
    let arr = NdArray::from_vec(vec![-1.5, 3.0]);
    let out = evaluate(OpKind::Conjugate, Some(&arr), None, 0.0, true).unwrap();
    assert_eq!(reals(&published(out)), vec![-1.5, 3.0]);
}

#[test]
fn magnitude_is_abs_on_reals() {
    let arr = NdArray::from_vec(vec![-1.5, 3.0]);
    let out = evaluate(OpKind::Magnitude, Some(&arr), None, 0.0, true).unwrap();
    assert_eq!(reals(&published(out)), vec![1.5, 3.0]);
}

// --- Comparisons ---------------------------------------------------------

#[test]
fn comparison_emits_a_mask() {
    let left = NdArray::from_vec(vec![1.0, 5.0]);
    let right = NdArray::from_vec(vec![3.0, 3.0]);
    let out = evaluate(OpKind::Greater, Some(&left), Some(&right), 0.0, true).unwrap();
    assert_eq!(bools(&published(out)), vec![false, true]);
}

#[test]
fn comparison_against_the_scalar() {
    let arr = NdArray::from_vec(vec![1.0, 3.0, 5.0]);
    let out = evaluate(OpKind::GreaterEqual, Some(&arr), None, 3.0, true).unwrap();
    assert_eq!(bools(&published(out)), vec![false, true, true]);
}

#[test]
fn masks_coerce_back_to_unit_reals() {
    let mask = NdArray::mask(vec![2], vec![true, false]).unwrap();
    let out = evaluate(OpKind::Add, Some(&mask), None, 1.0, true).unwrap();
    assert_eq!(reals(&published(out)), vec![2.0, 1.0]);
}

// --- Broadcasting & failure ----------------------------------------------

#[test]
fn lone_elements_broadcast() {
    let left = NdArray::from_vec(vec![1.0, 2.0, 3.0]);
    let right = NdArray::scalar(10.0);
    let out = evaluate(OpKind::Multiply, Some(&left), Some(&right), 0.0, true).unwrap();
    let arr = published(out);
    assert_eq!(arr.shape, vec![3]);
    assert_eq!(reals(&arr), vec![10.0, 20.0, 30.0]);
}

#[test]
fn mismatched_shapes_fail_without_output() {
    let left = NdArray::from_vec(vec![1.0, 2.0]);
    let right = NdArray::from_vec(vec![1.0, 2.0, 3.0]);
    let err = evaluate(OpKind::Add, Some(&left), Some(&right), 0.0, true).unwrap_err();
    assert_eq!(
        err,
        EvalError::ShapeMismatch {
            lhs: vec![2],
            rhs: vec![3],
        }
    );
}

#[test]
fn forced_unary_on_two_inputs_fails() {
    let left = NdArray::from_vec(vec![1.0]);
    let right = NdArray::from_vec(vec![2.0]);
    let err = evaluate(OpKind::Sin, Some(&left), Some(&right), 0.0, true).unwrap_err();
    assert_eq!(
        err,
        EvalError::ArityMismatch {
            op: "Sin",
            operands: 2,
        }
    );
}

#[test]
fn zero_divisor_elements_become_nan() {
    let left = NdArray::from_vec(vec![4.0, 4.0]);
    let right = NdArray::from_vec(vec![2.0, 0.0]);
    let out = published(evaluate(OpKind::Divide, Some(&left), Some(&right), 0.0, true).unwrap());
    let data = reals(&out);
    assert_eq!(data[0], 2.0);
    assert!(data[1].is_nan());
}

// --- Idle paths ----------------------------------------------------------

#[test]
fn disabled_node_reports_idle() {
    let arr = NdArray::from_vec(vec![1.0]);
    let out = evaluate(OpKind::Add, Some(&arr), None, 1.0, false).unwrap();
    assert_eq!(out, EvalOutcome::Idle);
}

#[test]
fn no_inputs_reports_idle() {
    let out = evaluate(OpKind::Add, None, None, 1.0, true).unwrap();
    assert_eq!(out, EvalOutcome::Idle);
}

// --- Full node cycle ------------------------------------------------------

#[test]
fn validate_then_compute_publishes_a_mask() {
    let mut node = ElementwiseNode::new();
    let mut panel = MemoryPanel {
        mode: Mode::Comparison,
        selected: 2, // '>' once the dual comparison catalog is in place
        ..Default::default()
    };
    let mut ports = MemoryPorts {
        left: Some(NdArray::from_vec(vec![1.0, 5.0])),
        right: Some(NdArray::from_vec(vec![3.0, 3.0])),
        published: None,
    };
    let events = ChangeSet {
        left_port: true,
        right_port: true,
        mode: true,
    };

    node.validate(&mut panel, &ports, &events);
    assert_eq!(node.state().arity.count(), 2);
    assert_eq!(panel.choices[panel.selected], OpKind::Greater);
    assert!(!panel.scalar_visible);

    node.compute(&panel, &mut ports).unwrap();
    let out = ports.published.expect("output published");
    assert_eq!(bools(&out), vec![false, true]);
}

#[test]
fn disabled_node_leaves_the_output_port_untouched() {
    let mut node = ElementwiseNode::new();
    let mut panel = MemoryPanel {
        enabled: false,
        ..Default::default()
    };
    let mut ports = MemoryPorts {
        left: Some(NdArray::from_vec(vec![1.0, 2.0])),
        right: Some(NdArray::from_vec(vec![3.0, 4.0])),
        published: None,
    };
    let events = ChangeSet {
        left_port: true,
        right_port: true,
        mode: false,
    };

    node.validate(&mut panel, &ports, &events);
    node.compute(&panel, &mut ports).unwrap();
    assert!(ports.published.is_none());
}

#[test]
fn validate_resets_a_stranded_widget_selection() {
    let mut node = ElementwiseNode::new();
    let mut panel = MemoryPanel {
        mode: Mode::Comparison,
        selected: 7,
        ..Default::default()
    };
    let ports = MemoryPorts {
        left: Some(NdArray::from_vec(vec![1.0])),
        right: Some(NdArray::from_vec(vec![2.0])),
        published: None,
    };
    let events = ChangeSet {
        left_port: true,
        right_port: true,
        mode: true,
    };
    node.validate(&mut panel, &ports, &events);
    assert_eq!(panel.selected, 7);

    // Trigonometric dual mode has a single entry; the selection snaps back.
    panel.mode = Mode::Trigonometric;
    let events = ChangeSet {
        mode: true,
        ..Default::default()
    };
    node.validate(&mut panel, &ports, &events);
    assert_eq!(panel.selected, 0);
    assert_eq!(panel.choices, &[OpKind::ArcTan2]);
}
