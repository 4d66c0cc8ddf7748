use serde::Serialize;

use crate::catalog;
use crate::types::OpKind;

/// Widget flavors a host panel can build.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    /// Exclusive push-button row.
    Buttons,
    /// Exclusive radio list.
    Radio,
    /// Real-valued spin box.
    SpinBox,
    /// Latching toggle button.
    Toggle,
    /// Momentary push button.
    Push,
    /// Save-file browser.
    FileBrowser,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub optional: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WidgetSpec {
    pub id: &'static str,
    pub kind: WidgetKind,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_json: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeSignature {
    pub name: &'static str,
    pub category: &'static str,
    pub inputs: Vec<PortSpec>,
    pub outputs: Vec<PortSpec>,
    pub widgets: Vec<WidgetSpec>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Registry {
    pub version: &'static str,
    pub nodes: Vec<NodeSignature>,
}

fn op_labels(operations: &'static [OpKind]) -> Vec<&'static str> {
    operations.iter().map(|op| op.label()).collect()
}

/// Signatures for every node in this crate, for host panel construction.
pub fn registry() -> Registry {
    Registry {
        version: "0.1",
        nodes: vec![elementwise_signature(), raw_export_signature()],
    }
}

fn elementwise_signature() -> NodeSignature {
    NodeSignature {
        name: "Elementwise",
        category: "Math",
        inputs: vec![
            PortSpec {
                id: "in_left",
                label: "Left",
                optional: true,
            },
            PortSpec {
                id: "in_right",
                label: "Right",
                optional: true,
            },
        ],
        outputs: vec![PortSpec {
            id: "out",
            label: "Out",
            optional: false,
        }],
        widgets: vec![
            WidgetSpec {
                id: "mode",
                kind: WidgetKind::Buttons,
                label: "Mode",
                choices: Some(vec!["Standard", "Trigonometric", "Comparison"]),
                default_json: Some(serde_json::json!(0)),
            },
            WidgetSpec {
                id: "operation",
                kind: WidgetKind::Radio,
                label: "Operation",
                choices: Some(op_labels(catalog::ALL)),
                default_json: Some(serde_json::json!(0)),
            },
            WidgetSpec {
                id: "scalar",
                kind: WidgetKind::SpinBox,
                label: "Scalar",
                choices: None,
                default_json: Some(serde_json::json!(0.0)),
            },
            WidgetSpec {
                id: "compute",
                kind: WidgetKind::Toggle,
                label: "compute",
                choices: None,
                default_json: Some(serde_json::json!(true)),
            },
        ],
    }
}

fn raw_export_signature() -> NodeSignature {
    NodeSignature {
        name: "Raw Export",
        category: "File IO",
        inputs: vec![PortSpec {
            id: "in",
            label: "In",
            optional: false,
        }],
        outputs: vec![],
        widgets: vec![
            WidgetSpec {
                id: "file_browser",
                kind: WidgetKind::FileBrowser,
                label: "File Browser",
                choices: None,
                default_json: None,
            },
            WidgetSpec {
                id: "write_mode",
                kind: WidgetKind::Toggle,
                label: "Write Mode",
                choices: None,
                default_json: Some(serde_json::json!(false)),
            },
            WidgetSpec {
                id: "write_now",
                kind: WidgetKind::Push,
                label: "Write Now",
                choices: None,
                default_json: None,
            },
        ],
    }
}
