//! Raw export node: dumps an array's elements to a headerless file.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::host::{ExportPanel, SourcePort};

const CAPTION_EVERY_EVENT: &str = "Write on Every Event";
const CAPTION_NEW_FILENAME: &str = "Write on New Filename";

/// Failures scoped to a single export invocation.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("raw export failed: {0}")]
    Io(#[from] io::Error),
}

/// Headerless `.raw` file writer for array data. Reals are written as
/// little-endian 4-byte words, booleans as single 0/1 bytes; the shape is not
/// recorded.
#[derive(Clone, Debug, Default)]
pub struct RawExportNode;

impl RawExportNode {
    pub fn new() -> Self {
        RawExportNode
    }

    /// Keep the write-mode button caption in sync with the toggle.
    pub fn validate(&self, panel: &mut impl ExportPanel) {
        if panel.write_every_event() {
            panel.set_write_mode_caption(CAPTION_EVERY_EVENT);
        } else {
            panel.set_write_mode_caption(CAPTION_NEW_FILENAME);
        }
    }

    /// Write the connected array when the every-event toggle is on, the
    /// write-now trigger fired, or the browser selection changed
    /// (`browser_changed` is the host's event flag for that widget).
    pub fn compute(
        &self,
        panel: &impl ExportPanel,
        port: &impl SourcePort,
        browser_changed: bool,
    ) -> Result<(), ExportError> {
        if !(panel.write_every_event() || panel.write_now() || browser_changed) {
            return Ok(());
        }

        let Some(path) = target_file(&panel.target_path()) else {
            // No filename chosen yet.
            return Ok(());
        };

        let data = port.array();
        fs::write(&path, data.to_le_bytes())?;
        log::debug!("wrote {} elements to {}", data.len(), path.display());
        Ok(())
    }
}

/// Normalize the browser selection to a `.raw` path; `None` when nothing has
/// been picked.
fn target_file(selection: &str) -> Option<PathBuf> {
    let mut name = selection.to_string();
    if !name.ends_with(".raw") {
        name.push_str(".raw");
    }
    if name == ".raw" {
        return None;
    }
    Some(PathBuf::from(name))
}
