use crate::error::{DocgenError, Result};
use std::path::Path;

/// A template body together with its logical name
///
/// The name (usually the file name, e.g. `README.t.md`) only selects
/// auxiliary behavior such as the Markdown banner. It never changes how
/// placeholders are substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    text: String,
}

impl Template {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read a template file; its file name becomes the logical name
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| DocgenError::TemplateReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        log::debug!("Read template '{}' ({} bytes)", path.display(), text.len());
        Ok(Self { name, text })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
