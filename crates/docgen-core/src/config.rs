use crate::diff::{BannerFilter, AUTOGEN_MARKER, DEFAULT_BANNER_LINES};
use crate::error::{DocgenError, Result};
use crate::template::MissingKeyPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name searched for by [`Config::find`]
pub const CONFIG_FILE_NAME: &str = "docgen.toml";

/// docgen.toml schema
///
/// Relative paths are resolved against the directory holding the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub values: ValuesConfig,
    pub templates: Vec<TemplatePair>,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuesConfig {
    /// `.json` or `.toml` document of string values
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplatePair {
    pub source: PathBuf,
    pub target: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_banner_lines")]
    pub banner_lines: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            banner_lines: default_banner_lines(),
        }
    }
}

fn default_marker() -> String {
    AUTOGEN_MARKER.to_string()
}

fn default_banner_lines() -> usize {
    DEFAULT_BANNER_LINES
}

impl FilterConfig {
    pub fn to_filter(&self) -> BannerFilter {
        BannerFilter::new(self.marker.clone(), self.banner_lines)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub missing_keys: MissingKeyPolicy,
    #[serde(default = "default_banner")]
    pub banner: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            missing_keys: MissingKeyPolicy::default(),
            banner: default_banner(),
        }
    }
}

fn default_banner() -> bool {
    true
}

impl Config {
    /// Read and validate a docgen.toml file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| DocgenError::ConfigParseError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Self::parse(&content)
    }

    /// Parse and validate TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| DocgenError::ConfigInvalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.templates.is_empty() {
            return Err(DocgenError::ConfigInvalidValue {
                field: "templates".to_string(),
                reason: "at least one [[templates]] entry is required".to_string(),
            });
        }
        if self.filter.marker.is_empty() {
            return Err(DocgenError::ConfigInvalidValue {
                field: "filter.marker".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.render.banner {
            // Generated banners must stay invisible to the line filter
            if !AUTOGEN_MARKER.starts_with(&self.filter.marker) {
                return Err(DocgenError::ConfigInvalidValue {
                    field: "filter.marker".to_string(),
                    reason: format!(
                        "must be a prefix of the generated banner '{}' while [render] banner = true",
                        AUTOGEN_MARKER
                    ),
                });
            }
            if self.filter.banner_lines == 0 {
                return Err(DocgenError::ConfigInvalidValue {
                    field: "filter.banner_lines".to_string(),
                    reason: "must be at least 1 while [render] banner = true".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Walk up from `start` to the first directory containing docgen.toml
    pub fn find(start: &Path) -> Result<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| DocgenError::ConfigNotFound {
                start: start.to_path_buf(),
            })
    }
}
