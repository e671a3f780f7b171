//! Global context for CLI commands

use anyhow::{Context as _, Result};
use chrono::Utc;
use docgen_core::{MissingKeyPolicy, Project, RenderOptions};
use std::env;
use std::path::{Path, PathBuf};

/// Loaded project for CLI commands
pub struct Context {
    pub project: Project,
}

impl Context {
    /// Load the project from `config`, or find docgen.toml upward from the
    /// current directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No docgen.toml is found
    /// - Config file cannot be read or parsed
    pub fn new(config: Option<PathBuf>) -> Result<Self> {
        let project = match config {
            Some(path) => Project::load(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => {
                let current_dir = env::current_dir()?;
                Project::discover(&current_dir)?
            }
        };

        log::debug!("Project root: {}", project.root.display());
        Ok(Self { project })
    }

    /// Render options from docgen.toml, stamped now; `strict` forces
    /// `MissingKeyPolicy::Error`
    pub fn render_options(&self, strict: bool) -> RenderOptions {
        let mut options = RenderOptions::from_config(&self.project.config.render, Utc::now());
        if strict {
            options.missing_keys = MissingKeyPolicy::Error;
        }
        options
    }

    /// Path shown to the user, relative to the project root when possible
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.project.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
