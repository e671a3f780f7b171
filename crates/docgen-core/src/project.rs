//! Project model - a docgen.toml and the directory it lives in

use crate::config::{Config, TemplatePair};
use crate::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Project {
    /// Directory containing docgen.toml; base for every relative path
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Load a project from an explicit config path
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let config = Config::from_file(config_path)?;
        let root = match config_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        log::debug!("Loaded project config '{}'", config_path.display());
        Ok(Self { root, config })
    }

    /// Find docgen.toml in `start` or a parent directory and load it
    pub fn discover(start: &Path) -> Result<Self> {
        Self::load(Config::find(start)?)
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    pub fn values_path(&self) -> PathBuf {
        self.resolve(&self.config.values.path)
    }

    /// Template → target pairs with paths resolved, in config order
    pub fn pairs(&self) -> impl Iterator<Item = TemplatePair> + '_ {
        self.config.templates.iter().map(|pair| TemplatePair {
            source: self.resolve(&pair.source),
            target: self.resolve(&pair.target),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE_NAME;
    use docgen_testkit::temp_dir_in_workspace;

    const CONFIG: &str = r#"
[values]
path = "templates/VALUES.t.json"

[[templates]]
source = "templates/README.t.md"
target = "README.md"
"#;

    #[test]
    fn test_paths_resolve_against_config_dir() {
        let temp = temp_dir_in_workspace();
        let root = temp.path().join("tools");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(root.join(CONFIG_FILE_NAME), CONFIG).unwrap();

        let project = Project::load(root.join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(project.root, root);
        assert_eq!(project.values_path(), root.join("templates/VALUES.t.json"));

        let pairs: Vec<TemplatePair> = project.pairs().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].source, root.join("templates/README.t.md"));
        assert_eq!(pairs[0].target, root.join("README.md"));
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = temp_dir_in_workspace();
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), CONFIG).unwrap();
        let sub = temp.path().join("templates");
        std::fs::create_dir(&sub).unwrap();

        let project = Project::discover(&sub).unwrap();
        assert_eq!(project.root, temp.path());
    }
}
