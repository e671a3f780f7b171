//! Fixture projects for testing
//!
//! Lays out the minimal docgen project:
//!
//! ```text
//! <root>/
//! ├── docgen.toml
//! ├── README.md              (target, not created)
//! └── templates/
//!     ├── README.t.md
//!     └── VALUES.t.json
//! ```

use std::path::Path;

/// docgen.toml used by [`write_project`]
pub const SAMPLE_CONFIG: &str = r#"[values]
path = "templates/VALUES.t.json"

[[templates]]
source = "templates/README.t.md"
target = "README.md"
"#;

/// Write a fixture project into `root`
///
/// # Panics
///
/// Panics if any fixture file cannot be written.
pub fn write_project(root: &Path, template: &str, values_json: &str) {
    let templates = root.join("templates");
    std::fs::create_dir_all(&templates).expect("Failed to create templates/");

    std::fs::write(root.join("docgen.toml"), SAMPLE_CONFIG).expect("Failed to write docgen.toml");
    std::fs::write(templates.join("README.t.md"), template).expect("Failed to write template");
    std::fs::write(templates.join("VALUES.t.json"), values_json)
        .expect("Failed to write values");
}
