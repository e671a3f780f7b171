// Core modules
pub mod banner;
pub mod config;
pub mod diff;
pub mod error;
pub mod pipeline;
pub mod project;
pub mod template;
pub mod text;
pub mod values;
pub mod write;

// Re-export commonly used types
pub use diff::{differs, BannerFilter, LineFilter, NoFilter};
pub use error::{DocgenError, Result};
pub use pipeline::{render_document, RenderOptions};
pub use project::Project;
pub use template::{interpolate, Expressions, MissingKeyPolicy, Template, TemplateEngine};
pub use text::TextBuilder;
pub use write::{write_if_changed, WriteOutcome};
