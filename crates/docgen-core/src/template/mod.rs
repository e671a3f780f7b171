//! Template module - `${KEY}` placeholder interpolation
//!
//! This module provides the substitution engine used to render generated
//! documents (e.g. `README.t.md` → `README.md`) from a flat table of string
//! values.
//!
//! ## Philosophy
//!
//! - **Pure text substitution**: no conditionals, loops or expressions
//! - **Literal values**: substituted values are never re-interpolated
//! - **Total by default**: unknown keys are left in the output verbatim
//!   (`MissingKeyPolicy::Keep`); `MissingKeyPolicy::Error` reports them instead
//!
//! ## Syntax
//!
//! - Placeholder: `${KEY}` where `KEY` matches `[A-Za-z_][A-Za-z0-9_]*`
//! - Keys are case-sensitive
//! - Anything else (`$`, `${}`, `${1ST}`, `${A-B}`, `${ KEY }`, an unterminated
//!   `${KEY`) is plain text and passes through unchanged

pub mod engine;
pub mod error;
mod source;

pub use engine::{interpolate, Expressions, MissingKeyPolicy, TemplateEngine};
pub use error::TemplateError;
pub use source::Template;
