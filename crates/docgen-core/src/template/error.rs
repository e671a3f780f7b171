//! Template error types

use std::fmt;

/// Template rendering errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Placeholders whose key is absent from the expressions
    /// (only raised under `MissingKeyPolicy::Error`)
    UndefinedKeys {
        /// Each missing key once, in order of first appearance, with the
        /// 1-based line of that first appearance
        keys: Vec<(String, usize)>,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedKeys { keys } => {
                let listed = keys
                    .iter()
                    .map(|(key, line)| format!("'{}' (line {})", key, line))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Undefined key(s): {}", listed)
            }
        }
    }
}

impl std::error::Error for TemplateError {}
