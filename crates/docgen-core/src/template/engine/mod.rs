//! Template engine implementation

mod tokenize;

use crate::template::error::TemplateError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use tokenize::TokenStream;

/// Key → value table used for substitution
///
/// Keys are case-sensitive. Values are inserted literally.
pub type Expressions = BTreeMap<String, String>;

/// What to do with a placeholder whose key is not in the expressions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingKeyPolicy {
    /// Leave `${KEY}` in the output unchanged
    #[default]
    Keep,
    /// Fail with `TemplateError::UndefinedKeys`
    Error,
}

/// Template engine for rendering `${KEY}` templates
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateEngine {
    policy: MissingKeyPolicy,
}

impl TemplateEngine {
    /// Create a new template engine that keeps unknown placeholders
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a template engine with an explicit missing-key policy
    pub fn with_policy(policy: MissingKeyPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MissingKeyPolicy {
        self.policy
    }

    /// Render a template with the given expressions
    ///
    /// # Errors
    ///
    /// Only under `MissingKeyPolicy::Error`, when at least one placeholder
    /// key is absent. The error lists every missing key once.
    pub fn render(
        &self,
        template: &str,
        expressions: &Expressions,
    ) -> Result<String, TemplateError> {
        let mut missing: Vec<(String, usize)> = Vec::new();

        let output = substitute(template, expressions, |key, line| {
            if !missing.iter().any(|(k, _)| k == key) {
                missing.push((key.to_string(), line));
            }
        });

        match self.policy {
            MissingKeyPolicy::Error if !missing.is_empty() => {
                Err(TemplateError::UndefinedKeys { keys: missing })
            }
            _ => {
                for (key, line) in &missing {
                    log::debug!("Placeholder '${{{}}}' at line {} left unresolved", key, line);
                }
                Ok(output)
            }
        }
    }
}

/// Interpolate `${KEY}` placeholders, leaving unknown keys untouched
///
/// # Examples
///
/// ```
/// use docgen_core::template::{interpolate, Expressions};
///
/// let mut values = Expressions::new();
/// values.insert("NAME".to_string(), "World".to_string());
///
/// assert_eq!(interpolate("Hello, ${NAME}! ${LATER}", &values), "Hello, World! ${LATER}");
/// ```
pub fn interpolate(template: &str, expressions: &Expressions) -> String {
    substitute(template, expressions, |_, _| {})
}

/// Single left-to-right pass; `on_missing` sees each unresolved token
fn substitute<F>(template: &str, expressions: &Expressions, mut on_missing: F) -> String
where
    F: FnMut(&str, usize),
{
    let mut output = String::with_capacity(template.len());
    let mut copied = 0;

    for token in TokenStream::new(template) {
        output.push_str(&template[copied..token.start]);

        match expressions.get(token.key) {
            Some(value) => output.push_str(value),
            None => {
                on_missing(token.key, token.line);
                output.push_str(&template[token.start..token.end()]);
            }
        }

        copied = token.end();
    }

    output.push_str(&template[copied..]);
    output
}

#[cfg(test)]
mod tests;
