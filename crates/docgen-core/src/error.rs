use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocgenError {
    // Config errors
    #[error("CONFIG_NOT_FOUND: docgen.toml not found in '{}' or parent directories", start.display())]
    ConfigNotFound { start: PathBuf },

    #[error("CONFIG_PARSE_ERROR: failed to read '{}': {reason}", path.display())]
    ConfigParseError { path: PathBuf, reason: String },

    #[error("CONFIG_INVALID: failed to parse docgen.toml: {0}")]
    ConfigInvalid(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Values errors
    #[error("VALUES_READ_ERROR: failed to read '{}': {reason}", path.display())]
    ValuesReadError { path: PathBuf, reason: String },

    #[error("VALUES_PARSE_ERROR: '{}': {reason}", path.display())]
    ValuesParseError { path: PathBuf, reason: String },

    #[error("VALUES_INVALID_VALUE: key '{key}': {reason}")]
    ValuesInvalidValue { key: String, reason: String },

    // Template errors
    #[error("TEMPLATE_READ_ERROR: failed to read '{}': {reason}", path.display())]
    TemplateReadError { path: PathBuf, reason: String },

    #[error("TEMPLATE_ERROR: {0}")]
    Template(#[from] crate::template::error::TemplateError),

    // Target errors
    #[error("TARGET_READ_ERROR: failed to read '{}': {reason}", path.display())]
    TargetReadError { path: PathBuf, reason: String },

    #[error("WRITE_FAILED: '{}': {reason}", path.display())]
    WriteFailed { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, DocgenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::error::TemplateError;

    #[test]
    fn test_error_messages_carry_code_prefix() {
        let err = DocgenError::ConfigInvalidValue {
            field: "templates".to_string(),
            reason: "at least one entry is required".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "CONFIG_INVALID_VALUE: templates: at least one entry is required"
        );

        let err = DocgenError::WriteFailed {
            path: PathBuf::from("out/README.md"),
            reason: "permission denied".to_string(),
        };
        assert!(err.to_string().starts_with("WRITE_FAILED: 'out/README.md'"));
    }

    #[test]
    fn test_template_error_converts() {
        let err: DocgenError = TemplateError::UndefinedKeys {
            keys: vec![("NAME".to_string(), 1)],
        }
        .into();
        assert!(err.to_string().starts_with("TEMPLATE_ERROR: "));
        assert!(err.to_string().contains("NAME"));
    }
}
