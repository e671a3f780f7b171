//! Loading the expression table
//!
//! The table is a flat JSON object (default) or TOML table (`.toml`
//! extension). Strings are used as-is; numbers and booleans are converted to
//! their canonical text. Anything else is rejected here so the template
//! engine only ever sees strings.

use crate::error::{DocgenError, Result};
use crate::template::Expressions;
use std::path::Path;

/// Load expressions from a `.json` or `.toml` file
pub fn load_values(path: impl AsRef<Path>) -> Result<Expressions> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| DocgenError::ValuesReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let values = if is_toml {
        parse_toml_values(&content, path)?
    } else {
        parse_json_values(&content, path)?
    };

    log::debug!("Loaded {} value(s) from '{}'", values.len(), path.display());
    Ok(values)
}

fn parse_error(path: &Path, reason: impl Into<String>) -> DocgenError {
    DocgenError::ValuesParseError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

fn invalid_value(key: &str, reason: &str) -> DocgenError {
    DocgenError::ValuesInvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a JSON object of scalar values; `path` is only used in errors
pub fn parse_json_values(content: &str, path: &Path) -> Result<Expressions> {
    use serde_json::Value;

    let document: Value =
        serde_json::from_str(content).map_err(|e| parse_error(path, e.to_string()))?;
    let Value::Object(object) = document else {
        return Err(parse_error(path, "top-level value must be an object"));
    };

    object
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => return Err(invalid_value(&key, "null is not supported")),
                Value::Array(_) => return Err(invalid_value(&key, "arrays are not supported")),
                Value::Object(_) => {
                    return Err(invalid_value(&key, "nested objects are not supported"))
                }
            };
            Ok((key, text))
        })
        .collect()
}

/// Parse a TOML table of scalar values; `path` is only used in errors
pub fn parse_toml_values(content: &str, path: &Path) -> Result<Expressions> {
    use toml::Value;

    let table: toml::Table =
        toml::from_str(content).map_err(|e| parse_error(path, e.to_string()))?;

    table
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Integer(i) => i.to_string(),
                Value::Float(f) => f.to_string(),
                Value::Boolean(b) => b.to_string(),
                Value::Datetime(dt) => dt.to_string(),
                Value::Array(_) => return Err(invalid_value(&key, "arrays are not supported")),
                Value::Table(_) => {
                    return Err(invalid_value(&key, "nested tables are not supported"))
                }
            };
            Ok((key, text))
        })
        .collect()
}
