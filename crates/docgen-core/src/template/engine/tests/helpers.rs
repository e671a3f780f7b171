//! Shared test helpers for template engine tests

use crate::template::engine::Expressions;

/// Build expressions from `(key, value)` pairs
pub(super) fn expressions(pairs: &[(&str, &str)]) -> Expressions {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Values resembling a project README table
pub(super) fn readme_expressions() -> Expressions {
    expressions(&[
        ("NAME", "World"),
        ("VER", "1.0"),
        ("PACKAGE_NAME", "com.example.scenes"),
        ("unity_version", "2021.3"),
    ])
}
