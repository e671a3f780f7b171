//! Basic rendering tests for template engine

use super::helpers::{expressions, readme_expressions};
use super::*;

#[test]
fn test_render_simple_placeholder() {
    let values = readme_expressions();
    let result = interpolate("Hello, ${NAME}! Version: ${VER}", &values);
    assert_eq!(result, "Hello, World! Version: 1.0");
}

#[test]
fn test_render_changed_value() {
    let values = expressions(&[("NAME", "World"), ("VER", "1.1")]);
    let result = interpolate("Hello, ${NAME}! Version: ${VER}", &values);
    assert_eq!(result, "Hello, World! Version: 1.1");
}

#[test]
fn test_render_start_middle_end() {
    let values = expressions(&[("K", "v")]);
    let result = interpolate("${K} mid ${K} end ${K}", &values);
    assert_eq!(result, "v mid v end v");
}

#[test]
fn test_render_adjacent_placeholders() {
    let values = expressions(&[("A", "1"), ("B", "2")]);
    assert_eq!(interpolate("${A}${B}${A}", &values), "121");
}

#[test]
fn test_render_underscore_and_digits_in_key() {
    let values = readme_expressions();
    assert_eq!(
        interpolate("${PACKAGE_NAME} / ${unity_version}", &values),
        "com.example.scenes / 2021.3"
    );
    let values = expressions(&[("_x9", "ok")]);
    assert_eq!(interpolate("${_x9}", &values), "ok");
}

#[test]
fn test_render_keys_are_case_sensitive() {
    let values = expressions(&[("name", "lower")]);
    assert_eq!(interpolate("${name} ${NAME}", &values), "lower ${NAME}");
}

#[test]
fn test_render_value_is_not_reinterpolated() {
    let values = expressions(&[("A", "${B}"), ("B", "nope")]);
    assert_eq!(interpolate("[${A}]", &values), "[${B}]");
}

#[test]
fn test_render_multiline_preserves_layout() {
    let values = readme_expressions();
    let template = "# ${NAME}\n\n  indented ${VER}\r\n\ttab\n";
    assert_eq!(
        interpolate(template, &values),
        "# World\n\n  indented 1.0\r\n\ttab\n"
    );
}

#[test]
fn test_render_non_ascii_text() {
    let values = expressions(&[("ARROW", "→")]);
    assert_eq!(
        interpolate("日本語 ${ARROW} émoji 🎉 ${ARROW}", &values),
        "日本語 → émoji 🎉 →"
    );
}

#[test]
fn test_render_no_placeholders() {
    let values = readme_expressions();
    let template = "This is plain text with no placeholders.";
    assert_eq!(interpolate(template, &values), template);
}

#[test]
fn test_render_empty_template() {
    assert_eq!(interpolate("", &readme_expressions()), "");
}

#[test]
fn test_render_is_deterministic() {
    let values = readme_expressions();
    let template = "${NAME} ${MISSING} ${VER}\n${PACKAGE_NAME}";
    let first = interpolate(template, &values);
    let second = interpolate(template, &values);
    assert_eq!(first, second);
}

#[test]
fn test_engine_keep_matches_interpolate() {
    let values = readme_expressions();
    let template = "${NAME} ${MISSING}";
    let engine = TemplateEngine::new();
    assert_eq!(engine.policy(), MissingKeyPolicy::Keep);
    assert_eq!(
        engine.render(template, &values).unwrap(),
        interpolate(template, &values)
    );
}
