//! Missing key policy tests

use super::helpers::readme_expressions;
use super::*;

#[test]
fn test_error_policy_lists_missing_keys_once() {
    let engine = TemplateEngine::with_policy(MissingKeyPolicy::Error);
    let template = "${NAME}\n${FIRST} ${SECOND}\n${FIRST}";
    let result = engine.render(template, &readme_expressions());

    match result {
        Err(TemplateError::UndefinedKeys { keys }) => {
            assert_eq!(
                keys,
                vec![("FIRST".to_string(), 2), ("SECOND".to_string(), 2)]
            );
        }
        other => panic!("Expected UndefinedKeys error, got {:?}", other),
    }
}

#[test]
fn test_error_policy_succeeds_when_all_keys_known() {
    let engine = TemplateEngine::with_policy(MissingKeyPolicy::Error);
    let result = engine
        .render("Hello, ${NAME}! Version: ${VER}", &readme_expressions())
        .unwrap();
    assert_eq!(result, "Hello, World! Version: 1.0");
}

#[test]
fn test_error_policy_ignores_malformed_tokens() {
    let engine = TemplateEngine::with_policy(MissingKeyPolicy::Error);
    let result = engine.render("${} ${1X} $", &readme_expressions()).unwrap();
    assert_eq!(result, "${} ${1X} $");
}

#[test]
fn test_error_message_names_keys() {
    let err = TemplateError::UndefinedKeys {
        keys: vec![("A".to_string(), 1), ("B".to_string(), 3)],
    };
    assert_eq!(err.to_string(), "Undefined key(s): 'A' (line 1), 'B' (line 3)");
}

#[test]
fn test_policy_deserializes_lowercase() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        policy: MissingKeyPolicy,
    }
    let keep: Wrapper = toml::from_str("policy = \"keep\"").unwrap();
    let error: Wrapper = toml::from_str("policy = \"error\"").unwrap();
    assert_eq!(keep.policy, MissingKeyPolicy::Keep);
    assert_eq!(error.policy, MissingKeyPolicy::Error);
}
