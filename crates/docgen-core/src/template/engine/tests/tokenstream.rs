//! Unit tests for TokenStream

use super::tokenize::{ScanState, Token, TokenStream};

#[test]
fn test_scan_state_construction() {
    assert_eq!(ScanState::Normal, ScanState::Normal);
    assert_ne!(
        ScanState::SeenDollar { start: 0 },
        ScanState::SeenLBrace { start: 0 }
    );
}

#[test]
fn test_tokenize_positions() {
    let tokens: Vec<Token> = TokenStream::new("ab ${KEY} c").collect();
    assert_eq!(
        tokens,
        vec![Token {
            key: "KEY",
            start: 3,
            length: 6,
            line: 1,
        }]
    );
    assert_eq!(tokens[0].end(), 9);
}

#[test]
fn test_tokenize_tracks_lines() {
    let tokens: Vec<Token> = TokenStream::new("${A}\n\n x ${B}\n${C}").collect();
    let lines: Vec<(&str, usize)> = tokens.iter().map(|t| (t.key, t.line)).collect();
    assert_eq!(lines, vec![("A", 1), ("B", 3), ("C", 4)]);
}

#[test]
fn test_tokenize_skips_malformed() {
    let keys: Vec<&str> = TokenStream::new("${} ${9} ${a b} ${ok} ${_}")
        .map(|t| t.key)
        .collect();
    assert_eq!(keys, vec!["ok", "_"]);
}

#[test]
fn test_tokenize_multibyte_text_around_tokens() {
    let template = "é${K}ü";
    let tokens: Vec<Token> = TokenStream::new(template).collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(&template[tokens[0].start..tokens[0].end()], "${K}");
}

#[test]
fn test_tokenize_large_input_is_linear() {
    let template = "${X} text ".repeat(50_000);
    let count = TokenStream::new(&template).count();
    assert_eq!(count, 50_000);
}
