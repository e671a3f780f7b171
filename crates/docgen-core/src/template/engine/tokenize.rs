//! Tokenization for template engine
//!
//! Provides O(n) placeholder discovery using a small state machine.

/// A single `${KEY}` token with position and metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    /// Key between `${` and `}`
    pub key: &'a str,
    /// Absolute byte position of `$` in template
    pub start: usize,
    /// Total length in bytes including `${` and `}`
    pub length: usize,
    /// Line number where token starts (1-based, for error messages)
    pub line: usize,
}

impl Token<'_> {
    /// Byte position just past the closing `}`
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Tokenization state machine (explicit for testability)
///
/// # State Transitions
///
/// ```text
/// Normal ──$──> SeenDollar ──{──> SeenLBrace ──[A-Za-z_]──> InKey ──}──> [Yield Token] → Normal
///   ^              │                  │                       │ [A-Za-z0-9_]: stay
///   │              │ (other)          │ (other)               │ (other)
///   └──────────────┴──────────────────┴───────────────────────┘
///
/// A `$` seen in any state restarts at SeenDollar.
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    /// Scanning regular text
    Normal,

    /// Seen `$` at `start`
    SeenDollar { start: usize },

    /// Seen `${`, expecting the first key byte
    SeenLBrace { start: usize },

    /// Inside the key, scanning until `}`
    InKey {
        /// Byte position of `$`
        start: usize,
        /// Line where `$` was seen
        line: usize,
    },
}

fn is_key_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_key_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Iterator over `${KEY}` tokens in a template string
///
/// Every byte is visited once; malformed tokens are not reported, they simply
/// never produce a `Token` and stay part of the surrounding text.
pub(crate) struct TokenStream<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    state: ScanState,
}

impl<'a> TokenStream<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            state: ScanState::Normal,
        }
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.input.as_bytes();

        while self.pos < bytes.len() {
            let i = self.pos;
            let b = bytes[i];
            self.pos += 1;

            if b == b'\n' {
                self.line += 1;
            }

            let state = self.state;
            self.state = match state {
                // `$` always (re)starts a candidate token
                _ if b == b'$' => ScanState::SeenDollar { start: i },
                ScanState::SeenDollar { start } if b == b'{' => ScanState::SeenLBrace { start },
                ScanState::SeenLBrace { start } if is_key_start(b) => ScanState::InKey {
                    start,
                    line: self.line,
                },
                ScanState::InKey { .. } if is_key_continue(b) => state,
                ScanState::InKey { start, line } if b == b'}' => {
                    self.state = ScanState::Normal;
                    return Some(Token {
                        key: &self.input[start + 2..i],
                        start,
                        length: i + 1 - start,
                        line,
                    });
                }
                _ => ScanState::Normal,
            };
        }

        None
    }
}
