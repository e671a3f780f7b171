//! Append-only text assembly

use std::fmt;

/// Accumulates blocks, lines and line breaks into one string
///
/// Content is kept in append order and never rewritten.
///
/// ```
/// use docgen_core::TextBuilder;
///
/// let mut sb = TextBuilder::new();
/// sb.write_block("[//]: # (banner)");
/// sb.newline();
/// sb.write_line("# Title");
/// assert_eq!(sb.build(), "[//]: # (banner)\n# Title\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuilder {
    buffer: String,
}

impl TextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text as-is
    pub fn write_block(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Append text followed by a line break
    pub fn write_line(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Append a bare line break
    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Materialize the accumulated text
    pub fn build(self) -> String {
        self.buffer
    }
}

impl fmt::Write for TextBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl fmt::Display for TextBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
