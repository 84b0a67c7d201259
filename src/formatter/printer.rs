//! Indentation-aware text accumulator
//!
//! A `Printer` is created for one render call with a fixed indentation level.
//! Nested constructs get their own printer at `next_level()` and their output
//! is appended to the parent's buffer.

use crate::config::IndentStyle;

/// Text buffer with a fixed indentation level
pub struct Printer {
    output: String,
    level: usize,
    indent: IndentStyle,
}

impl Printer {
    pub fn new(level: usize, indent: IndentStyle) -> Self {
        Self {
            output: String::new(),
            level,
            indent,
        }
    }

    /// Append raw text
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.output.push_str(text);
        self
    }

    /// Write a newline followed by the current indentation
    pub fn tab(&mut self) -> &mut Self {
        self.output.push('\n');
        self.indent.write_indent(&mut self.output, self.level);
        self
    }

    /// Write a newline followed by one level less than the current indentation.
    /// Used right before a closing bracket.
    pub fn pre_tab(&mut self) -> &mut Self {
        self.output.push('\n');
        self.indent
            .write_indent(&mut self.output, self.level.saturating_sub(1));
        self
    }

    /// Level every `tab()` indents to
    pub fn current_level(&self) -> usize {
        self.level
    }

    /// Level for a nested construct; the printer's own level is unchanged
    pub fn next_level(&self) -> usize {
        self.level + 1
    }

    /// Nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Get the output string
    pub fn finish(self) -> String {
        self.output
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(0, IndentStyle::default())
    }
}
