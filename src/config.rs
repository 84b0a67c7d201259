//! Render configuration

/// Indentation unit written after every line break.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStyle {
    /// One tab per level
    #[default]
    Tabs,
    /// The given number of spaces per level
    Spaces(usize),
}

impl IndentStyle {
    /// Append `level` indentation units to `out`.
    pub fn write_indent(self, out: &mut String, level: usize) {
        match self {
            IndentStyle::Tabs => {
                for _ in 0..level {
                    out.push('\t');
                }
            }
            IndentStyle::Spaces(width) => {
                out.extend(std::iter::repeat(' ').take(width * level));
            }
        }
    }
}

/// Configuration for statement rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub indent: IndentStyle,
}

impl RenderConfig {
    /// Tab-indented output.
    pub fn tabs() -> Self {
        Self::default()
    }

    /// Space-indented output with `width` spaces per level.
    pub fn spaces(width: usize) -> Self {
        Self {
            indent: IndentStyle::Spaces(width),
        }
    }

    /// Replace the indentation style.
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }
}
