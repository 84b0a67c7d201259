//! Separated list rendering

use super::printer::Printer;
use crate::config::IndentStyle;
use crate::error::Result;

/// How a list is joined and wrapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStyle {
    /// Placed between items. In newline mode trailing whitespace is dropped,
    /// so `", "` becomes `","` before the line break.
    pub separator: &'static str,
    /// Wrap the whole list in parentheses
    pub brackets: bool,
    /// Put every item on its own line at the list's level
    pub newline: bool,
}

impl ListStyle {
    /// `a, b, c`
    pub const fn comma() -> Self {
        Self::separated(", ")
    }

    pub const fn separated(separator: &'static str) -> Self {
        Self {
            separator,
            brackets: false,
            newline: false,
        }
    }

    pub const fn brackets(mut self) -> Self {
        self.brackets = true;
        self
    }

    pub const fn newline(mut self) -> Self {
        self.newline = true;
        self
    }
}

impl Default for ListStyle {
    fn default() -> Self {
        Self::comma()
    }
}

/// Render `items` with `style`, calling `render_item` with each item and the
/// list's level.
///
/// An empty list still renders its brackets, so `()` for a wrapped list and
/// the empty string otherwise.
pub fn render_list<T, F>(
    items: &[T],
    style: ListStyle,
    level: usize,
    indent: IndentStyle,
    mut render_item: F,
) -> Result<String>
where
    F: FnMut(&T, usize) -> Result<String>,
{
    let mut printer = Printer::new(level, indent);
    if style.brackets {
        printer.append("(");
    }

    let separator = if style.newline {
        style.separator.trim_end()
    } else {
        style.separator
    };

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            printer.append(separator);
        }
        if style.newline {
            printer.tab();
        }
        let text = render_item(item, level)?;
        printer.append(&text);
    }

    if style.brackets {
        if style.newline && !items.is_empty() {
            printer.pre_tab();
        }
        printer.append(")");
    }
    Ok(printer.finish())
}
