//! Statement rendering / pretty-printing logic
//!
//! Every render call takes the indentation level explicitly and builds its
//! own [`Printer`]. Nested statements (FROM subqueries, CTE bodies, set
//! operation branches, subqueries inside expressions) are rendered into a
//! fresh buffer one level deeper and then appended to the parent's buffer.

mod expr;
mod from;
pub mod list;
pub mod printer;
pub mod rules;
mod statement;

use log::debug;

use crate::ast::{Query, Statement};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::params;
use printer::Printer;

/// Render a statement with tab indentation.
///
/// `None` renders the empty string.
pub fn render<'a>(statement: impl Into<Option<&'a Statement>>, level: usize) -> Result<String> {
    Renderer::default().render(statement, level)
}

/// Render a statement preceded by its WITH list, with tab indentation.
pub fn render_query(query: &Query, level: usize) -> Result<String> {
    Renderer::default().render_query(query, level)
}

/// Render a logged statement with its logged parameters bound, with tab
/// indentation. See [`Renderer::restore`].
pub fn restore(statement: &Statement, parameter_line: &str, level: usize) -> Result<String> {
    Renderer::default().restore(statement, parameter_line, level)
}

/// Renders AST nodes according to a [`RenderConfig`].
///
/// A renderer holds no per-call state, so one instance can be shared across
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The configuration this renderer was built with
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a top-level statement. The line break that opens the first
    /// clause is dropped.
    pub fn render<'a>(
        &self,
        statement: impl Into<Option<&'a Statement>>,
        level: usize,
    ) -> Result<String> {
        let Some(statement) = statement.into() else {
            debug!("no statement to render");
            return Ok(String::new());
        };
        debug!("rendering {} at level {}", statement.kind(), level);
        let output = self.statement(statement, level)?;
        Ok(self.top_level(output, level))
    }

    /// Render a top-level query with its WITH list.
    pub fn render_query(&self, query: &Query, level: usize) -> Result<String> {
        debug!(
            "rendering query with {} with item(s) at level {}",
            query.with_items.len(),
            level
        );
        let output = self.query(query, level)?;
        Ok(self.top_level(output, level))
    }

    /// Drop the opening line break. Output that opens with a bracket instead
    /// gets the indentation of its closing bracket, one level up.
    /// Render a statement taken from a prepared-statement log with the values
    /// of its parameter line bound to its `?` placeholders.
    ///
    /// A line with no typed parameters restores nothing and yields the empty
    /// string.
    pub fn restore(
        &self,
        statement: &Statement,
        parameter_line: &str,
        level: usize,
    ) -> Result<String> {
        let values = params::parse_parameter_line(parameter_line)?;
        if values.is_empty() {
            debug!("no parameters to restore");
            return Ok(String::new());
        }
        let bound = params::bind_parameters(statement, &values)?;
        self.render(&bound, level)
    }

    fn top_level(&self, output: String, level: usize) -> String {
        if output.starts_with('(') {
            let mut aligned = String::new();
            self.config
                .indent
                .write_indent(&mut aligned, level.saturating_sub(1));
            aligned.push_str(&output);
            return aligned;
        }
        strip_leading_break(output)
    }

    fn printer(&self, level: usize) -> Printer {
        Printer::new(level, self.config.indent)
    }
}

fn strip_leading_break(mut output: String) -> String {
    if output.starts_with('\n') {
        output.remove(0);
    }
    output
}
