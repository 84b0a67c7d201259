//! sqlindent - A clause-level, tab-indented pretty printer for parsed SQL
//!
//! The crate takes a SELECT-shaped AST built by an external parser and renders
//! it as canonically indented SQL text. It does not parse SQL.
//!
//! [`restore`] renders a statement copied from a prepared-statement log with
//! the logged parameter values substituted for its `?` placeholders.
//!
//! ```
//! use sqlindent::ast::*;
//!
//! let select = PlainSelect {
//!     select_items: vec![
//!         SelectItem::Expression { expr: Expression::column("a"), alias: None },
//!         SelectItem::Expression { expr: Expression::column("b"), alias: None },
//!     ],
//!     from_item: Some(Table::new("t").into()),
//!     where_clause: Some(Expression::binary(
//!         Expression::column("a"),
//!         BinaryOperator::Eq,
//!         Expression::number(1),
//!     )),
//!     ..Default::default()
//! };
//!
//! let sql = sqlindent::render(&Statement::from(select), 0).unwrap();
//! assert_eq!(sql, "SELECT\n\ta,\n\tb\nFROM t\nWHERE a = 1");
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod formatter;
pub mod params;

pub use config::{IndentStyle, RenderConfig};
pub use error::{Error, Result};
pub use formatter::{render, render_query, restore, Renderer};
pub use params::{bind_parameters, bind_query_parameters, parse_parameter_line};
