//! Expression rendering
//!
//! Expressions render inline. The only construct that breaks lines is a
//! subquery, which renders its body one level deeper than the expression and
//! closes its bracket at the expression's level.

use super::list::{render_list, ListStyle};
use super::Renderer;
use crate::ast::{Expression, Function, WhenClause};
use crate::error::Result;

impl Renderer {
    /// Render `expr` as it appears in a clause at `level`.
    pub fn expression(&self, expr: &Expression, level: usize) -> Result<String> {
        Ok(match expr {
            Expression::Column(name) => name.to_string(),
            Expression::Value(value) => value.to_string(),
            Expression::Parameter(param) => param.clone(),
            Expression::BinaryOp { left, op, right } => format!(
                "{} {} {}",
                self.expression(left, level)?,
                op,
                self.expression(right, level)?
            ),
            Expression::UnaryOp { op, expr } => {
                format!("{}{}", op, self.expression(expr, level)?)
            }
            Expression::Function(function) => self.function(function, level)?,
            Expression::Nested(inner) => format!("({})", self.expression(inner, level)?),
            Expression::Row(items) => {
                self.expression_list(items, ListStyle::comma().brackets(), level)?
            }
            Expression::InList {
                expr,
                list,
                negated,
            } => format!(
                "{} {}IN {}",
                self.expression(expr, level)?,
                not(*negated),
                self.expression_list(list, ListStyle::comma().brackets(), level)?
            ),
            Expression::InSubquery {
                expr,
                subquery,
                negated,
            } => format!(
                "{} {}IN {}",
                self.expression(expr, level)?,
                not(*negated),
                self.bracketed_statement(subquery, level + 1)?
            ),
            Expression::Exists { subquery, negated } => format!(
                "{}EXISTS {}",
                not(*negated),
                self.bracketed_statement(subquery, level + 1)?
            ),
            Expression::Subquery(subquery) => self.bracketed_statement(subquery, level + 1)?,
            Expression::Between {
                expr,
                low,
                high,
                negated,
            } => format!(
                "{} {}BETWEEN {} AND {}",
                self.expression(expr, level)?,
                not(*negated),
                self.expression(low, level)?,
                self.expression(high, level)?
            ),
            Expression::IsNull { expr, negated } => format!(
                "{} IS {}NULL",
                self.expression(expr, level)?,
                not(*negated)
            ),
            Expression::Case {
                operand,
                when_clauses,
                else_result,
            } => self.case(operand.as_deref(), when_clauses, else_result.as_deref(), level)?,
            Expression::Cast { expr, data_type } => {
                format!("CAST({} AS {})", self.expression(expr, level)?, data_type)
            }
        })
    }

    pub(super) fn expression_list(
        &self,
        items: &[Expression],
        style: ListStyle,
        level: usize,
    ) -> Result<String> {
        render_list(items, style, level, self.config.indent, |item, lvl| {
            self.expression(item, lvl)
        })
    }

    pub(super) fn function(&self, function: &Function, level: usize) -> Result<String> {
        let args = if function.star {
            "*".to_string()
        } else {
            self.expression_list(&function.args, ListStyle::comma(), level)?
        };
        let distinct = if function.distinct { "DISTINCT " } else { "" };
        Ok(format!("{}({}{})", function.name, distinct, args))
    }

    fn case(
        &self,
        operand: Option<&Expression>,
        when_clauses: &[WhenClause],
        else_result: Option<&Expression>,
        level: usize,
    ) -> Result<String> {
        let mut text = String::from("CASE");
        if let Some(operand) = operand {
            text.push(' ');
            text.push_str(&self.expression(operand, level)?);
        }
        for clause in when_clauses {
            text.push_str(" WHEN ");
            text.push_str(&self.expression(&clause.condition, level)?);
            text.push_str(" THEN ");
            text.push_str(&self.expression(&clause.result, level)?);
        }
        if let Some(else_result) = else_result {
            text.push_str(" ELSE ");
            text.push_str(&self.expression(else_result, level)?);
        }
        text.push_str(" END");
        Ok(text)
    }
}

fn not(negated: bool) -> &'static str {
    if negated {
        "NOT "
    } else {
        ""
    }
}
