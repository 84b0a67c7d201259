//! Bind parameters restored from a prepared-statement log
//!
//! Statement logs print the SQL with `?` placeholders and, on a separate
//! line, the bound values as `value(Type)` entries:
//!
//! ```text
//! Parameters: 42(Integer), alice(String), null
//! ```
//!
//! [`parse_parameter_line`] turns such a line into literal [`Value`]s and
//! [`bind_parameters`] substitutes them, in order, for the `?` placeholders of
//! a statement. Placeholders are numbered in the order the renderer writes
//! them, so the n-th `?` in the rendered text receives the n-th value.

use log::debug;

use crate::ast::*;
use crate::error::{Error, Result};

const PARAMETERS_PREFIX: &str = "Parameters:";
const PLACEHOLDER: &str = "?";

/// Parse one `value(Type)` entry.
///
/// Integer types become numbers and must parse as integers. Decimal types
/// become numbers and must parse as floats. `Boolean` becomes a boolean
/// literal and every other type a string. A bare `null` is the NULL literal.
/// Entries with no `(Type)` suffix return `None`.
pub fn parse_parameter(entry: &str) -> Result<Option<Value>> {
    let entry = entry.trim();
    if entry == "null" {
        return Ok(Some(Value::Null));
    }
    let Some((text, type_name)) = split_typed(entry) else {
        return Ok(None);
    };

    let invalid = || Error::InvalidParameter {
        text: text.to_string(),
        type_name: type_name.to_string(),
    };
    let value = match type_name {
        "Integer" | "Long" | "Short" | "Byte" | "BigInteger" => {
            text.parse::<i128>().map_err(|_| invalid())?;
            Value::Number(text.to_string())
        }
        "Double" | "Float" | "BigDecimal" => {
            text.parse::<f64>().map_err(|_| invalid())?;
            Value::Number(text.to_string())
        }
        "Boolean" => Value::Boolean(text.parse::<bool>().map_err(|_| invalid())?),
        _ => Value::SingleQuotedString(text.to_string()),
    };
    Ok(Some(value))
}

/// Parse a whole parameter line, with or without its `Parameters:` prefix.
///
/// Entries are separated by `", "`. Entries without a type are skipped.
pub fn parse_parameter_line(line: &str) -> Result<Vec<Value>> {
    let line = line.trim();
    let line = line.strip_prefix(PARAMETERS_PREFIX).unwrap_or(line).trim();
    if line.is_empty() {
        return Ok(Vec::new());
    }

    let mut values = Vec::new();
    for entry in line.split(", ") {
        if let Some(value) = parse_parameter(entry)? {
            values.push(value);
        }
    }
    Ok(values)
}

/// Return a copy of `statement` with each `?` placeholder replaced by the
/// next value.
///
/// The number of placeholders must equal the number of values. Named
/// parameters such as `:id` are left alone.
pub fn bind_parameters(statement: &Statement, values: &[Value]) -> Result<Statement> {
    let mut bound = statement.clone();
    let mut binder = Binder::new(values);
    binder.statement(&mut bound)?;
    binder.finish()?;
    Ok(bound)
}

/// [`bind_parameters`] for a statement with a WITH list.
pub fn bind_query_parameters(query: &Query, values: &[Value]) -> Result<Query> {
    let mut bound = query.clone();
    let mut binder = Binder::new(values);
    for item in &mut bound.with_items {
        binder.statement(&mut item.body)?;
    }
    binder.statement(&mut bound.body)?;
    binder.finish()?;
    Ok(bound)
}

/// Split `value(Type)` at its last opening bracket. The type may not contain
/// whitespace.
fn split_typed(entry: &str) -> Option<(&str, &str)> {
    let inner = entry.strip_suffix(')')?;
    let open = inner.rfind('(')?;
    let type_name = &inner[open + 1..];
    if type_name.is_empty() || type_name.contains(char::is_whitespace) {
        return None;
    }
    Some((&inner[..open], type_name))
}

/// Mutable walk over a statement in rendering order
struct Binder<'a> {
    values: &'a [Value],
    seen: usize,
}

impl<'a> Binder<'a> {
    fn new(values: &'a [Value]) -> Self {
        Self { values, seen: 0 }
    }

    fn finish(self) -> Result<()> {
        if self.seen != self.values.len() {
            return Err(Error::ParameterCountMismatch {
                placeholders: self.seen,
                values: self.values.len(),
            });
        }
        debug!("bound {} parameter(s)", self.seen);
        Ok(())
    }

    /// Count the placeholder and hand out its value, if there is one left.
    fn take(&mut self) -> Option<&'a Value> {
        let value = self.values.get(self.seen);
        self.seen += 1;
        value
    }

    fn statement(&mut self, statement: &mut Statement) -> Result<()> {
        match statement {
            Statement::PlainSelect(select) => self.plain_select(select),
            Statement::SetOperationList(list) => {
                for select in &mut list.selects {
                    self.statement(select)?;
                }
                self.order_by(&mut list.order_by)?;
                self.row_limits(&mut list.limit, &mut list.offset, &mut list.fetch)
            }
            Statement::WithItem(item) => self.statement(&mut item.body),
            Statement::Values(values) => self.expressions(&mut values.expressions),
        }
    }

    fn plain_select(&mut self, select: &mut PlainSelect) -> Result<()> {
        if let Some(skip) = &mut select.skip {
            self.row_count(&mut skip.rows)?;
        }
        if let Some(first) = &mut select.first {
            self.row_count(&mut first.rows)?;
        }
        if let Some(Distinct::On(expressions)) = &mut select.distinct {
            self.expressions(expressions)?;
        }
        if let Some(top) = &mut select.top {
            self.row_count(&mut top.count)?;
        }
        for item in &mut select.select_items {
            if let SelectItem::Expression { expr, .. } = item {
                self.expression(expr)?;
            }
        }
        if let Some(from_item) = &mut select.from_item {
            self.from_item(from_item)?;
        }
        self.joins(&mut select.joins)?;
        if let Some(condition) = &mut select.where_clause {
            self.expression(condition)?;
        }
        if let Some(hierarchical) = &mut select.oracle_hierarchical {
            if hierarchical.connect_first {
                self.expression(&mut hierarchical.connect_by)?;
            }
            if let Some(start) = &mut hierarchical.start_with {
                self.expression(start)?;
            }
            if !hierarchical.connect_first {
                self.expression(&mut hierarchical.connect_by)?;
            }
        }
        if let Some(group_by) = &mut select.group_by {
            self.expressions(&mut group_by.expressions)?;
        }
        if let Some(having) = &mut select.having {
            self.expression(having)?;
        }
        self.order_by(&mut select.order_by)?;
        self.row_limits(&mut select.limit, &mut select.offset, &mut select.fetch)
    }

    fn from_item(&mut self, item: &mut FromItem) -> Result<()> {
        match item {
            FromItem::Table(_) => Ok(()),
            FromItem::Subquery { body, .. } | FromItem::Lateral { body, .. } => {
                self.statement(body)
            }
            FromItem::SubJoin { left, joins, .. } => {
                self.from_item(left)?;
                self.joins(joins)
            }
            FromItem::TableFunction { function, .. } => self.expressions(&mut function.args),
            FromItem::Values { rows, .. } => {
                for row in rows {
                    self.expressions(row)?;
                }
                Ok(())
            }
        }
    }

    fn joins(&mut self, joins: &mut [Join]) -> Result<()> {
        for join in joins {
            if let Some(right_item) = &mut join.right_item {
                self.from_item(right_item)?;
            }
            if let Some(condition) = &mut join.on {
                self.expression(condition)?;
            }
        }
        Ok(())
    }

    fn order_by(&mut self, elements: &mut [OrderByElement]) -> Result<()> {
        for element in elements {
            self.expression(&mut element.expr)?;
        }
        Ok(())
    }

    fn row_limits(
        &mut self,
        limit: &mut Option<Limit>,
        offset: &mut Option<Offset>,
        fetch: &mut Option<Fetch>,
    ) -> Result<()> {
        if let Some(limit) = limit {
            if let Some(offset) = &mut limit.offset {
                self.row_count(offset)?;
            }
            self.row_count(&mut limit.row_count)?;
        }
        if let Some(offset) = offset {
            self.row_count(&mut offset.value)?;
        }
        if let Some(Fetch {
            row_count: Some(count),
            ..
        }) = fetch
        {
            self.row_count(count)?;
        }
        Ok(())
    }

    /// Row counts only take unsigned integers or NULL.
    fn row_count(&mut self, count: &mut RowCount) -> Result<()> {
        if !matches!(count, RowCount::Parameter(p) if *p == PLACEHOLDER) {
            return Ok(());
        }
        let Some(value) = self.take() else {
            return Ok(());
        };
        *count = match value {
            Value::Null => RowCount::Null,
            Value::Number(n) => RowCount::Number(n.parse().map_err(|_| Error::InvalidParameter {
                text: n.clone(),
                type_name: "row count".to_string(),
            })?),
            other => {
                return Err(Error::InvalidParameter {
                    text: other.to_string(),
                    type_name: "row count".to_string(),
                })
            }
        };
        Ok(())
    }

    fn expressions(&mut self, expressions: &mut [Expression]) -> Result<()> {
        for expr in expressions {
            self.expression(expr)?;
        }
        Ok(())
    }

    fn expression(&mut self, expr: &mut Expression) -> Result<()> {
        if matches!(expr, Expression::Parameter(p) if *p == PLACEHOLDER) {
            if let Some(value) = self.take() {
                *expr = Expression::Value(value.clone());
            }
            return Ok(());
        }
        match expr {
            Expression::Column(_) | Expression::Value(_) | Expression::Parameter(_) => Ok(()),
            Expression::BinaryOp { left, right, .. } => {
                self.expression(left)?;
                self.expression(right)
            }
            Expression::UnaryOp { expr, .. }
            | Expression::Nested(expr)
            | Expression::IsNull { expr, .. }
            | Expression::Cast { expr, .. } => self.expression(expr),
            Expression::Function(function) => self.expressions(&mut function.args),
            Expression::Row(items) => self.expressions(items),
            Expression::InList { expr, list, .. } => {
                self.expression(expr)?;
                self.expressions(list)
            }
            Expression::InSubquery { expr, subquery, .. } => {
                self.expression(expr)?;
                self.statement(subquery)
            }
            Expression::Exists { subquery, .. } | Expression::Subquery(subquery) => {
                self.statement(subquery)
            }
            Expression::Between {
                expr, low, high, ..
            } => {
                self.expression(expr)?;
                self.expression(low)?;
                self.expression(high)
            }
            Expression::Case {
                operand,
                when_clauses,
                else_result,
            } => {
                if let Some(operand) = operand {
                    self.expression(operand)?;
                }
                for clause in when_clauses {
                    self.expression(&mut clause.condition)?;
                    self.expression(&mut clause.result)?;
                }
                if let Some(else_result) = else_result {
                    self.expression(else_result)?;
                }
                Ok(())
            }
        }
    }
}
