//! Clause assembly for each statement shape

use log::trace;

use super::list::{render_list, ListStyle};
use super::printer::Printer;
use super::rules;
use super::Renderer;
use crate::ast::*;
use crate::error::{Error, Result};

impl Renderer {
    /// Render a statement at `level`. The output starts with the line break
    /// of its first clause.
    pub fn statement(&self, statement: &Statement, level: usize) -> Result<String> {
        trace!("{} at level {}", statement.kind(), level);
        match statement {
            Statement::PlainSelect(select) => self.plain_select(select, level),
            Statement::SetOperationList(list) => self.set_operation_list(list, level),
            Statement::WithItem(item) => self.with_item(item, level),
            Statement::Values(values) => self.values_statement(values, level),
        }
    }

    /// Render the WITH list, if any, followed by the body at the same level.
    pub fn query(&self, query: &Query, level: usize) -> Result<String> {
        let mut p = self.printer(level);
        if !query.with_items.is_empty() {
            let items = render_list(
                &query.with_items,
                ListStyle::separated(","),
                p.next_level(),
                self.config.indent,
                |item, lvl| self.with_item(item, lvl),
            )?;
            p.tab().append(rules::WITH).append(&items);
        }
        let body = self.statement(&query.body, level)?;
        p.append(&body);
        Ok(p.finish())
    }

    fn plain_select(&self, select: &PlainSelect, level: usize) -> Result<String> {
        if select.select_items.is_empty() {
            return Err(Error::EmptySelectList);
        }

        let mut p = self.printer(level);
        if select.use_brackets {
            p.append("(");
        }
        p.tab().append(rules::SELECT);

        // Head modifiers, in dialect order
        if let Some(hint) = &select.oracle_hint {
            p.append(" ").append(&hint.to_string());
        }
        if let Some(skip) = &select.skip {
            p.append(" ").append(&skip.to_string());
        }
        if let Some(first) = &select.first {
            p.append(" ").append(&first.to_string());
        }
        if let Some(distinct) = &select.distinct {
            let distinct = self.distinct(distinct, level)?;
            p.append(" ").append(&distinct);
        }
        if let Some(top) = &select.top {
            p.append(" ").append(&top.to_string());
        }
        if select.mysql_sql_no_cache {
            p.append(" ").append(rules::SQL_NO_CACHE);
        }
        if select.mysql_sql_calc_found_rows {
            p.append(" ").append(rules::SQL_CALC_FOUND_ROWS);
        }

        let items = render_list(
            &select.select_items,
            ListStyle::comma().newline(),
            p.next_level(),
            self.config.indent,
            |item, lvl| self.select_item(item, lvl),
        )?;
        p.append(&items);

        if !select.into_tables.is_empty() {
            let tables: Vec<String> = select.into_tables.iter().map(ToString::to_string).collect();
            p.append(rules::INTO).append(&tables.join(", "));
        }

        match &select.from_item {
            Some(from_item) => {
                let source = self.from_item(from_item, p.next_level())?;
                p.tab().append(rules::FROM).append(&source);
                self.append_joins(&mut p, &select.joins)?;
            }
            None if !select.joins.is_empty() => {
                return Err(Error::JoinWithoutFrom {
                    count: select.joins.len(),
                });
            }
            None => {}
        }

        if let Some(window) = &select.ksql_window {
            p.tab().append(rules::WINDOW).append(&window.to_string());
        }
        if let Some(condition) = &select.where_clause {
            let condition = self.expression(condition, level)?;
            p.tab().append(rules::WHERE).append(&condition);
        }
        if let Some(hierarchical) = &select.oracle_hierarchical {
            let hierarchical = self.hierarchical(hierarchical, level)?;
            p.tab().append(&hierarchical);
        }
        if let Some(group_by) = &select.group_by {
            if group_by.expressions.is_empty() {
                return Err(Error::EmptyGroupBy);
            }
            let expressions = self.expression_list(&group_by.expressions, ListStyle::comma(), level)?;
            p.tab().append(rules::GROUP_BY).append(&expressions);
        }
        if let Some(having) = &select.having {
            let having = self.expression(having, level)?;
            p.tab().append(rules::HAVING).append(&having);
        }
        if !select.order_by.is_empty() {
            let order_by = self.order_by(&select.order_by, level)?;
            p.tab()
                .append(rules::order_by_keyword(select.oracle_siblings))
                .append(&order_by);
        }
        append_row_limits(
            &mut p,
            select.limit.as_ref(),
            select.offset.as_ref(),
            select.fetch.as_ref(),
        );
        if let Some(for_update) = &select.for_update {
            p.tab().append(rules::FOR_UPDATE);
            if let Some(table) = &for_update.table {
                p.append(" OF ").append(&table.to_string());
            }
            if let Some(wait) = &for_update.wait {
                p.append(" ").append(&wait.to_string());
            }
        }
        if let Some(optimize_for) = &select.optimize_for {
            p.tab().append(&optimize_for.to_string());
        }
        if let Some(path) = &select.for_xml_path {
            p.tab().append("FOR XML PATH(").append(path).append(")");
        }

        if select.use_brackets {
            p.pre_tab().append(")");
        }
        Ok(p.finish())
    }

    fn set_operation_list(&self, list: &SetOperationList, level: usize) -> Result<String> {
        let branches = list.selects.len();
        if branches == 0 {
            return Err(Error::EmptySetOperation);
        }
        if list.operations.len() != branches - 1 {
            return Err(Error::OperatorCountMismatch {
                branches,
                operators: list.operations.len(),
            });
        }
        if let Some(brackets) = &list.brackets {
            if brackets.len() != branches {
                return Err(Error::BracketCountMismatch {
                    branches,
                    brackets: brackets.len(),
                });
            }
        }

        let mut p = self.printer(level);
        for (index, select) in list.selects.iter().enumerate() {
            if index > 0 {
                p.tab()
                    .append(&list.operations[index - 1].to_string())
                    .append(" ");
            }
            let branch = self.statement(select, level)?;
            let bracketed = list.brackets.as_ref().map_or(true, |b| b[index]);
            if bracketed {
                p.append("(").append(&branch).append(")");
            } else {
                p.append(&branch);
            }
        }

        if !list.order_by.is_empty() {
            let order_by = self.order_by(&list.order_by, level)?;
            p.tab().append(rules::order_by_keyword(false)).append(&order_by);
        }
        append_row_limits(
            &mut p,
            list.limit.as_ref(),
            list.offset.as_ref(),
            list.fetch.as_ref(),
        );
        Ok(p.finish())
    }

    fn with_item(&self, item: &WithItem, level: usize) -> Result<String> {
        if item.name.is_empty() {
            return Err(Error::EmptyCteName);
        }

        let mut p = self.printer(level);
        p.tab();
        if item.recursive {
            p.append(rules::RECURSIVE);
        }
        p.append(&item.name);
        if !item.columns.is_empty() {
            let columns = render_list(
                &item.columns,
                ListStyle::comma().brackets(),
                level,
                self.config.indent,
                |column, _| Ok(column.clone()),
            )?;
            p.append(" ").append(&columns);
        }
        let body = self.statement(&item.body, p.next_level())?;
        p.append(" AS (").append(&body).tab().append(")");
        Ok(p.finish())
    }

    fn values_statement(&self, values: &ValuesStatement, level: usize) -> Result<String> {
        let expressions =
            self.expression_list(&values.expressions, ListStyle::comma().brackets(), level)?;
        let mut p = self.printer(level);
        p.tab().append(rules::VALUES).append(&expressions);
        Ok(p.finish())
    }

    fn append_joins(&self, p: &mut Printer, joins: &[Join]) -> Result<()> {
        for (index, join) in joins.iter().enumerate() {
            let text = self.join(join, index, p.current_level())?;
            p.append(rules::join_separator(join)).append(&text);
        }
        Ok(())
    }

    fn select_item(&self, item: &SelectItem, level: usize) -> Result<String> {
        Ok(match item {
            SelectItem::AllColumns => "*".to_string(),
            SelectItem::AllTableColumns(name) => format!("{}.*", name),
            SelectItem::Expression { expr, alias } => {
                let expr = self.expression(expr, level)?;
                match alias {
                    Some(alias) => format!("{} {}", expr, alias),
                    None => expr,
                }
            }
        })
    }

    fn distinct(&self, distinct: &Distinct, level: usize) -> Result<String> {
        Ok(match distinct {
            Distinct::Distinct => "DISTINCT".to_string(),
            Distinct::Unique => "UNIQUE".to_string(),
            Distinct::On(expressions) if expressions.is_empty() => {
                return Err(Error::EmptyDistinctOn);
            }
            Distinct::On(expressions) => {
                let list = self.expression_list(expressions, ListStyle::comma().brackets(), level)?;
                format!("DISTINCT ON {}", list)
            }
        })
    }

    fn hierarchical(&self, query: &HierarchicalQuery, level: usize) -> Result<String> {
        let start_with = match &query.start_with {
            Some(start) => Some(format!("START WITH {}", self.expression(start, level)?)),
            None => None,
        };
        let connect_by = format!(
            "CONNECT BY {}{}",
            if query.no_cycle { "NOCYCLE " } else { "" },
            self.expression(&query.connect_by, level)?
        );
        Ok(match start_with {
            Some(start_with) if query.connect_first => format!("{} {}", connect_by, start_with),
            Some(start_with) => format!("{} {}", start_with, connect_by),
            None => connect_by,
        })
    }

    fn order_by(&self, elements: &[OrderByElement], level: usize) -> Result<String> {
        render_list(elements, ListStyle::comma(), level, self.config.indent, |element, lvl| {
            let mut text = self.expression(&element.expr, lvl)?;
            if let Some(direction) = element.direction {
                text.push_str(rules::sort_direction(direction));
            }
            if let Some(nulls) = element.nulls {
                text.push_str(rules::nulls_order(nulls));
            }
            Ok(text)
        })
    }
}

/// LIMIT, OFFSET and FETCH each start a line, except that OFFSET continues
/// the LIMIT line when both are present.
fn append_row_limits(
    p: &mut Printer,
    limit: Option<&Limit>,
    offset: Option<&Offset>,
    fetch: Option<&Fetch>,
) {
    if let Some(limit) = limit {
        p.tab().append(&limit.to_string());
    }
    if let Some(offset) = offset {
        if limit.is_some() {
            p.append(" ");
        } else {
            p.tab();
        }
        p.append(&offset.to_string());
    }
    if let Some(fetch) = fetch {
        p.tab().append(&fetch.to_string());
    }
}
