//! FROM-clause sources and joins

use super::list::{render_list, ListStyle};
use super::rules;
use super::Renderer;
use crate::ast::{Alias, FromItem, Join, Statement};
use crate::error::{Error, Result};

impl Renderer {
    /// Render one FROM source. Subqueries render their body at `level` and
    /// close their bracket one level up, aligned with the owning clause.
    pub fn from_item(&self, item: &FromItem, level: usize) -> Result<String> {
        let mut p = self.printer(level);
        match item {
            FromItem::Table(table) => {
                p.append(&table.to_string());
            }
            FromItem::Subquery { body, alias } => {
                let subquery = self.bracketed_statement(body, level)?;
                p.append(&subquery).append(&alias_suffix(alias));
            }
            FromItem::Lateral { body, alias } => {
                let subquery = self.bracketed_statement(body, level)?;
                p.append("LATERAL ").append(&subquery).append(&alias_suffix(alias));
            }
            FromItem::SubJoin { left, joins, alias } => {
                let left = self.from_item(left, level)?;
                p.append("(").append(&left);
                for (index, join) in joins.iter().enumerate() {
                    let text = self.join(join, index, p.current_level())?;
                    p.append(rules::join_separator(join)).append(&text);
                }
                p.append(")").append(&alias_suffix(alias));
            }
            FromItem::TableFunction { function, alias } => {
                let function = self.function(function, level)?;
                p.append(&function).append(&alias_suffix(alias));
            }
            FromItem::Values { rows, .. } if rows.is_empty() => {
                return Err(Error::EmptyValuesRows);
            }
            FromItem::Values { rows, alias } => {
                let rows = render_list(
                    rows,
                    ListStyle::comma(),
                    level,
                    self.config.indent,
                    |row, lvl| self.expression_list(row, ListStyle::comma().brackets(), lvl),
                )?;
                p.append("(")
                    .append(rules::VALUES)
                    .append(&rows)
                    .append(")")
                    .append(&alias_suffix(alias));
            }
        }
        Ok(p.finish())
    }

    /// Render one join, without the separator that precedes it. `index` is
    /// the join's position in its FROM clause and identifies it in errors.
    pub fn join(&self, join: &Join, index: usize, level: usize) -> Result<String> {
        let right_item = join
            .right_item
            .as_ref()
            .ok_or(Error::MissingJoinSource { index })?;
        let has_using = !join.using.is_empty();
        if join.simple && (join.on.is_some() || has_using) {
            return Err(Error::SimpleJoinConstraint { index });
        }
        if join.on.is_some() && has_using {
            return Err(Error::ConflictingJoinConstraint { index });
        }

        let mut p = self.printer(level);
        let source = self.from_item(right_item, p.next_level())?;
        if join.simple {
            p.append(&source);
            return Ok(p.finish());
        }

        p.append(&rules::join_keywords(join)).append(" ").append(&source);
        if let Some(condition) = &join.on {
            let condition = self.expression(condition, level)?;
            p.append(" ON ").append(&condition);
        }
        if has_using {
            let columns = render_list(
                &join.using,
                ListStyle::comma().brackets(),
                level,
                self.config.indent,
                |column, _| Ok(column.clone()),
            )?;
            p.append(" USING ").append(&columns);
        }
        Ok(p.finish())
    }

    /// `(` + body rendered at `level` + line break one level up + `)`
    pub(super) fn bracketed_statement(&self, body: &Statement, level: usize) -> Result<String> {
        let inner = self.statement(body, level)?;
        let mut p = self.printer(level);
        p.append("(").append(&inner).pre_tab().append(")");
        Ok(p.finish())
    }
}

fn alias_suffix(alias: &Option<Alias>) -> String {
    alias.as_ref().map(|a| format!(" {}", a)).unwrap_or_default()
}
