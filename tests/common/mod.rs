//! AST builders shared by the integration tests

#![allow(dead_code)]

use sqlindent::ast::*;

pub fn col(name: &str) -> Expression {
    Expression::column(name)
}

pub fn num(n: i64) -> Expression {
    Expression::number(n)
}

pub fn eq(left: Expression, right: Expression) -> Expression {
    Expression::binary(left, BinaryOperator::Eq, right)
}

pub fn item(expr: Expression) -> SelectItem {
    SelectItem::Expression { expr, alias: None }
}

pub fn items(names: &[&str]) -> Vec<SelectItem> {
    names.iter().map(|name| item(col(name))).collect()
}

/// `SELECT <columns> FROM <table>`
pub fn select(columns: &[&str], table: &str) -> PlainSelect {
    PlainSelect {
        select_items: items(columns),
        from_item: Some(Table::new(table).into()),
        ..Default::default()
    }
}

pub fn stmt(select: PlainSelect) -> Statement {
    Statement::from(select)
}

pub fn subquery(select: PlainSelect) -> Box<Statement> {
    Box::new(stmt(select))
}

pub fn count_star() -> Expression {
    Expression::Function(Function {
        name: ObjectName::from("COUNT"),
        star: true,
        ..Default::default()
    })
}

pub fn order(expr: Expression, direction: SortDirection) -> OrderByElement {
    OrderByElement {
        direction: Some(direction),
        ..OrderByElement::new(expr)
    }
}

pub fn with_item(name: &str, body: PlainSelect) -> WithItem {
    WithItem {
        name: name.to_string(),
        recursive: false,
        columns: Vec::new(),
        body: subquery(body),
    }
}

pub fn union(selects: Vec<PlainSelect>) -> SetOperationList {
    let operations = vec![SetOperator::Union; selects.len().saturating_sub(1)];
    SetOperationList {
        selects: selects.into_iter().map(stmt).collect(),
        operations,
        ..Default::default()
    }
}

pub fn render(statement: impl Into<Statement>) -> String {
    sqlindent::render(&statement.into(), 0).expect("statement should render")
}
