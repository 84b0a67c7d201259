//! AST node definitions for SELECT-shaped SQL statements
//!
//! The tree is built by an external parser and handed to the formatter
//! read-only. Optional clauses are `Option` fields; list-valued clauses are
//! `Vec` fields where an empty vector means the clause is absent.
//!
//! Leaf value objects (hints, row limits, lock waits, ...) render verbatim
//! through their `Display` impls. Nodes that carry expressions are positioned
//! and rendered by [`crate::formatter::Renderer`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A SELECT-shaped statement body
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Statement {
    PlainSelect(Box<PlainSelect>),
    SetOperationList(SetOperationList),
    WithItem(WithItem),
    Values(ValuesStatement),
}

impl Statement {
    /// Variant name, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::PlainSelect(_) => "plain select",
            Statement::SetOperationList(_) => "set operation list",
            Statement::WithItem(_) => "with item",
            Statement::Values(_) => "values",
        }
    }
}

impl From<PlainSelect> for Statement {
    fn from(select: PlainSelect) -> Self {
        Statement::PlainSelect(Box::new(select))
    }
}

impl From<SetOperationList> for Statement {
    fn from(list: SetOperationList) -> Self {
        Statement::SetOperationList(list)
    }
}

impl From<WithItem> for Statement {
    fn from(item: WithItem) -> Self {
        Statement::WithItem(item)
    }
}

impl From<ValuesStatement> for Statement {
    fn from(values: ValuesStatement) -> Self {
        Statement::Values(values)
    }
}

/// A statement body preceded by an optional WITH list
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Query {
    pub with_items: Vec<WithItem>,
    pub body: Statement,
}

/// A single SELECT with all of its clauses
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlainSelect {
    /// Wrap the whole select in parentheses
    pub use_brackets: bool,
    pub oracle_hint: Option<Hint>,
    pub skip: Option<Skip>,
    pub first: Option<First>,
    pub distinct: Option<Distinct>,
    pub top: Option<Top>,
    pub mysql_sql_no_cache: bool,
    pub mysql_sql_calc_found_rows: bool,
    pub select_items: Vec<SelectItem>,
    pub into_tables: Vec<Table>,
    pub from_item: Option<FromItem>,
    pub joins: Vec<Join>,
    pub ksql_window: Option<KsqlWindow>,
    pub where_clause: Option<Expression>,
    pub oracle_hierarchical: Option<HierarchicalQuery>,
    pub group_by: Option<GroupBy>,
    pub having: Option<Expression>,
    pub order_by: Vec<OrderByElement>,
    /// Oracle `ORDER SIBLINGS BY`
    pub oracle_siblings: bool,
    pub limit: Option<Limit>,
    pub offset: Option<Offset>,
    pub fetch: Option<Fetch>,
    pub for_update: Option<ForUpdate>,
    pub optimize_for: Option<OptimizeFor>,
    /// Argument of SQL Server `FOR XML PATH(...)`, kept as written
    pub for_xml_path: Option<String>,
}

/// SELECTs chained by UNION / INTERSECT / EXCEPT / MINUS
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SetOperationList {
    pub selects: Vec<Statement>,
    /// `operations[i]` sits between `selects[i]` and `selects[i + 1]`
    pub operations: Vec<SetOperator>,
    /// Per-branch parenthesization; `None` brackets every branch
    pub brackets: Option<Vec<bool>>,
    pub order_by: Vec<OrderByElement>,
    pub limit: Option<Limit>,
    pub offset: Option<Offset>,
    pub fetch: Option<Fetch>,
}

/// Set operation keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SetOperator {
    Union,
    UnionAll,
    UnionDistinct,
    Intersect,
    Except,
    Minus,
}

impl fmt::Display for SetOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SetOperator::Union => "UNION",
            SetOperator::UnionAll => "UNION ALL",
            SetOperator::UnionDistinct => "UNION DISTINCT",
            SetOperator::Intersect => "INTERSECT",
            SetOperator::Except => "EXCEPT",
            SetOperator::Minus => "MINUS",
        })
    }
}

/// A common table expression
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WithItem {
    pub name: String,
    pub recursive: bool,
    pub columns: Vec<String>,
    pub body: Box<Statement>,
}

/// `VALUES (...)` used as a statement
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValuesStatement {
    pub expressions: Vec<Expression>,
}

/// An item in the SELECT list
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectItem {
    /// `*`
    AllColumns,
    /// `t.*`
    AllTableColumns(ObjectName),
    Expression {
        expr: Expression,
        alias: Option<Alias>,
    },
}

/// A possibly qualified name such as `schema.table`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectName(pub Vec<String>);

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl From<&str> for ObjectName {
    /// Splits on `.` into name parts
    fn from(name: &str) -> Self {
        ObjectName(name.split('.').map(str::to_string).collect())
    }
}

/// `[AS] name [(col, ...)]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alias {
    pub name: String,
    pub columns: Vec<String>,
    pub use_as: bool,
}

impl Alias {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            use_as: false,
        }
    }

    pub fn with_as(name: impl Into<String>) -> Self {
        Self {
            use_as: true,
            ..Self::new(name)
        }
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.use_as {
            f.write_str("AS ")?;
        }
        f.write_str(&self.name)?;
        if !self.columns.is_empty() {
            write!(f, " ({})", self.columns.join(", "))?;
        }
        Ok(())
    }
}

/// A table reference
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    pub name: ObjectName,
    pub alias: Option<Alias>,
}

impl Table {
    pub fn new(name: &str) -> Self {
        Self {
            name: ObjectName::from(name),
            alias: None,
        }
    }

    pub fn aliased(name: &str, alias: Alias) -> Self {
        Self {
            name: ObjectName::from(name),
            alias: Some(alias),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(alias) = &self.alias {
            write!(f, " {}", alias)?;
        }
        Ok(())
    }
}

/// Oracle optimizer hint, `/*+ ... */`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hint {
    pub text: String,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/*+ {} */", self.text)
    }
}

/// A row count as it appears in TOP / SKIP / FIRST / LIMIT / OFFSET / FETCH
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RowCount {
    Number(u64),
    /// A bind parameter such as `?` or `:rows`
    Parameter(String),
    All,
    Null,
}

impl fmt::Display for RowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowCount::Number(n) => write!(f, "{}", n),
            RowCount::Parameter(p) => f.write_str(p),
            RowCount::All => f.write_str("ALL"),
            RowCount::Null => f.write_str("NULL"),
        }
    }
}

/// Informix `SKIP n`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Skip {
    pub rows: RowCount,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SKIP {}", self.rows)
    }
}

/// Informix `FIRST n`, also spelled `LIMIT n` in the select head
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct First {
    pub keyword: FirstKeyword,
    pub rows: RowCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FirstKeyword {
    First,
    Limit,
}

impl fmt::Display for First {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self.keyword {
            FirstKeyword::First => "FIRST",
            FirstKeyword::Limit => "LIMIT",
        };
        write!(f, "{} {}", keyword, self.rows)
    }
}

/// DISTINCT flavours
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Distinct {
    Distinct,
    Unique,
    /// PostgreSQL `DISTINCT ON (expr, ...)`
    On(Vec<Expression>),
}

/// SQL Server `TOP n [PERCENT] [WITH TIES]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Top {
    pub count: RowCount,
    pub parenthesized: bool,
    pub percent: bool,
    pub with_ties: bool,
}

impl fmt::Display for Top {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parenthesized {
            write!(f, "TOP ({})", self.count)?;
        } else {
            write!(f, "TOP {}", self.count)?;
        }
        if self.percent {
            f.write_str(" PERCENT")?;
        }
        if self.with_ties {
            f.write_str(" WITH TIES")?;
        }
        Ok(())
    }
}

/// `LIMIT n` or MySQL `LIMIT offset, n`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Limit {
    pub offset: Option<RowCount>,
    pub row_count: RowCount,
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.offset {
            Some(offset) => write!(f, "LIMIT {}, {}", offset, self.row_count),
            None => write!(f, "LIMIT {}", self.row_count),
        }
    }
}

/// `OFFSET n [ROW | ROWS]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Offset {
    pub value: RowCount,
    pub unit: Option<RowsUnit>,
}

/// `ROW` / `ROWS` suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RowsUnit {
    Row,
    Rows,
}

impl fmt::Display for RowsUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RowsUnit::Row => "ROW",
            RowsUnit::Rows => "ROWS",
        })
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OFFSET {}", self.value)?;
        if let Some(unit) = &self.unit {
            write!(f, " {}", unit)?;
        }
        Ok(())
    }
}

/// `FETCH { FIRST | NEXT } [n] { ROW | ROWS } ONLY`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fetch {
    /// `FIRST` when true, `NEXT` otherwise
    pub first: bool,
    pub row_count: Option<RowCount>,
    pub unit: RowsUnit,
}

impl fmt::Display for Fetch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.first { "FETCH FIRST" } else { "FETCH NEXT" })?;
        if let Some(count) = &self.row_count {
            write!(f, " {}", count)?;
        }
        write!(f, " {} ONLY", self.unit)
    }
}

/// `FOR UPDATE [OF table] [wait]`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForUpdate {
    pub table: Option<Table>,
    pub wait: Option<Wait>,
}

/// Lock wait behaviour after FOR UPDATE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Wait {
    Seconds(u64),
    NoWait,
    SkipLocked,
}

impl fmt::Display for Wait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wait::Seconds(s) => write!(f, "WAIT {}", s),
            Wait::NoWait => f.write_str("NOWAIT"),
            Wait::SkipLocked => f.write_str("SKIP LOCKED"),
        }
    }
}

/// DB2 `OPTIMIZE FOR n ROWS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptimizeFor {
    pub rows: u64,
}

impl fmt::Display for OptimizeFor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OPTIMIZE FOR {} ROWS", self.rows)
    }
}

/// KSQL windowing, the body of a `WINDOW` clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KsqlWindow {
    Hopping {
        size: WindowDuration,
        advance: WindowDuration,
    },
    Session {
        gap: WindowDuration,
    },
    Tumbling {
        size: WindowDuration,
    },
}

impl fmt::Display for KsqlWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KsqlWindow::Hopping { size, advance } => {
                write!(f, "HOPPING (SIZE {}, ADVANCE BY {})", size, advance)
            }
            KsqlWindow::Session { gap } => write!(f, "SESSION ({})", gap),
            KsqlWindow::Tumbling { size } => write!(f, "TUMBLING (SIZE {})", size),
        }
    }
}

/// A KSQL window length such as `30 SECONDS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowDuration {
    pub value: u64,
    pub unit: TimeUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl fmt::Display for WindowDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            TimeUnit::Milliseconds => "MILLISECONDS",
            TimeUnit::Seconds => "SECONDS",
            TimeUnit::Minutes => "MINUTES",
            TimeUnit::Hours => "HOURS",
            TimeUnit::Days => "DAYS",
        };
        write!(f, "{} {}", self.value, unit)
    }
}

/// Oracle `START WITH ... CONNECT BY [NOCYCLE] ...`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HierarchicalQuery {
    pub start_with: Option<Expression>,
    pub connect_by: Expression,
    pub no_cycle: bool,
    /// CONNECT BY was written before START WITH
    pub connect_first: bool,
}

/// GROUP BY clause
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupBy {
    pub expressions: Vec<Expression>,
}

/// A single ORDER BY item
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderByElement {
    pub expr: Expression,
    pub direction: Option<SortDirection>,
    pub nulls: Option<NullsOrder>,
}

impl OrderByElement {
    pub fn new(expr: Expression) -> Self {
        Self {
            expr,
            direction: None,
            nulls: None,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortDirection {
    Asc,
    Desc,
}

/// NULLS ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NullsOrder {
    First,
    Last,
}

/// A FROM-clause source
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FromItem {
    Table(Table),
    Subquery {
        body: Box<Statement>,
        alias: Option<Alias>,
    },
    /// `LATERAL (subquery)`
    Lateral {
        body: Box<Statement>,
        alias: Option<Alias>,
    },
    /// A parenthesized join, `(a JOIN b ON ...)`
    SubJoin {
        left: Box<FromItem>,
        joins: Vec<Join>,
        alias: Option<Alias>,
    },
    TableFunction {
        function: Function,
        alias: Option<Alias>,
    },
    /// `(VALUES (...), (...))`
    Values {
        rows: Vec<Vec<Expression>>,
        alias: Option<Alias>,
    },
}

impl From<Table> for FromItem {
    fn from(table: Table) -> Self {
        FromItem::Table(table)
    }
}

/// One join in a FROM clause
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Join {
    pub kind: JoinKind,
    pub outer: bool,
    pub natural: bool,
    /// Legacy comma join, `FROM a, b`
    pub simple: bool,
    pub right_item: Option<FromItem>,
    pub on: Option<Expression>,
    pub using: Vec<String>,
}

impl Join {
    /// A keyword join of the given kind
    pub fn new(kind: JoinKind, right_item: impl Into<FromItem>) -> Self {
        Self {
            kind,
            right_item: Some(right_item.into()),
            ..Default::default()
        }
    }

    /// A comma join
    pub fn simple(right_item: impl Into<FromItem>) -> Self {
        Self {
            simple: true,
            right_item: Some(right_item.into()),
            ..Default::default()
        }
    }

    pub fn on(mut self, condition: Expression) -> Self {
        self.on = Some(condition);
        self
    }

    pub fn using<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.using = columns.into_iter().map(Into::into).collect();
        self
    }
}

/// JOIN kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JoinKind {
    /// Bare `JOIN`
    #[default]
    Plain,
    Inner,
    Left,
    Right,
    Full,
    Cross,
    /// MySQL `STRAIGHT_JOIN`
    Straight,
}

/// Expression node
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expression {
    Column(ObjectName),
    Value(Value),
    /// Bind parameter, kept as written (`?`, `:name`, `#{id}`)
    Parameter(String),
    BinaryOp {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },
    UnaryOp {
        op: UnaryOperator,
        expr: Box<Expression>,
    },
    Function(Function),
    /// `(expr)`
    Nested(Box<Expression>),
    /// `(a, b, ...)`
    Row(Vec<Expression>),
    InList {
        expr: Box<Expression>,
        list: Vec<Expression>,
        negated: bool,
    },
    InSubquery {
        expr: Box<Expression>,
        subquery: Box<Statement>,
        negated: bool,
    },
    Exists {
        subquery: Box<Statement>,
        negated: bool,
    },
    Subquery(Box<Statement>),
    Between {
        expr: Box<Expression>,
        low: Box<Expression>,
        high: Box<Expression>,
        negated: bool,
    },
    IsNull {
        expr: Box<Expression>,
        negated: bool,
    },
    Case {
        operand: Option<Box<Expression>>,
        when_clauses: Vec<WhenClause>,
        else_result: Option<Box<Expression>>,
    },
    Cast {
        expr: Box<Expression>,
        data_type: String,
    },
}

impl Expression {
    pub fn column(name: &str) -> Self {
        Expression::Column(ObjectName::from(name))
    }

    pub fn number(n: i64) -> Self {
        Expression::Value(Value::Number(n.to_string()))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Expression::Value(Value::SingleQuotedString(s.into()))
    }

    pub fn binary(left: Expression, op: BinaryOperator, right: Expression) -> Self {
        Expression::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

/// Literal values
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Numeric literal, kept as written
    Number(String),
    SingleQuotedString(String),
    Boolean(bool),
    Null,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(n),
            Value::SingleQuotedString(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Value::Boolean(true) => f.write_str("TRUE"),
            Value::Boolean(false) => f.write_str("FALSE"),
            Value::Null => f.write_str("NULL"),
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
    Like,
    NotLike,
    Concat,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Eq => "=",
            BinaryOperator::NotEq => "<>",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
            BinaryOperator::Like => "LIKE",
            BinaryOperator::NotLike => "NOT LIKE",
            BinaryOperator::Concat => "||",
        })
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOperator {
    Not,
    Minus,
    Plus,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnaryOperator::Not => "NOT ",
            UnaryOperator::Minus => "-",
            UnaryOperator::Plus => "+",
        })
    }
}

/// A function call
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Function {
    pub name: ObjectName,
    pub args: Vec<Expression>,
    pub distinct: bool,
    /// `COUNT(*)`
    pub star: bool,
}

/// WHEN clause in a CASE expression
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WhenClause {
    pub condition: Expression,
    pub result: Expression,
}
