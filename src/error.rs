//! Error types for sqlindent

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// A malformed AST shape found while rendering.
///
/// Absent optional clauses are never errors; these variants only cover trees
/// that cannot be turned into valid SQL text.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("join #{index} has no source to join")]
    #[diagnostic(code(sqlindent::missing_join_source))]
    MissingJoinSource { index: usize },

    #[error("comma join #{index} carries an ON or USING constraint")]
    #[diagnostic(
        code(sqlindent::simple_join_constraint),
        help("comma joins take their condition from WHERE")
    )]
    SimpleJoinConstraint { index: usize },

    #[error("join #{index} has both ON and USING constraints")]
    #[diagnostic(code(sqlindent::conflicting_join_constraint))]
    ConflictingJoinConstraint { index: usize },

    #[error("select has {count} join(s) but no FROM item")]
    #[diagnostic(code(sqlindent::join_without_from))]
    JoinWithoutFrom { count: usize },

    #[error("select has no select items")]
    #[diagnostic(code(sqlindent::empty_select_list))]
    EmptySelectList,

    #[error("set operation list has no branches")]
    #[diagnostic(code(sqlindent::empty_set_operation))]
    EmptySetOperation,

    #[error("set operation list has {branches} branches but {operators} operators")]
    #[diagnostic(
        code(sqlindent::operator_count_mismatch),
        help("expected exactly one operator between each pair of branches")
    )]
    OperatorCountMismatch { branches: usize, operators: usize },

    #[error("set operation list has {branches} branches but {brackets} bracket flags")]
    #[diagnostic(code(sqlindent::bracket_count_mismatch))]
    BracketCountMismatch { branches: usize, brackets: usize },

    #[error("common table expression has an empty name")]
    #[diagnostic(code(sqlindent::empty_cte_name))]
    EmptyCteName,

    #[error("GROUP BY has no expressions")]
    #[diagnostic(
        code(sqlindent::empty_group_by),
        help("leave `group_by` as `None` when there is no GROUP BY clause")
    )]
    EmptyGroupBy,

    #[error("DISTINCT ON has no expressions")]
    #[diagnostic(code(sqlindent::empty_distinct_on))]
    EmptyDistinctOn,

    #[error("VALUES source in FROM has no rows")]
    #[diagnostic(code(sqlindent::empty_values_rows))]
    EmptyValuesRows,

    #[error("parameter `{text}` is not a valid {type_name}")]
    #[diagnostic(code(sqlindent::invalid_parameter))]
    InvalidParameter { text: String, type_name: String },

    #[error("statement has {placeholders} `?` placeholder(s) but {values} parameter value(s)")]
    #[diagnostic(code(sqlindent::parameter_count_mismatch))]
    ParameterCountMismatch { placeholders: usize, values: usize },
}
