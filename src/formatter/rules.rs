//! Fixed layout rules
//!
//! - Keywords: uppercase
//! - Indentation: one unit per nesting level, tabs unless configured
//! - SELECT items: one per line, one level deeper than SELECT
//! - Clauses: each on its own line at the statement's level, in a fixed order
//! - OFFSET: shares the LIMIT line when both are present

use crate::ast::{Join, JoinKind, NullsOrder, SortDirection};

pub const SELECT: &str = "SELECT";
pub const SQL_NO_CACHE: &str = "SQL_NO_CACHE";
pub const SQL_CALC_FOUND_ROWS: &str = "SQL_CALC_FOUND_ROWS";
pub const INTO: &str = " INTO ";
pub const FROM: &str = "FROM ";
pub const WINDOW: &str = "WINDOW ";
pub const WHERE: &str = "WHERE ";
pub const GROUP_BY: &str = "GROUP BY ";
pub const HAVING: &str = "HAVING ";
pub const FOR_UPDATE: &str = "FOR UPDATE";
pub const VALUES: &str = "VALUES ";
pub const WITH: &str = "WITH";
pub const RECURSIVE: &str = "RECURSIVE ";

/// Separator placed before a join's source
pub fn join_separator(join: &Join) -> &'static str {
    if join.simple {
        ", "
    } else {
        " "
    }
}

/// Keywords that introduce a non-comma join, e.g. `NATURAL LEFT OUTER JOIN`
pub fn join_keywords(join: &Join) -> String {
    let mut words = Vec::with_capacity(4);
    if join.natural {
        words.push("NATURAL");
    }
    match join.kind {
        JoinKind::Plain => {}
        JoinKind::Inner => words.push("INNER"),
        JoinKind::Left => words.push("LEFT"),
        JoinKind::Right => words.push("RIGHT"),
        JoinKind::Full => words.push("FULL"),
        JoinKind::Cross => words.push("CROSS"),
        JoinKind::Straight => {
            words.push("STRAIGHT_JOIN");
            return words.join(" ");
        }
    }
    if join.outer {
        words.push("OUTER");
    }
    words.push("JOIN");
    words.join(" ")
}

pub fn order_by_keyword(siblings: bool) -> &'static str {
    if siblings {
        "ORDER SIBLINGS BY "
    } else {
        "ORDER BY "
    }
}

pub fn sort_direction(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => " ASC",
        SortDirection::Desc => " DESC",
    }
}

pub fn nulls_order(nulls: NullsOrder) -> &'static str {
    match nulls {
        NullsOrder::First => " NULLS FIRST",
        NullsOrder::Last => " NULLS LAST",
    }
}
