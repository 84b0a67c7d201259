//! Rendering tests for sqlindent
//!
//! These tests check clause order, indentation and bracket placement for
//! every statement shape.

mod common;

use common::*;
use sqlindent::ast::*;
use sqlindent::{RenderConfig, Renderer};

// =============================================================================
// PLAIN SELECT - head, select list, FROM
// =============================================================================

mod plain_select {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn select_items_on_their_own_lines() {
        let mut s = select(&["a", "b"], "t");
        s.where_clause = Some(eq(col("a"), num(1)));
        assert_eq!(render(s), "SELECT\n\ta,\n\tb\nFROM t\nWHERE a = 1");
    }

    #[test]
    fn single_item() {
        assert_eq!(render(select(&["id"], "users")), "SELECT\n\tid\nFROM users");
    }

    #[test]
    fn star_and_qualified_star() {
        let s = PlainSelect {
            select_items: vec![
                SelectItem::AllColumns,
                SelectItem::AllTableColumns(ObjectName::from("u")),
            ],
            from_item: Some(Table::aliased("users", Alias::new("u")).into()),
            ..Default::default()
        };
        assert_eq!(render(s), "SELECT\n\t*,\n\tu.*\nFROM users u");
    }

    #[test]
    fn item_aliases() {
        let s = PlainSelect {
            select_items: vec![
                SelectItem::Expression {
                    expr: col("first_name"),
                    alias: Some(Alias::with_as("name")),
                },
                SelectItem::Expression {
                    expr: count_star(),
                    alias: Some(Alias::new("n")),
                },
            ],
            from_item: Some(Table::new("people").into()),
            ..Default::default()
        };
        assert_eq!(
            render(s),
            "SELECT\n\tfirst_name AS name,\n\tCOUNT(*) n\nFROM people"
        );
    }

    #[test]
    fn qualified_table_with_alias() {
        let s = PlainSelect {
            select_items: items(&["o.id"]),
            from_item: Some(Table::aliased("sales.orders", Alias::with_as("o")).into()),
            ..Default::default()
        };
        assert_eq!(render(s), "SELECT\n\to.id\nFROM sales.orders AS o");
    }

    #[test]
    fn head_modifiers_in_fixed_order() {
        let s = PlainSelect {
            oracle_hint: Some(Hint {
                text: "INDEX(t idx)".to_string(),
            }),
            skip: Some(Skip {
                rows: RowCount::Number(5),
            }),
            first: Some(First {
                keyword: FirstKeyword::First,
                rows: RowCount::Number(10),
            }),
            distinct: Some(Distinct::Distinct),
            top: Some(Top {
                count: RowCount::Number(3),
                parenthesized: false,
                percent: false,
                with_ties: false,
            }),
            mysql_sql_no_cache: true,
            mysql_sql_calc_found_rows: true,
            ..select(&["a"], "t")
        };
        assert_eq!(
            render(s),
            "SELECT /*+ INDEX(t idx) */ SKIP 5 FIRST 10 DISTINCT TOP 3 SQL_NO_CACHE SQL_CALC_FOUND_ROWS\n\ta\nFROM t"
        );
    }

    #[test]
    fn top_percent_with_ties() {
        let s = PlainSelect {
            top: Some(Top {
                count: RowCount::Number(10),
                parenthesized: true,
                percent: true,
                with_ties: true,
            }),
            ..select(&["a"], "t")
        };
        assert_eq!(render(s), "SELECT TOP (10) PERCENT WITH TIES\n\ta\nFROM t");
    }

    #[test]
    fn distinct_on() {
        let s = PlainSelect {
            distinct: Some(Distinct::On(vec![col("a"), col("b")])),
            ..select(&["a", "b", "c"], "t")
        };
        assert_eq!(
            render(s),
            "SELECT DISTINCT ON (a, b)\n\ta,\n\tb,\n\tc\nFROM t"
        );
    }

    #[test]
    fn unique() {
        let s = PlainSelect {
            distinct: Some(Distinct::Unique),
            ..select(&["a"], "t")
        };
        assert_eq!(render(s), "SELECT UNIQUE\n\ta\nFROM t");
    }

    #[test]
    fn into_tables_stay_on_the_item_line() {
        let s = PlainSelect {
            into_tables: vec![Table::new("archive"), Table::new("backup")],
            ..select(&["a"], "t")
        };
        assert_eq!(render(s), "SELECT\n\ta INTO archive, backup\nFROM t");
    }

    #[test]
    fn where_without_from() {
        let s = PlainSelect {
            select_items: vec![item(num(1))],
            where_clause: Some(eq(num(1), num(1))),
            ..Default::default()
        };
        assert_eq!(render(s), "SELECT\n\t1\nWHERE 1 = 1");
    }

    #[test]
    fn no_from_no_where() {
        let s = PlainSelect {
            select_items: vec![item(Expression::string("it's"))],
            ..Default::default()
        };
        assert_eq!(render(s), "SELECT\n\t'it''s'");
    }

    #[test]
    fn bracketed_select_closes_at_its_own_line() {
        let s = PlainSelect {
            use_brackets: true,
            ..select(&["a"], "t")
        };
        assert_eq!(render(s), "(\nSELECT\n\ta\nFROM t\n)");
    }

    #[test]
    fn bracketed_select_parentheses_balance_when_nested() {
        let s = PlainSelect {
            use_brackets: true,
            where_clause: Some(Expression::InSubquery {
                expr: Box::new(col("a")),
                subquery: subquery(PlainSelect {
                    use_brackets: true,
                    ..select(&["b"], "u")
                }),
                negated: false,
            }),
            ..select(&["a"], "t")
        };
        let out = render(s);
        assert_eq!(out.matches('(').count(), out.matches(')').count());
        assert!(out.starts_with('('));
        assert!(out.ends_with(')'));
    }
}

// =============================================================================
// CLAUSE ORDER
// =============================================================================

mod clause_order {
    use super::*;
    use pretty_assertions::assert_eq;

    fn everything() -> PlainSelect {
        PlainSelect {
            ksql_window: Some(KsqlWindow::Tumbling {
                size: WindowDuration {
                    value: 5,
                    unit: TimeUnit::Minutes,
                },
            }),
            where_clause: Some(eq(col("a"), num(1))),
            oracle_hierarchical: Some(HierarchicalQuery {
                start_with: Some(eq(col("id"), num(1))),
                connect_by: eq(col("parent"), col("id")),
                no_cycle: false,
                connect_first: false,
            }),
            group_by: Some(GroupBy {
                expressions: vec![col("a")],
            }),
            having: Some(Expression::binary(count_star(), BinaryOperator::Gt, num(1))),
            order_by: vec![order(col("a"), SortDirection::Desc)],
            limit: Some(Limit {
                offset: None,
                row_count: RowCount::Number(10),
            }),
            offset: Some(Offset {
                value: RowCount::Number(5),
                unit: None,
            }),
            fetch: Some(Fetch {
                first: true,
                row_count: Some(RowCount::Number(10)),
                unit: RowsUnit::Rows,
            }),
            for_update: Some(ForUpdate {
                table: Some(Table::new("t")),
                wait: Some(Wait::NoWait),
            }),
            optimize_for: Some(OptimizeFor { rows: 10 }),
            for_xml_path: Some("''".to_string()),
            ..select(&["a"], "t")
        }
    }

    #[test]
    fn all_clauses_in_fixed_order() {
        assert_eq!(
            render(everything()),
            "SELECT\n\
             \ta\n\
             FROM t\n\
             WINDOW TUMBLING (SIZE 5 MINUTES)\n\
             WHERE a = 1\n\
             START WITH id = 1 CONNECT BY parent = id\n\
             GROUP BY a\n\
             HAVING COUNT(*) > 1\n\
             ORDER BY a DESC\n\
             LIMIT 10 OFFSET 5\n\
             FETCH FIRST 10 ROWS ONLY\n\
             FOR UPDATE OF t NOWAIT\n\
             OPTIMIZE FOR 10 ROWS\n\
             FOR XML PATH('')"
        );
    }

    #[test]
    fn order_is_independent_of_which_clauses_are_present() {
        let full = render(everything());
        let sparse = PlainSelect {
            ksql_window: None,
            oracle_hierarchical: None,
            having: None,
            fetch: None,
            optimize_for: None,
            ..everything()
        };
        let sparse = render(sparse);
        let position = |out: &str, keyword: &str| out.find(keyword).expect("keyword present");
        for out in [&full, &sparse] {
            let keywords = ["FROM", "WHERE", "GROUP BY", "ORDER BY", "LIMIT", "FOR UPDATE", "FOR XML"];
            let positions: Vec<usize> = keywords.iter().map(|k| position(out, k)).collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(positions, sorted);
        }
    }

    #[test]
    fn offset_alone_starts_its_own_line() {
        let s = PlainSelect {
            offset: Some(Offset {
                value: RowCount::Number(5),
                unit: Some(RowsUnit::Rows),
            }),
            ..select(&["a"], "t")
        };
        assert_eq!(render(s), "SELECT\n\ta\nFROM t\nOFFSET 5 ROWS");
    }

    #[test]
    fn mysql_limit_with_offset() {
        let s = PlainSelect {
            limit: Some(Limit {
                offset: Some(RowCount::Number(20)),
                row_count: RowCount::Parameter("?".to_string()),
            }),
            ..select(&["a"], "t")
        };
        assert_eq!(render(s), "SELECT\n\ta\nFROM t\nLIMIT 20, ?");
    }

    #[test]
    fn connect_by_first_with_nocycle() {
        let s = PlainSelect {
            oracle_hierarchical: Some(HierarchicalQuery {
                start_with: Some(Expression::IsNull {
                    expr: Box::new(col("parent")),
                    negated: false,
                }),
                connect_by: eq(col("parent"), col("id")),
                no_cycle: true,
                connect_first: true,
            }),
            ..select(&["id"], "tree")
        };
        assert_eq!(
            render(s),
            "SELECT\n\tid\nFROM tree\nCONNECT BY NOCYCLE parent = id START WITH parent IS NULL"
        );
    }

    #[test]
    fn order_siblings_by() {
        let s = PlainSelect {
            order_by: vec![
                OrderByElement::new(col("name")),
                OrderByElement {
                    nulls: Some(NullsOrder::Last),
                    ..order(col("id"), SortDirection::Asc)
                },
            ],
            oracle_siblings: true,
            ..select(&["name"], "tree")
        };
        assert_eq!(
            render(s),
            "SELECT\n\tname\nFROM tree\nORDER SIBLINGS BY name, id ASC NULLS LAST"
        );
    }

    #[test]
    fn for_update_variants() {
        let bare = PlainSelect {
            for_update: Some(ForUpdate::default()),
            ..select(&["a"], "t")
        };
        assert_eq!(render(bare), "SELECT\n\ta\nFROM t\nFOR UPDATE");

        let waiting = PlainSelect {
            for_update: Some(ForUpdate {
                table: None,
                wait: Some(Wait::Seconds(30)),
            }),
            ..select(&["a"], "t")
        };
        assert_eq!(render(waiting), "SELECT\n\ta\nFROM t\nFOR UPDATE WAIT 30");
    }

    #[test]
    fn hopping_window() {
        let s = PlainSelect {
            ksql_window: Some(KsqlWindow::Hopping {
                size: WindowDuration {
                    value: 30,
                    unit: TimeUnit::Seconds,
                },
                advance: WindowDuration {
                    value: 10,
                    unit: TimeUnit::Seconds,
                },
            }),
            ..select(&["a"], "events")
        };
        assert_eq!(
            render(s),
            "SELECT\n\ta\nFROM events\nWINDOW HOPPING (SIZE 30 SECONDS, ADVANCE BY 10 SECONDS)"
        );
    }
}

// =============================================================================
// JOINS
// =============================================================================

mod joins {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn comma_and_keyword_joins_share_the_from_line() {
        let s = PlainSelect {
            joins: vec![
                Join::simple(Table::new("t2")),
                Join::new(JoinKind::Left, Table::new("t3")).on(eq(col("t1.id"), col("t3.id"))),
            ],
            ..select(&["a"], "t1")
        };
        assert_eq!(
            render(s),
            "SELECT\n\ta\nFROM t1, t2 LEFT JOIN t3 ON t1.id = t3.id"
        );
    }

    #[test]
    fn comma_separator_regardless_of_kind() {
        let mut join = Join::simple(Table::new("b"));
        join.kind = JoinKind::Cross;
        let s = PlainSelect {
            joins: vec![join],
            ..select(&["x"], "a")
        };
        assert_eq!(render(s), "SELECT\n\tx\nFROM a, b");
    }

    #[test]
    fn join_kinds() {
        let cases = [
            (Join::new(JoinKind::Plain, Table::new("b")), "JOIN b"),
            (Join::new(JoinKind::Inner, Table::new("b")), "INNER JOIN b"),
            (Join::new(JoinKind::Right, Table::new("b")), "RIGHT JOIN b"),
            (
                Join {
                    outer: true,
                    ..Join::new(JoinKind::Full, Table::new("b"))
                },
                "FULL OUTER JOIN b",
            ),
            (Join::new(JoinKind::Cross, Table::new("b")), "CROSS JOIN b"),
            (Join::new(JoinKind::Straight, Table::new("b")), "STRAIGHT_JOIN b"),
            (
                Join {
                    natural: true,
                    ..Join::new(JoinKind::Plain, Table::new("b"))
                },
                "NATURAL JOIN b",
            ),
        ];
        for (join, expected) in cases {
            let s = PlainSelect {
                joins: vec![join],
                ..select(&["x"], "a")
            };
            assert_eq!(render(s), format!("SELECT\n\tx\nFROM a {}", expected));
        }
    }

    #[test]
    fn join_using() {
        let s = PlainSelect {
            joins: vec![Join::new(JoinKind::Inner, Table::new("b")).using(["id", "region"])],
            ..select(&["x"], "a")
        };
        assert_eq!(render(s), "SELECT\n\tx\nFROM a INNER JOIN b USING (id, region)");
    }

    #[test]
    fn join_subquery_closes_at_the_from_level() {
        let s = PlainSelect {
            joins: vec![Join::new(
                JoinKind::Left,
                FromItem::Subquery {
                    body: subquery(select(&["id"], "b")),
                    alias: Some(Alias::new("sub")),
                },
            )
            .on(eq(col("a.id"), col("sub.id")))],
            ..select(&["x"], "a")
        };
        assert_eq!(
            render(s),
            "SELECT\n\tx\nFROM a LEFT JOIN (\n\tSELECT\n\t\tid\n\tFROM b\n) sub ON a.id = sub.id"
        );
    }

    #[test]
    fn parenthesized_join() {
        let s = PlainSelect {
            from_item: Some(FromItem::SubJoin {
                left: Box::new(Table::new("a").into()),
                joins: vec![Join::new(JoinKind::Plain, Table::new("b")).using(["id"])],
                alias: None,
            }),
            joins: vec![Join::simple(Table::new("c"))],
            ..select(&["x"], "ignored")
        };
        assert_eq!(render(s), "SELECT\n\tx\nFROM (a JOIN b USING (id)), c");
    }
}

// =============================================================================
// FROM SOURCES
// =============================================================================

mod from_items {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn subquery_body_one_level_deeper() {
        let s = PlainSelect {
            from_item: Some(FromItem::Subquery {
                body: subquery(select(&["b"], "u")),
                alias: Some(Alias::new("x")),
            }),
            ..select(&["a"], "ignored")
        };
        assert_eq!(
            render(s),
            "SELECT\n\ta\nFROM (\n\tSELECT\n\t\tb\n\tFROM u\n) x"
        );
    }

    #[test]
    fn nested_subqueries_keep_stepping_in() {
        let inner = select(&["c"], "v");
        let middle = PlainSelect {
            from_item: Some(FromItem::Subquery {
                body: subquery(inner),
                alias: None,
            }),
            ..select(&["b"], "ignored")
        };
        let outer = PlainSelect {
            from_item: Some(FromItem::Subquery {
                body: subquery(middle),
                alias: None,
            }),
            ..select(&["a"], "ignored")
        };
        assert_eq!(
            render(outer),
            "SELECT\n\
             \ta\n\
             FROM (\n\
             \tSELECT\n\
             \t\tb\n\
             \tFROM (\n\
             \t\tSELECT\n\
             \t\t\tc\n\
             \t\tFROM v\n\
             \t)\n\
             )"
        );
    }

    #[test]
    fn lateral_subquery() {
        let s = PlainSelect {
            joins: vec![Join::simple(FromItem::Lateral {
                body: subquery(select(&["y"], "b")),
                alias: Some(Alias::new("l")),
            })],
            ..select(&["x"], "a")
        };
        assert_eq!(
            render(s),
            "SELECT\n\tx\nFROM a, LATERAL (\n\tSELECT\n\t\ty\n\tFROM b\n) l"
        );
    }

    #[test]
    fn table_function() {
        let s = PlainSelect {
            from_item: Some(FromItem::TableFunction {
                function: Function {
                    name: ObjectName::from("generate_series"),
                    args: vec![num(1), num(10)],
                    ..Default::default()
                },
                alias: Some(Alias::with_as("g")),
            }),
            ..select(&["g"], "ignored")
        };
        assert_eq!(render(s), "SELECT\n\tg\nFROM generate_series(1, 10) AS g");
    }

    #[test]
    fn values_list_with_column_alias() {
        let s = PlainSelect {
            from_item: Some(FromItem::Values {
                rows: vec![vec![num(1), Expression::string("a")], vec![num(2), Expression::string("b")]],
                alias: Some(Alias {
                    name: "v".to_string(),
                    columns: vec!["id".to_string(), "name".to_string()],
                    use_as: true,
                }),
            }),
            ..select(&["id"], "ignored")
        };
        assert_eq!(
            render(s),
            "SELECT\n\tid\nFROM (VALUES (1, 'a'), (2, 'b')) AS v (id, name)"
        );
    }
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

mod expressions {
    use super::*;
    use pretty_assertions::assert_eq;

    fn where_text(condition: Expression) -> String {
        let s = PlainSelect {
            where_clause: Some(condition),
            ..select(&["a"], "t")
        };
        let out = render(s);
        out.split_once("\nWHERE ")
            .map(|(_, rest)| rest.to_string())
            .expect("WHERE emitted")
    }

    #[test]
    fn in_subquery_closes_at_clause_level() {
        let condition = Expression::InSubquery {
            expr: Box::new(col("a")),
            subquery: subquery(select(&["b"], "u")),
            negated: false,
        };
        assert_eq!(where_text(condition), "a IN (\n\tSELECT\n\t\tb\n\tFROM u\n)");
    }

    #[test]
    fn not_exists() {
        let condition = Expression::Exists {
            subquery: subquery(select(&["1"], "u")),
            negated: true,
        };
        assert_eq!(where_text(condition), "NOT EXISTS (\n\tSELECT\n\t\t1\n\tFROM u\n)");
    }

    #[test]
    fn scalar_subquery_in_select_item() {
        let s = PlainSelect {
            select_items: vec![
                item(col("a")),
                SelectItem::Expression {
                    expr: Expression::Subquery(subquery(select(&["max(b)"], "u"))),
                    alias: Some(Alias::with_as("m")),
                },
            ],
            ..select(&[], "t")
        };
        assert_eq!(
            render(s),
            "SELECT\n\ta,\n\t(\n\t\tSELECT\n\t\t\tmax(b)\n\t\tFROM u\n\t) AS m\nFROM t"
        );
    }

    #[test]
    fn and_or_stay_inline() {
        let condition = Expression::binary(
            eq(col("a"), num(1)),
            BinaryOperator::And,
            Expression::Nested(Box::new(Expression::binary(
                eq(col("b"), num(2)),
                BinaryOperator::Or,
                Expression::binary(col("c"), BinaryOperator::Like, Expression::string("x%")),
            ))),
        );
        assert_eq!(where_text(condition), "a = 1 AND (b = 2 OR c LIKE 'x%')");
    }

    #[test]
    fn in_list_between_is_null() {
        let condition = Expression::binary(
            Expression::InList {
                expr: Box::new(col("a")),
                list: vec![num(1), num(2)],
                negated: true,
            },
            BinaryOperator::And,
            Expression::binary(
                Expression::Between {
                    expr: Box::new(col("b")),
                    low: Box::new(num(0)),
                    high: Box::new(Expression::Parameter(":max".to_string())),
                    negated: false,
                },
                BinaryOperator::And,
                Expression::IsNull {
                    expr: Box::new(col("c")),
                    negated: true,
                },
            ),
        );
        assert_eq!(
            where_text(condition),
            "a NOT IN (1, 2) AND b BETWEEN 0 AND :max AND c IS NOT NULL"
        );
    }

    #[test]
    fn case_cast_unary() {
        let condition = eq(
            Expression::Case {
                operand: None,
                when_clauses: vec![WhenClause {
                    condition: Expression::binary(col("x"), BinaryOperator::Gt, num(0)),
                    result: Expression::Cast {
                        expr: Box::new(col("x")),
                        data_type: "VARCHAR(10)".to_string(),
                    },
                }],
                else_result: Some(Box::new(Expression::Value(Value::Null))),
            },
            Expression::UnaryOp {
                op: UnaryOperator::Minus,
                expr: Box::new(num(1)),
            },
        );
        assert_eq!(
            where_text(condition),
            "CASE WHEN x > 0 THEN CAST(x AS VARCHAR(10)) ELSE NULL END = -1"
        );
    }

    #[test]
    fn count_distinct() {
        let condition = Expression::binary(
            Expression::Function(Function {
                name: ObjectName::from("COUNT"),
                args: vec![col("id")],
                distinct: true,
                star: false,
            }),
            BinaryOperator::GtEq,
            num(3),
        );
        assert_eq!(where_text(condition), "COUNT(DISTINCT id) >= 3");
    }
}

// =============================================================================
// SET OPERATIONS
// =============================================================================

mod set_operations {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn union_brackets_every_branch_by_default() {
        let list = union(vec![select(&["a"], "t1"), select(&["b"], "t2")]);
        assert_eq!(
            render(list),
            "(\nSELECT\n\ta\nFROM t1)\nUNION (\nSELECT\n\tb\nFROM t2)"
        );
    }

    #[test]
    fn explicit_false_suppresses_brackets() {
        let list = SetOperationList {
            brackets: Some(vec![false, false]),
            ..union(vec![select(&["a"], "t1"), select(&["b"], "t2")])
        };
        assert_eq!(
            render(list),
            "SELECT\n\ta\nFROM t1\nUNION \nSELECT\n\tb\nFROM t2"
        );
    }

    #[test]
    fn mixed_brackets_with_trailing_clauses() {
        let list = SetOperationList {
            operations: vec![SetOperator::UnionAll],
            brackets: Some(vec![true, false]),
            order_by: vec![OrderByElement::new(col("a"))],
            limit: Some(Limit {
                offset: None,
                row_count: RowCount::Number(5),
            }),
            offset: Some(Offset {
                value: RowCount::Number(10),
                unit: None,
            }),
            ..union(vec![select(&["a"], "t1"), select(&["b"], "t2")])
        };
        assert_eq!(
            render(list),
            "(\nSELECT\n\ta\nFROM t1)\nUNION ALL \nSELECT\n\tb\nFROM t2\nORDER BY a\nLIMIT 5 OFFSET 10"
        );
    }

    #[test]
    fn operators_in_sequence() {
        let list = SetOperationList {
            selects: vec![
                stmt(select(&["a"], "t1")),
                stmt(select(&["a"], "t2")),
                stmt(select(&["a"], "t3")),
                stmt(select(&["a"], "t4")),
            ],
            operations: vec![SetOperator::Intersect, SetOperator::Except, SetOperator::Minus],
            brackets: Some(vec![false; 4]),
            ..Default::default()
        };
        let out = render(list);
        let operators: Vec<&str> = out
            .lines()
            .filter(|line| !line.starts_with('\t') && !line.starts_with("SELECT") && !line.starts_with("FROM"))
            .collect();
        assert_eq!(operators, vec!["INTERSECT ", "EXCEPT ", "MINUS "]);
    }

    #[test]
    fn offset_without_limit_on_set_operation() {
        let list = SetOperationList {
            brackets: Some(vec![false]),
            offset: Some(Offset {
                value: RowCount::Number(3),
                unit: Some(RowsUnit::Row),
            }),
            fetch: Some(Fetch {
                first: false,
                row_count: None,
                unit: RowsUnit::Row,
            }),
            ..union(vec![select(&["a"], "t")])
        };
        assert_eq!(
            render(list),
            "SELECT\n\ta\nFROM t\nOFFSET 3 ROW\nFETCH NEXT ROW ONLY"
        );
    }

    #[test]
    fn union_inside_from_subquery() {
        let s = PlainSelect {
            from_item: Some(FromItem::Subquery {
                body: Box::new(union(vec![select(&["a"], "t1"), select(&["a"], "t2")]).into()),
                alias: Some(Alias::new("u")),
            }),
            ..select(&["a"], "ignored")
        };
        assert_eq!(
            render(s),
            "SELECT\n\
             \ta\n\
             FROM ((\n\
             \tSELECT\n\
             \t\ta\n\
             \tFROM t1)\n\
             \tUNION (\n\
             \tSELECT\n\
             \t\ta\n\
             \tFROM t2)\n\
             ) u"
        );
    }
}

// =============================================================================
// WITH ITEMS AND VALUES
// =============================================================================

mod with_items {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recursive_cte() {
        let item = WithItem {
            recursive: true,
            columns: vec!["id".to_string()],
            ..with_item("tree", select(&["id"], "nodes"))
        };
        assert_eq!(
            render(item),
            "RECURSIVE tree (id) AS (\n\tSELECT\n\t\tid\n\tFROM nodes\n)"
        );
    }

    #[test]
    fn plain_cte() {
        assert_eq!(
            render(with_item("recent", select(&["id"], "orders"))),
            "recent AS (\n\tSELECT\n\t\tid\n\tFROM orders\n)"
        );
    }

    #[test]
    fn query_with_two_ctes() {
        let query = Query {
            with_items: vec![
                with_item("a", select(&["x"], "t")),
                with_item("b", select(&["y"], "u")),
            ],
            body: stmt(PlainSelect {
                select_items: vec![SelectItem::AllColumns],
                from_item: Some(Table::new("a").into()),
                ..Default::default()
            }),
        };
        assert_eq!(
            sqlindent::render_query(&query, 0).unwrap(),
            "WITH\n\
             \ta AS (\n\
             \t\tSELECT\n\
             \t\t\tx\n\
             \t\tFROM t\n\
             \t),\n\
             \tb AS (\n\
             \t\tSELECT\n\
             \t\t\ty\n\
             \t\tFROM u\n\
             \t)\n\
             SELECT\n\
             \t*\n\
             FROM a"
        );
    }

    #[test]
    fn query_without_ctes_matches_body() {
        let body = stmt(select(&["a"], "t"));
        let query = Query {
            with_items: Vec::new(),
            body: body.clone(),
        };
        assert_eq!(
            sqlindent::render_query(&query, 0).unwrap(),
            sqlindent::render(&body, 0).unwrap()
        );
    }
}

mod values {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn values_statement() {
        let values = ValuesStatement {
            expressions: vec![num(1), num(2), Expression::string("x")],
        };
        assert_eq!(render(values), "VALUES (1, 2, 'x')");
    }

    #[test]
    fn values_rows() {
        let values = ValuesStatement {
            expressions: vec![
                Expression::Row(vec![num(1), Expression::Value(Value::Boolean(true))]),
                Expression::Row(vec![num(2), Expression::Value(Value::Boolean(false))]),
            ],
        };
        assert_eq!(render(values), "VALUES ((1, TRUE), (2, FALSE))");
    }

    #[test]
    fn empty_values_still_renders_brackets() {
        assert_eq!(render(ValuesStatement::default()), "VALUES ()");
    }
}

// =============================================================================
// LEVELS AND CONFIGURATION
// =============================================================================

mod levels {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initial_level_indents_every_line() {
        let out = sqlindent::render(&stmt(select(&["a"], "t")), 1).unwrap();
        assert_eq!(out, "\tSELECT\n\t\ta\n\tFROM t");
    }

    #[test]
    fn bracketed_select_at_level_one() {
        let s = stmt(PlainSelect {
            use_brackets: true,
            ..select(&["a"], "t")
        });
        let out = sqlindent::render(&s, 1).unwrap();
        assert_eq!(out, "(\n\tSELECT\n\t\ta\n\tFROM t\n)");
    }

    #[test]
    fn bracketed_select_brackets_align_above_level_one() {
        let s = stmt(PlainSelect {
            use_brackets: true,
            ..select(&["a"], "t")
        });
        let out = sqlindent::render(&s, 2).unwrap();
        assert_eq!(out, "\t(\n\t\tSELECT\n\t\t\ta\n\t\tFROM t\n\t)");
    }

    #[test]
    fn space_indentation() {
        let renderer = Renderer::new(RenderConfig::spaces(2));
        let out = renderer.render(&stmt(select(&["a", "b"], "t")), 0).unwrap();
        assert_eq!(out, "SELECT\n  a,\n  b\nFROM t");
    }

    #[test]
    fn absent_statement_is_empty() {
        assert_eq!(sqlindent::render(None::<&Statement>, 0).unwrap(), "");
        assert_eq!(Renderer::default().render(None::<&Statement>, 3).unwrap(), "");
    }

    #[test]
    fn rendering_is_deterministic() {
        let s = stmt(PlainSelect {
            joins: vec![Join::new(JoinKind::Left, Table::new("b")).on(eq(col("a.id"), col("b.id")))],
            where_clause: Some(Expression::InSubquery {
                expr: Box::new(col("a.id")),
                subquery: subquery(select(&["id"], "c")),
                negated: false,
            }),
            ..select(&["a.x"], "a")
        });
        let first = sqlindent::render(&s, 0).unwrap();
        let second = sqlindent::render(&s, 0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_renders_share_one_renderer() {
        let renderer = Renderer::default();
        let statements: Vec<Statement> = (0..8)
            .map(|i| stmt(select(&["a"], &format!("t{}", i))))
            .collect();
        let outputs: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = statements
                .iter()
                .map(|s| scope.spawn(move || renderer.render(s, 0).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for (i, out) in outputs.iter().enumerate() {
            assert_eq!(out, &format!("SELECT\n\ta\nFROM t{}", i));
        }
    }
}
