//! End-to-end scenarios: the concrete input/output pairs from the
//! builder surface's design notes, run against the public API.

use sqlforge::prelude::*;

#[test]
fn select_star_from_table() {
    let sql = compile(SELECT(()).FROM("x")).unwrap();
    assert_eq!(sql, r#"SELECT * FROM "x""#);
}

#[test]
fn select_field_list_with_in_condition() {
    let sql = compile(
        SELECT(["a", "b", "c"])
            .FROM("x")
            .WHERE(("a", "IN", vec![42, 23])),
    )
    .unwrap();
    assert_eq!(sql, r#"SELECT "a", "b", "c" FROM "x" WHERE "a" IN (42, 23)"#);
}

#[test]
fn update_division_parenthesizes_nested_addition() {
    let sql = compile(UPDATE("x").VALUES(vec![(
        "a",
        AssignmentValue::Expr(OP(COL("a"), "/", OP(COL("b"), "+", 1))),
    )]))
    .unwrap();
    assert_eq!(sql, r#"UPDATE "x" SET "a" = "a" / ("b" + 1)"#);
}

#[test]
fn insert_returning_mixed_scalars() {
    let sql = compile(
        INSERT("x")
            .VALUES(vec![
                ("a", AssignmentValue::from(0)),
                ("b", AssignmentValue::from(false)),
                ("c", AssignmentValue::from("String")),
            ])
            .RETURNING(["a", "b", "c"]),
    )
    .unwrap();
    assert_eq!(
        sql,
        r#"INSERT INTO "x" ("a", "b", "c") VALUES (0, FALSE, 'String') RETURNING "a", "b", "c""#
    );
}

#[test]
fn insert_multiple_rows_share_column_order() {
    let sql = compile(INSERT("x").VALUES(vec![
        vec![("a", AssignmentValue::from(1)), ("b", AssignmentValue::from("x"))],
        vec![("a", AssignmentValue::from(2)), ("b", AssignmentValue::from("y"))],
    ]))
    .unwrap();
    assert_eq!(
        sql,
        r#"INSERT INTO "x" ("a", "b") VALUES (1, 'x'), (2, 'y')"#
    );
}

#[test]
fn insert_rejects_rows_with_mismatched_column_order() {
    let err = compile(INSERT("x").VALUES(vec![
        vec![("a", AssignmentValue::from(1)), ("b", AssignmentValue::from("x"))],
        vec![("b", AssignmentValue::from("y")), ("a", AssignmentValue::from(2))],
    ]))
    .unwrap_err();
    assert!(matches!(err, Error::QueryShape(_)));
}

#[test]
fn union_of_union_nests_on_the_right() {
    let sql = compile(UNION(vec![
        SELECT("a").FROM("x").into(),
        UNION(vec![SELECT("a").FROM("y").into(), SELECT("a").FROM("z").into()]).into(),
    ]))
    .unwrap();
    assert_eq!(
        sql,
        r#"SELECT "a" FROM "x" UNION (SELECT "a" FROM "y" UNION SELECT "a" FROM "z")"#
    );
}

#[test]
fn union_of_union_nests_on_the_left() {
    let sql = compile(UNION(vec![
        UNION(vec![SELECT("a").FROM("x").into(), SELECT("a").FROM("y").into()]).into(),
        SELECT("a").FROM("z").into(),
    ]))
    .unwrap();
    assert_eq!(
        sql,
        r#"(SELECT "a" FROM "x" UNION SELECT "a" FROM "y") UNION SELECT "a" FROM "z""#
    );
}

#[test]
fn substitute_skips_embedded_doubled_quote_literal() {
    let sql = substitute(
        "a = ?, b = '?''?', c = ?",
        &[Value::Int(1), Value::Int(2)],
    )
    .unwrap();
    assert_eq!(sql, "a = 1, b = '?''?', c = 2");
}

#[test]
fn escape_value_quote_forces_estring_and_nested_arrays_stay_bare() {
    assert_eq!(
        escape_value(&Value::String("'text'".into())).unwrap(),
        "E'\\'text\\''"
    );
    let nested = Value::Array(vec![
        Value::Array(vec![Value::Int(0)]),
        Value::Array(vec![Value::Int(1)]),
    ]);
    assert_eq!(escape_value(&nested).unwrap(), "ARRAY[[0], [1]]");
}

#[test]
fn delete_with_where_and_returning() {
    let sql = compile(DELETE().FROM("users").WHERE(("id", 5)).RETURNING("id")).unwrap();
    assert_eq!(sql, r#"DELETE FROM "users" WHERE "id" = 5 RETURNING "id""#);
}

#[test]
fn select_left_join_using_and_inner_join_on_forms() {
    let sql = compile(
        SELECT("u.id")
            .FROM("users")
            .LEFT_JOIN("orders", vec!["user_id"])
            .WHERE(("u.active", true)),
    )
    .unwrap();
    assert_eq!(
        sql,
        r#"SELECT "u"."id" FROM "users" LEFT OUTER JOIN "orders" USING ("user_id") WHERE "u"."active" = TRUE"#
    );

    let sql = compile(
        SELECT("u.id")
            .FROM("users")
            .INNER_JOIN("orders", COL("orders.user_id").eq(COL("users.id"))),
    )
    .unwrap();
    assert_eq!(
        sql,
        r#"SELECT "u"."id" FROM "users" INNER JOIN "orders" ON "orders"."user_id" = "users"."id""#
    );
}

#[test]
fn select_mapping_projection_shapes() {
    use sqlforge::query::SelectMapValue;
    let sql = compile(
        SELECT(vec![
            ("id", SelectMapValue::Bare),
            ("total", SelectMapValue::Column("amount".to_string())),
            ("doubled", SelectMapValue::Expr(OP(COL("amount"), "*", 2))),
        ])
        .FROM("orders"),
    )
    .unwrap();
    assert_eq!(
        sql,
        r#"SELECT "id", "amount" AS "total", "amount" * 2 AS "doubled" FROM "orders""#
    );
}

#[test]
fn distinct_with_fields_sets_flag_and_projection() {
    let sql = compile(SELECT(()).DISTINCT(["a", "b"]).FROM("x")).unwrap();
    assert_eq!(sql, r#"SELECT DISTINCT "a", "b" FROM "x""#);
}

#[test]
fn distinct_on_deduplicates_independently_of_projection() {
    let sql = compile(SELECT("a").DISTINCT_ON(["b"]).FROM("x")).unwrap();
    assert_eq!(sql, r#"SELECT DISTINCT ON ("b") "a" FROM "x""#);
}

#[test]
fn where_mapping_shape_ands_all_keys() {
    let sql = compile(SELECT(()).FROM("x").WHERE(vec![("a", 1), ("b", 2)])).unwrap();
    assert_eq!(sql, r#"SELECT * FROM "x" WHERE "a" = 1 AND "b" = 2"#);
}

#[test]
fn repeated_where_calls_fold_into_one_and_group() {
    let sql = compile(
        SELECT(())
            .FROM("x")
            .WHERE(("a", 1))
            .WHERE(("b", 2)),
    )
    .unwrap();
    assert_eq!(sql, r#"SELECT * FROM "x" WHERE "a" = 1 AND "b" = 2"#);
}

#[test]
fn order_by_accumulates_with_direction_and_nulls() {
    let sql = compile(
        SELECT(())
            .FROM("x")
            .ORDER_BY(COL("a"), Some(SortDirection::Desc), Some(NullsOrder::Last))
            .ORDER_BY(COL("b"), None, None)
            .OFFSET(5)
            .LIMIT(10),
    )
    .unwrap();
    assert_eq!(
        sql,
        r#"SELECT * FROM "x" ORDER BY "a" DESC NULLS LAST, "b" OFFSET 5 LIMIT 10"#
    );
}

#[test]
fn combined_trailing_order_by_and_limit() {
    let sql = compile(
        UNION_ALL(vec![
            SELECT("a").FROM("x").into(),
            SELECT("a").FROM("y").into(),
        ])
        .ORDER_BY(COL("a"), None, None)
        .LIMIT(1),
    )
    .unwrap();
    assert_eq!(
        sql,
        r#"SELECT "a" FROM "x" UNION ALL SELECT "a" FROM "y" ORDER BY "a" LIMIT 1"#
    );
}

#[test]
fn compile_is_idempotent() {
    let node: sqlforge::Node = SELECT(["a"]).FROM("x").WHERE(("a", 1)).into();
    assert_eq!(compile_node(&node).unwrap(), compile_node(&node).unwrap());
}

#[test]
fn query_shape_errors_surface_from_compile() {
    let err = compile(UPDATE("x")).unwrap_err();
    assert!(matches!(err, Error::QueryShape(_)));

    let err = compile(INSERT("x")).unwrap_err();
    assert!(matches!(err, Error::QueryShape(_)));
}
