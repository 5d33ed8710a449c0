//! The testable properties named in the builder's design notes: compile
//! idempotence, whitespace normalization, identifier round-trip, numeric
//! fidelity, and placeholder conservation.

use sqlforge::prelude::*;

fn normalize(sql: &str) -> String {
    sql.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end_matches(';')
        .to_string()
}

#[test]
fn compile_is_byte_for_byte_idempotent() {
    let build = || {
        SELECT(["a", "b"])
            .FROM("x")
            .WHERE(("a", ">", 1))
            .ORDER_BY(COL("a"), Some(SortDirection::Asc), None)
    };
    let first = compile(build()).unwrap();
    let second = compile(build()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn whitespace_normalization_is_stable() {
    let sql = compile(SELECT("a").FROM("x")).unwrap();
    assert_eq!(normalize(&sql), normalize(&format!("  {sql}  ;")));
}

#[test]
fn identifier_round_trips_plain_names() {
    for name in ["a", "column_name", "MixedCase", "with123digits"] {
        assert_eq!(escape_identifier(&[name]).unwrap(), format!("\"{name}\""));
    }
}

#[test]
fn numeric_values_parse_back_to_the_same_number() {
    for n in [0i64, 1, -1, 42, i64::MAX, i64::MIN] {
        let rendered = escape_value(&Value::Int(n)).unwrap();
        assert_eq!(rendered.parse::<i64>().unwrap(), n);
    }
    for f in [0.0f64, 1.5, -1.5, 3.14159] {
        let rendered = escape_value(&Value::Float(f)).unwrap();
        assert_eq!(rendered.parse::<f64>().unwrap(), f);
    }
}

#[test]
fn placeholder_conservation_question_marks() {
    let values = vec![Value::Int(1), Value::Int(2), Value::Int(3)];
    let result = substitute("? + ? + ?", &values).unwrap();
    assert_eq!(result, "1 + 2 + 3");
}

#[test]
fn placeholder_conservation_dollar_indices_reference_exact_slot() {
    let values = vec![Value::String("first".into()), Value::String("second".into())];
    let result = substitute("$1 || $2 || $1", &values).unwrap();
    assert_eq!(result, "'first' || 'second' || 'first'");
}

#[test]
fn extra_placeholders_beyond_supplied_values_error() {
    let err = substitute("?, ?, ?", &[Value::Int(1)]).unwrap_err();
    assert!(matches!(err, Error::MissingBind { .. }));
}
