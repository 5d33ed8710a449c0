//! Compiles a [`Node`] tree into PostgreSQL SQL text.
//!
//! Mirrors the AST one module at a time: this file holds the shared
//! expression dispatch (operators, precedence, functions, logical
//! groups); [`select`], [`insert`], [`update`], [`delete`] and
//! [`combined`] each compile their own statement kind, the way the
//! grounding crate splits its DML transpiler by statement.

mod combined;
mod delete;
mod insert;
mod select;
mod update;

use crate::error::{Error, Result};
use crate::escape::{escape_identifier, escape_value};
use crate::node::{LogicalKind, Node};
use crate::query::Query;

/// Compile any node to its SQL text. Deterministic and side-effect-free:
/// calling it twice on the same tree yields byte-identical output.
pub fn compile_node(node: &Node) -> Result<String> {
    compile(node, true)
}

/// Recurse into an operand position, where an `Aliased` wrapper's alias
/// is not re-emitted (aliases only survive in projection lists) and a
/// `Query` used as a subexpression is always parenthesized, per the
/// "Query operands do parenthesize when used as subexpressions" rule.
pub(crate) fn compile_operand(node: &Node) -> Result<String> {
    if let Node::Query(query) = node {
        return Ok(format!("({})", compile_query(query)?));
    }
    compile(node, false)
}

fn compile(node: &Node, preserve_alias: bool) -> Result<String> {
    match node {
        Node::Aliased(a) => {
            let inner = compile_operand(&a.inner)?;
            if preserve_alias {
                Ok(format!("{} AS {}", inner, escape_identifier(&[a.alias.as_str()])?))
            } else {
                Ok(inner)
            }
        }
        Node::Raw(text) => Ok(text.clone()),
        Node::Column(parts) => {
            if parts.iter().all(|p| p.is_empty()) {
                Ok(String::new())
            } else {
                escape_identifier(parts)
            }
        }
        Node::Value(v) => escape_value(v),
        Node::ArrayValue(v) => crate::escape::escape_array_value(v),
        Node::JsonValue(v) => crate::escape::escape_json_value(v),
        Node::Operator(op) => compile_operator(op),
        Node::LogicalGroup(group) => compile_logical_group(group),
        Node::Func(func) => {
            let args: Result<Vec<String>> = func.args.iter().map(compile_operand).collect();
            Ok(format!("{}({})", func.name, args?.join(", ")))
        }
        Node::Query(query) => compile_query(query),
        // Reached only when a Combined is compiled directly (the root
        // of the whole call) or embedded somewhere other than a sibling
        // member slot; member-position nesting is special-cased in
        // `combined::compile_members`, which always parenthesizes.
        Node::Combined(c) => combined::compile_combined(c, true),
    }
}

fn compile_query(query: &Query) -> Result<String> {
    match query {
        Query::Select(q) => select::compile_select(q),
        Query::Insert(q) => insert::compile_insert(q),
        Query::Update(q) => update::compile_update(q),
        Query::Delete(q) => delete::compile_delete(q),
    }
}

/// Symbol → precedence, higher binds tighter. Only covers binary
/// `Operator` nodes; `AND`/`OR` are `LogicalGroup`s and sit below all of
/// these by construction (see [`compile_logical_group`]).
fn precedence(op: &str) -> u8 {
    match op {
        "*" | "/" | "%" => 5,
        "+" | "-" => 4,
        "=" | "<>" | "!=" | "<" | "<=" | ">" | ">=" => 3,
        "IN" => 2,
        _ => 1,
    }
}

fn compile_operator(op: &crate::node::OperatorNode) -> Result<String> {
    if op.op == "IN" {
        return compile_in(op);
    }

    let left = compile_parenthesized_operand(&op.left, precedence(&op.op))?;
    let right = compile_parenthesized_operand(&op.right, precedence(&op.op))?;
    Ok(format!("{left} {} {right}", op.op))
}

fn compile_parenthesized_operand(node: &Node, outer_precedence: u8) -> Result<String> {
    let text = compile_operand(node)?;
    if let Node::Operator(inner) = node {
        if precedence(&inner.op) <= outer_precedence {
            return Ok(format!("({text})"));
        }
    }
    Ok(text)
}

fn compile_in(op: &crate::node::OperatorNode) -> Result<String> {
    let left = compile_operand(&op.left)?;
    // Both the `.IN(...)` sugar (which wraps values in `ArrayValue`) and a
    // plain `.WHERE(col, "IN", list)` tuple (whose list becomes a bare
    // `Value::Array`) must render as a flattened, parenthesized CSV,
    // never as an `ARRAY[...]` literal.
    let items = match op.right.as_ref() {
        Node::ArrayValue(crate::value::Value::Array(items)) => Some(items),
        Node::Value(crate::value::Value::Array(items)) => Some(items),
        _ => None,
    };
    let csv = match items {
        Some(items) => {
            let rendered: Result<Vec<String>> = items.iter().map(escape_value).collect();
            rendered?.join(", ")
        }
        // A subquery target (`col IN (SELECT ...)`) must not be double-
        // parenthesized: `compile_in` already supplies the enclosing
        // `(...)`, so compile the query bare rather than going through
        // `compile_operand`'s subquery-parenthesizing path.
        None => match op.right.as_ref() {
            Node::Query(q) => compile_query(q)?,
            other => compile_operand(other)?,
        },
    };
    Ok(format!("{left} IN ({csv})"))
}

fn compile_logical_group(group: &crate::node::LogicalGroupNode) -> Result<String> {
    if group.children.is_empty() {
        return Err(Error::query_shape("AND/OR group with zero children"));
    }
    let keyword = match group.kind {
        LogicalKind::And => " AND ",
        LogicalKind::Or => " OR ",
    };
    let rendered: Result<Vec<String>> = group
        .children
        .iter()
        .map(|child| match child {
            Node::LogicalGroup(_) => Ok(format!("({})", compile_operand(child)?)),
            _ => compile_operand(child),
        })
        .collect();
    Ok(rendered?.join(keyword))
}

/// Renders an `ORDER BY` item list shared by `SELECT` and `Combined`.
pub(crate) fn compile_order_by(items: &[crate::query::OrderItem]) -> Result<String> {
    let rendered: Result<Vec<String>> = items
        .iter()
        .map(|item| {
            let mut text = compile_operand(&item.expr)?;
            match item.direction {
                Some(crate::query::SortDirection::Asc) => text.push_str(" ASC"),
                Some(crate::query::SortDirection::Desc) => text.push_str(" DESC"),
                None => {}
            }
            match item.nulls {
                Some(crate::query::NullsOrder::First) => text.push_str(" NULLS FIRST"),
                Some(crate::query::NullsOrder::Last) => text.push_str(" NULLS LAST"),
                None => {}
            }
            Ok(text)
        })
        .collect();
    Ok(rendered?.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{COL, OP, SELECT};

    #[test]
    fn query_in_in_list_is_parenthesized_once() {
        let n = COL("id").is_in(Vec::<i64>::new());
        // sanity: empty IN list still renders the (possibly empty) CSV form
        assert_eq!(compile_node(&n).unwrap(), r#""id" IN ()"#);

        let n = Node::operator("IN", COL("id"), SELECT("id").FROM("active_users").into());
        assert_eq!(
            compile_node(&n).unwrap(),
            r#""id" IN (SELECT "id" FROM "active_users")"#
        );
    }

    #[test]
    fn subquery_operand_is_parenthesized() {
        let n = Node::operator("=", COL("id"), SELECT("id").FROM("x").LIMIT(1).into());
        assert_eq!(
            compile_node(&n).unwrap(),
            r#""id" = (SELECT "id" FROM "x" LIMIT 1)"#
        );
    }

    #[test]
    fn division_parenthesizes_addition() {
        let n = OP(COL("a"), "/", OP(COL("b"), "+", 1));
        assert_eq!(compile_node(&n).unwrap(), r#""a" / ("b" + 1)"#);
    }

    #[test]
    fn addition_does_not_parenthesize_multiplication() {
        let n = OP(COL("a"), "+", OP(COL("b"), "*", 2));
        assert_eq!(compile_node(&n).unwrap(), r#""a" + "b" * 2"#);
    }

    #[test]
    fn same_precedence_operands_parenthesize_on_either_side() {
        // The precedence rule ("lower or equal wraps") applies uniformly
        // to both operands, so a same-precedence nested Operator always
        // parenthesizes regardless of which side it's on.
        let left_nested = OP(OP(COL("a"), "-", COL("b")), "-", COL("c"));
        assert_eq!(compile_node(&left_nested).unwrap(), r#"("a" - "b") - "c""#);

        let right_nested = OP(COL("a"), "-", OP(COL("b"), "-", COL("c")));
        assert_eq!(compile_node(&right_nested).unwrap(), r#""a" - ("b" - "c")"#);
    }
}
