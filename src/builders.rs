//! Top-level factory functions: the only construction surface applications
//! use. Names are kept upper-case to match the SQL keywords they stand in
//! for, per the external interface these mirror.

use crate::node::{FuncNode, IntoColumnParts, LogicalGroupNode, LogicalKind, Node};
use crate::query::{Combined, DeleteQuery, InsertQuery, IntoNodeList, SelectQuery, SetOp, UpdateQuery};
use crate::value::Value;

#[allow(non_snake_case)]
pub fn SELECT(fields: impl IntoNodeList) -> SelectQuery {
    SelectQuery::new(fields)
}

#[allow(non_snake_case)]
pub fn INSERT(table: &str) -> InsertQuery {
    InsertQuery::new().INTO(table)
}

#[allow(non_snake_case)]
pub fn UPDATE(table: &str) -> UpdateQuery {
    UpdateQuery::new(table)
}

#[allow(non_snake_case)]
pub fn DELETE() -> DeleteQuery {
    DeleteQuery::new()
}

#[allow(non_snake_case)]
pub fn UNION(members: impl IntoNodeList) -> Combined {
    Combined::new(SetOp::Union, members)
}

#[allow(non_snake_case)]
pub fn UNION_ALL(members: impl IntoNodeList) -> Combined {
    Combined::new(SetOp::UnionAll, members)
}

#[allow(non_snake_case)]
pub fn INTERSECT(members: impl IntoNodeList) -> Combined {
    Combined::new(SetOp::Intersect, members)
}

#[allow(non_snake_case)]
pub fn INTERSECT_ALL(members: impl IntoNodeList) -> Combined {
    Combined::new(SetOp::IntersectAll, members)
}

#[allow(non_snake_case)]
pub fn EXCEPT(members: impl IntoNodeList) -> Combined {
    Combined::new(SetOp::Except, members)
}

#[allow(non_snake_case)]
pub fn EXCEPT_ALL(members: impl IntoNodeList) -> Combined {
    Combined::new(SetOp::ExceptAll, members)
}

/// Column/identifier path reference. Accepts one name, several path
/// segments, or the bare wildcard `"*"`.
#[allow(non_snake_case)]
pub fn COL(parts: impl IntoColumnParts) -> Node {
    Node::Column(parts.into_parts())
}

#[allow(non_snake_case)]
pub fn VAL(value: impl Into<Value>) -> Node {
    Node::Value(value.into())
}

#[allow(non_snake_case)]
pub fn ARRAY_VAL(value: impl Into<Value>) -> Node {
    Node::ArrayValue(value.into())
}

#[allow(non_snake_case)]
pub fn JSON_VAL(value: impl Into<Value>) -> Node {
    Node::JsonValue(value.into())
}

#[allow(non_snake_case)]
pub fn AND(children: Vec<Node>) -> Node {
    Node::LogicalGroup(LogicalGroupNode {
        kind: LogicalKind::And,
        children,
    })
}

#[allow(non_snake_case)]
pub fn OR(children: Vec<Node>) -> Node {
    Node::LogicalGroup(LogicalGroupNode {
        kind: LogicalKind::Or,
        children,
    })
}

#[allow(non_snake_case)]
pub fn OP(left: impl Into<Node>, op: &str, right: impl Into<Node>) -> Node {
    Node::operator(op, left.into(), right.into())
}

/// An opaque SQL fragment spliced in verbatim, the builder's escape
/// hatch for constructs the node hierarchy has no typed shape for.
#[allow(non_snake_case)]
pub fn RAW(text: impl Into<String>) -> Node {
    Node::Raw(text.into())
}

#[allow(non_snake_case)]
pub fn MIN(expr: impl Into<Node>) -> Node {
    Node::Func(FuncNode {
        name: "MIN".to_string(),
        args: vec![expr.into()],
    })
}

#[allow(non_snake_case)]
pub fn MAX(expr: impl Into<Node>) -> Node {
    Node::Func(FuncNode {
        name: "MAX".to_string(),
        args: vec![expr.into()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn col_accepts_single_and_multi_part() {
        assert!(matches!(COL("a"), Node::Column(p) if p == vec!["a".to_string()]));
    }

    #[test]
    fn op_builds_operator_node() {
        let n = OP(COL("a"), "+", 1);
        assert!(matches!(n, Node::Operator(_)));
    }

    #[test]
    fn raw_wraps_fragment_verbatim() {
        assert!(matches!(RAW("now()"), Node::Raw(s) if s == "now()"));
    }
}
