//! The query AST: a single tagged enum with one variant per node kind,
//! mirroring the "discriminated union with per-kind compile logic" shape
//! rather than a class hierarchy.

use crate::query::{Combined, Query};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LogicalKind {
    And,
    Or,
}

/// The segment(s) passed to `COL(...)`. A single `Column` node carries
/// 1..N path segments that are escaped (and dot-split) independently, so
/// this is deliberately distinct from [`crate::query::IntoNodeList`],
/// which builds a *list* of separate nodes.
pub trait IntoColumnParts {
    fn into_parts(self) -> Vec<String>;
}

impl IntoColumnParts for &str {
    fn into_parts(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoColumnParts for String {
    fn into_parts(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoColumnParts for Vec<&str> {
    fn into_parts(self) -> Vec<String> {
        self.into_iter().map(String::from).collect()
    }
}

impl<const N: usize> IntoColumnParts for [&str; N] {
    fn into_parts(self) -> Vec<String> {
        self.into_iter().map(String::from).collect()
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OperatorNode {
    pub op: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LogicalGroupNode {
    pub kind: LogicalKind,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FuncNode {
    pub name: String,
    pub args: Vec<Node>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AliasedNode {
    pub inner: Box<Node>,
    pub alias: String,
}

/// Any element of the query AST.
///
/// Nodes are immutable once built; the only mutation that happens is
/// inside the fluent builder methods on [`Query`]/[`Combined`] before a
/// tree is handed to the compiler.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Node {
    /// An opaque, unescaped SQL fragment spliced in verbatim.
    Raw(String),
    /// A dotted identifier path; segments are escaped independently.
    Column(Vec<String>),
    /// A host value compiled through the general escaper dispatch.
    Value(Value),
    /// A host value forced through `ARRAY[...]` encoding.
    ArrayValue(Value),
    /// A host value forced through quoted-JSON encoding.
    JsonValue(Value),
    Operator(OperatorNode),
    LogicalGroup(LogicalGroupNode),
    Func(FuncNode),
    Aliased(AliasedNode),
    Query(Box<Query>),
    Combined(Box<Combined>),
}

impl Node {
    /// Build a binary `Operator` node.
    pub fn operator(op: impl Into<String>, left: Node, right: Node) -> Node {
        Node::Operator(OperatorNode {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Wrap `self` so it emits `... AS "name"` in a projection context.
    pub fn alias(self, name: impl Into<String>) -> Node {
        Node::Aliased(AliasedNode {
            inner: Box::new(self),
            alias: name.into(),
        })
    }

    /// `self IN (v1, v2, ...)` sugar: constructs an `Operator("IN", ...)`
    /// whose right side is a parenthesized, flattened literal list rather
    /// than an `ARRAY[...]` literal.
    pub fn is_in<T: Into<Value>>(self, values: Vec<T>) -> Node {
        let items = values.into_iter().map(Into::into).collect();
        Node::Operator(OperatorNode {
            op: "IN".to_string(),
            left: Box::new(self),
            right: Box::new(Node::ArrayValue(Value::Array(items))),
        })
    }

    /// `self = value` sugar, built on top of the general `OP()` primitive
    /// rather than replacing it.
    pub fn eq(self, value: impl Into<Node>) -> Node {
        Node::operator("=", self, value.into())
    }

    /// `self <> value` sugar.
    pub fn ne(self, value: impl Into<Node>) -> Node {
        Node::operator("<>", self, value.into())
    }

    /// `self > value` sugar.
    pub fn gt(self, value: impl Into<Node>) -> Node {
        Node::operator(">", self, value.into())
    }

    /// `self >= value` sugar.
    pub fn gte(self, value: impl Into<Node>) -> Node {
        Node::operator(">=", self, value.into())
    }

    /// `self < value` sugar.
    pub fn lt(self, value: impl Into<Node>) -> Node {
        Node::operator("<", self, value.into())
    }

    /// `self <= value` sugar.
    pub fn lte(self, value: impl Into<Node>) -> Node {
        Node::operator("<=", self, value.into())
    }
}

impl<T: Into<Value>> From<T> for Node {
    fn from(value: T) -> Self {
        Node::Value(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{COL, VAL};

    #[test]
    fn alias_wraps_inner_node() {
        let n = COL("a").alias("b");
        match n {
            Node::Aliased(a) => {
                assert_eq!(a.alias, "b");
                assert!(matches!(*a.inner, Node::Column(_)));
            }
            _ => panic!("expected Aliased"),
        }
    }

    #[test]
    fn is_in_builds_array_operator() {
        let n = COL("a").is_in(vec![1, 2, 3]);
        match n {
            Node::Operator(op) => {
                assert_eq!(op.op, "IN");
                assert!(matches!(*op.right, Node::ArrayValue(Value::Array(_))));
            }
            _ => panic!("expected Operator"),
        }
    }

    #[test]
    fn literal_conversion() {
        let n: Node = 42.into();
        assert!(matches!(n, Node::Value(Value::Int(42))));
        let n = VAL("hi");
        assert!(matches!(n, Node::Value(Value::String(_))));
    }

    #[test]
    fn comparison_sugar_matches_op() {
        let n = COL("a").eq(1);
        assert!(matches!(&n, Node::Operator(op) if op.op == "="));
        let n = COL("a").ne(1);
        assert!(matches!(&n, Node::Operator(op) if op.op == "<>"));
        let n = COL("a").gte(1);
        assert!(matches!(&n, Node::Operator(op) if op.op == ">="));
    }
}
