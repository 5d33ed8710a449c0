//! Normalizes the heterogeneous shapes accepted by `.WHERE()`/`.HAVING()`
//! into a single boolean [`Node`], and folds repeated calls together with
//! `AND` rather than nesting nodes pointlessly.

use crate::node::{LogicalGroupNode, LogicalKind, Node};

/// Anything that can appear as a `.WHERE(...)`/`.HAVING(...)` argument:
/// `(col, op, val)`, `(col, val)` (op defaults to `=`), an ordered mapping
/// of column/value pairs (all ANDed with `=`), or a bare expression node.
pub trait IntoCondition {
    fn into_condition(self) -> Node;
}

impl IntoCondition for Node {
    fn into_condition(self) -> Node {
        self
    }
}

impl<V: Into<Node>> IntoCondition for (&str, &str, V) {
    fn into_condition(self) -> Node {
        let (col, op, val) = self;
        Node::operator(op, Node::Column(vec![col.to_string()]), val.into())
    }
}

impl<V: Into<Node>> IntoCondition for (&str, V) {
    fn into_condition(self) -> Node {
        let (col, val) = self;
        Node::operator("=", Node::Column(vec![col.to_string()]), val.into())
    }
}

impl<V: Into<Node> + Clone> IntoCondition for Vec<(&str, V)> {
    fn into_condition(self) -> Node {
        let children = self
            .into_iter()
            .map(|(col, val)| {
                Node::operator("=", Node::Column(vec![col.to_string()]), val.into())
            })
            .collect();
        Node::LogicalGroup(LogicalGroupNode {
            kind: LogicalKind::And,
            children,
        })
    }
}

/// Fold `new` into `*slot` with `AND`, flattening into an existing `AND`
/// group instead of nesting a fresh one every call.
pub(crate) fn and_into(slot: &mut Option<Node>, new: Node) {
    *slot = Some(match slot.take() {
        None => new,
        Some(Node::LogicalGroup(mut group)) if group.kind == LogicalKind::And => {
            group.children.push(new);
            Node::LogicalGroup(group)
        }
        Some(existing) => Node::LogicalGroup(LogicalGroupNode {
            kind: LogicalKind::And,
            children: vec![existing, new],
        }),
    });
}
