use crate::node::Node;
use crate::query::{IntoNodeList, NullsOrder, OrderItem, SortDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SetOp {
    Union,
    UnionAll,
    Intersect,
    IntersectAll,
    Except,
    ExceptAll,
}

impl SetOp {
    pub fn keyword(self) -> &'static str {
        match self {
            SetOp::Union => "UNION",
            SetOp::UnionAll => "UNION ALL",
            SetOp::Intersect => "INTERSECT",
            SetOp::IntersectAll => "INTERSECT ALL",
            SetOp::Except => "EXCEPT",
            SetOp::ExceptAll => "EXCEPT ALL",
        }
    }
}

/// A tree node joining `Query`/`Combined` members with a set-operation
/// keyword. Kept as a tree (not a flat list) so that the nested-member
/// parenthesization rule falls out of the emitter's own recursion.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Combined {
    pub op: SetOp,
    pub members: Vec<Node>,
    pub order_by: Vec<OrderItem>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl Combined {
    pub fn new(op: SetOp, members: impl IntoNodeList) -> Self {
        Self {
            op,
            members: members.into_nodes(),
            order_by: Vec::new(),
            offset: None,
            limit: None,
        }
    }

    #[allow(non_snake_case)]
    pub fn ORDER_BY(
        mut self,
        expr: impl Into<Node>,
        direction: Option<SortDirection>,
        nulls: Option<NullsOrder>,
    ) -> Self {
        self.order_by
            .push(OrderItem::new(expr.into(), direction, nulls));
        self
    }

    #[allow(non_snake_case)]
    pub fn OFFSET(mut self, n: i64) -> Self {
        self.offset = Some(n);
        self
    }

    #[allow(non_snake_case)]
    pub fn LIMIT(mut self, n: i64) -> Self {
        self.limit = Some(n);
        self
    }
}
