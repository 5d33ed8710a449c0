use crate::node::Node;
use crate::query::condition::{and_into, IntoCondition};
use crate::query::{
    DistinctMode, IntoNodeList, Join, JoinCondition, JoinKind, NullsOrder, OrderItem,
    SortDirection,
};

/// `(cols) | cond-node` shape accepted by the `.JOIN` family: a list of
/// shared column names (`USING (...)`) or an arbitrary predicate (`ON ...`).
pub trait IntoJoinCondition {
    fn into_join_condition(self) -> JoinCondition;
}

impl IntoJoinCondition for Vec<&str> {
    fn into_join_condition(self) -> JoinCondition {
        JoinCondition::Using(self.into_iter().map(String::from).collect())
    }
}

impl IntoJoinCondition for Node {
    fn into_join_condition(self) -> JoinCondition {
        JoinCondition::On(self)
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SelectQuery {
    pub distinct: DistinctMode,
    pub fields: Vec<Node>,
    pub from: Vec<Node>,
    pub joins: Vec<Join>,
    pub where_clause: Option<Node>,
    pub group_by: Vec<Node>,
    pub having: Option<Node>,
    pub order_by: Vec<OrderItem>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl SelectQuery {
    pub fn new(fields: impl IntoNodeList) -> Self {
        Self {
            fields: fields.into_nodes(),
            ..Default::default()
        }
    }

    #[allow(non_snake_case)]
    pub fn FIELD(mut self, field: impl IntoNodeList) -> Self {
        self.fields.extend(field.into_nodes());
        self
    }

    /// `.DISTINCT()` sets the flag alone; `.DISTINCT(fields)` sets the
    /// flag and also appends `fields` to the projection list, same as
    /// `.FIELD(fields)` would.
    #[allow(non_snake_case)]
    pub fn DISTINCT(mut self, fields: impl IntoNodeList) -> Self {
        self.distinct = DistinctMode::Simple;
        self.fields.extend(fields.into_nodes());
        self
    }

    /// Postgres `DISTINCT ON (...)`, deduplicates by the given
    /// expressions rather than the whole row, independent of the
    /// projection list.
    #[allow(non_snake_case)]
    pub fn DISTINCT_ON(mut self, fields: impl IntoNodeList) -> Self {
        self.distinct = DistinctMode::On(fields.into_nodes());
        self
    }

    #[allow(non_snake_case)]
    pub fn FROM(mut self, tables: impl IntoNodeList) -> Self {
        self.from.extend(tables.into_nodes());
        self
    }

    #[allow(non_snake_case)]
    pub fn WHERE(mut self, cond: impl IntoCondition) -> Self {
        and_into(&mut self.where_clause, cond.into_condition());
        self
    }

    #[allow(non_snake_case)]
    pub fn HAVING(mut self, cond: impl IntoCondition) -> Self {
        and_into(&mut self.having, cond.into_condition());
        self
    }

    #[allow(non_snake_case)]
    pub fn GROUP_BY(mut self, exprs: impl IntoNodeList) -> Self {
        self.group_by.extend(exprs.into_nodes());
        self
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

    fn join(mut self, kind: JoinKind, table: &str, condition: Option<JoinCondition>) -> Self {
        self.joins.push(Join {
            kind,
            table: Node::Column(vec![table.to_string()]),
            condition,
        });
        self
    }

    #[allow(non_snake_case)]
    pub fn CROSS_JOIN(self, table: &str) -> Self {
        self.join(JoinKind::Cross, table, None)
    }

    #[allow(non_snake_case)]
    pub fn INNER_JOIN(self, table: &str, cond: impl IntoJoinCondition) -> Self {
        self.join(JoinKind::Inner, table, Some(cond.into_join_condition()))
    }

    #[allow(non_snake_case)]
    pub fn LEFT_JOIN(self, table: &str, cond: impl IntoJoinCondition) -> Self {
        self.join(JoinKind::LeftOuter, table, Some(cond.into_join_condition()))
    }

    #[allow(non_snake_case)]
    pub fn RIGHT_JOIN(self, table: &str, cond: impl IntoJoinCondition) -> Self {
        self.join(
            JoinKind::RightOuter,
            table,
            Some(cond.into_join_condition()),
        )
    }
}
