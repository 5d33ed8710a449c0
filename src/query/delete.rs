use crate::node::Node;
use crate::query::condition::{and_into, IntoCondition};
use crate::query::IntoNodeList;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct DeleteQuery {
    pub from: Option<Node>,
    pub where_clause: Option<Node>,
    pub returning: Vec<Node>,
}

impl DeleteQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(non_snake_case)]
    pub fn FROM(mut self, table: &str) -> Self {
        self.from = Some(Node::Column(vec![table.to_string()]));
        self
    }

    #[allow(non_snake_case)]
    pub fn WHERE(mut self, cond: impl IntoCondition) -> Self {
        and_into(&mut self.where_clause, cond.into_condition());
        self
    }

    #[allow(non_snake_case)]
    pub fn RETURNING(mut self, cols: impl IntoNodeList) -> Self {
        self.returning.extend(cols.into_nodes());
        self
    }
}
