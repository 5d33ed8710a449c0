use crate::node::Node;
use crate::query::condition::{and_into, IntoCondition};
use crate::query::insert::AssignmentValue;
use crate::query::IntoNodeList;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateQuery {
    pub table: Option<Node>,
    pub assignments: Vec<(String, AssignmentValue)>,
    pub where_clause: Option<Node>,
    pub returning: Vec<Node>,
}

impl UpdateQuery {
    pub fn new(table: &str) -> Self {
        Self {
            table: Some(Node::Column(vec![table.to_string()])),
            ..Default::default()
        }
    }

    /// Append assignments from an ordered `(column, value)` mapping.
    #[allow(non_snake_case)]
    pub fn VALUES(mut self, assignments: Vec<(&str, AssignmentValue)>) -> Self {
        self.assignments
            .extend(assignments.into_iter().map(|(k, v)| (k.to_string(), v)));
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
