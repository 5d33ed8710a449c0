//! Statement builders: `SELECT`/`INSERT`/`UPDATE`/`DELETE` and the
//! combined set-operation node, each a fluent value that accumulates into
//! owned lists and converts into a [`Node`] for compilation.

pub mod combined;
pub mod condition;
pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

pub use combined::{Combined, SetOp};
pub use condition::IntoCondition;
pub use delete::DeleteQuery;
pub use insert::{AssignmentValue, ConflictAction, InsertQuery, OnConflict};
pub use select::SelectQuery;
pub use update::UpdateQuery;

use crate::node::Node;

/// The statement stored inside a `Node::Query`, one variant per kind in
/// the data model, each carrying its own clause struct.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Query {
    Select(SelectQuery),
    Insert(InsertQuery),
    Update(UpdateQuery),
    Delete(DeleteQuery),
}

impl From<SelectQuery> for Node {
    fn from(q: SelectQuery) -> Self {
        Node::Query(Box::new(Query::Select(q)))
    }
}

impl From<InsertQuery> for Node {
    fn from(q: InsertQuery) -> Self {
        Node::Query(Box::new(Query::Insert(q)))
    }
}

impl From<UpdateQuery> for Node {
    fn from(q: UpdateQuery) -> Self {
        Node::Query(Box::new(Query::Update(q)))
    }
}

impl From<DeleteQuery> for Node {
    fn from(q: DeleteQuery) -> Self {
        Node::Query(Box::new(Query::Delete(q)))
    }
}

impl From<Combined> for Node {
    fn from(c: Combined) -> Self {
        Node::Combined(Box::new(c))
    }
}

/// One `.JOIN`-family clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum JoinKind {
    Cross,
    Inner,
    LeftOuter,
    RightOuter,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum JoinCondition {
    Using(Vec<String>),
    On(Node),
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Join {
    pub kind: JoinKind,
    pub table: Node,
    pub condition: Option<JoinCondition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NullsOrder {
    First,
    Last,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OrderItem {
    pub expr: Node,
    pub direction: Option<SortDirection>,
    pub nulls: Option<NullsOrder>,
}

impl OrderItem {
    pub fn new(expr: Node, direction: Option<SortDirection>, nulls: Option<NullsOrder>) -> Self {
        Self {
            expr,
            direction,
            nulls,
        }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub enum DistinctMode {
    #[default]
    None,
    Simple,
    On(Vec<Node>),
}

/// What `.SELECT(...)`/`.FIELD(...)`/`.FROM(...)`/`.GROUP_BY(...)`/
/// `.RETURNING(...)` all accept: a single name, a list of names, a bare
/// expression node, a list of nodes, or (SELECT's projection mapping
/// shape) an ordered list of `(alias, value)` pairs.
pub trait IntoNodeList {
    fn into_nodes(self) -> Vec<Node>;
}

impl IntoNodeList for () {
    fn into_nodes(self) -> Vec<Node> {
        Vec::new()
    }
}

impl IntoNodeList for &str {
    fn into_nodes(self) -> Vec<Node> {
        vec![Node::Column(vec![self.to_string()])]
    }
}

impl IntoNodeList for String {
    fn into_nodes(self) -> Vec<Node> {
        vec![Node::Column(vec![self])]
    }
}

impl IntoNodeList for Node {
    fn into_nodes(self) -> Vec<Node> {
        vec![self]
    }
}

impl IntoNodeList for Vec<&str> {
    fn into_nodes(self) -> Vec<Node> {
        self.into_iter()
            .map(|s| Node::Column(vec![s.to_string()]))
            .collect()
    }
}

impl<const N: usize> IntoNodeList for [&str; N] {
    fn into_nodes(self) -> Vec<Node> {
        self.into_iter()
            .map(|s| Node::Column(vec![s.to_string()]))
            .collect()
    }
}

impl IntoNodeList for Vec<String> {
    fn into_nodes(self) -> Vec<Node> {
        self.into_iter().map(|s| Node::Column(vec![s])).collect()
    }
}

impl IntoNodeList for Vec<Node> {
    fn into_nodes(self) -> Vec<Node> {
        self
    }
}

/// Value side of a `SELECT` projection-mapping entry: `true` selects the
/// key itself as a bare column, a string aliases that column, a node
/// aliases an arbitrary expression.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum SelectMapValue {
    Bare,
    Column(String),
    Expr(Node),
}

impl From<bool> for SelectMapValue {
    fn from(_: bool) -> Self {
        SelectMapValue::Bare
    }
}

impl From<&str> for SelectMapValue {
    fn from(value: &str) -> Self {
        SelectMapValue::Column(value.to_string())
    }
}

impl From<String> for SelectMapValue {
    fn from(value: String) -> Self {
        SelectMapValue::Column(value)
    }
}

impl From<Node> for SelectMapValue {
    fn from(value: Node) -> Self {
        SelectMapValue::Expr(value)
    }
}

impl IntoNodeList for Vec<(&str, SelectMapValue)> {
    fn into_nodes(self) -> Vec<Node> {
        self.into_iter()
            .map(|(key, value)| match value {
                SelectMapValue::Bare => Node::Column(vec![key.to_string()]),
                SelectMapValue::Column(col) => Node::Column(vec![col]).alias(key),
                SelectMapValue::Expr(expr) => expr.alias(key),
            })
            .collect()
    }
}
