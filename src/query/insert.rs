use crate::node::Node;
use crate::query::IntoNodeList;
use crate::value::Value;

/// A single `VALUES` mapping entry's right-hand side: either a literal
/// (escaped by the compiler) or an arbitrary expression embedded as-is.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum AssignmentValue {
    Literal(Value),
    Expr(Node),
}

impl AssignmentValue {
    pub(crate) fn into_node(self) -> Node {
        match self {
            AssignmentValue::Literal(v) => Node::Value(v),
            AssignmentValue::Expr(n) => n,
        }
    }
}

impl<T: Into<Value>> From<T> for AssignmentValue {
    fn from(value: T) -> Self {
        AssignmentValue::Literal(value.into())
    }
}

/// `INSERT ... ON CONFLICT` clause.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OnConflict {
    pub target: Vec<String>,
    pub action: ConflictAction,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum ConflictAction {
    DoNothing,
    DoUpdate(Vec<(String, AssignmentValue)>),
}

/// `(row | row[])` for `.VALUES(...)`: either one row or several, all
/// sharing the same column order.
pub trait IntoRows {
    fn into_rows(self) -> Vec<Vec<(String, AssignmentValue)>>;
}

impl IntoRows for Vec<(&str, AssignmentValue)> {
    fn into_rows(self) -> Vec<Vec<(String, AssignmentValue)>> {
        vec![self
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()]
    }
}

impl IntoRows for Vec<Vec<(&str, AssignmentValue)>> {
    fn into_rows(self) -> Vec<Vec<(String, AssignmentValue)>> {
        self.into_iter()
            .map(|row| row.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
            .collect()
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct InsertQuery {
    pub table: Option<Node>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Node>>,
    pub returning: Vec<Node>,
    pub on_conflict: Option<OnConflict>,
    /// Set when a row passed to `.VALUES()` named a different column set
    /// (or order) than the first row; surfaced as `Error::QueryShape`
    /// from `compile_insert` rather than asserted here, since `.VALUES()`
    /// returns `Self` and has no way to fail eagerly.
    pub column_mismatch: bool,
}

impl InsertQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(non_snake_case)]
    pub fn INTO(mut self, table: &str) -> Self {
        self.table = Some(Node::Column(vec![table.to_string()]));
        self
    }

    /// Append one row, or several rows at once, validating that every
    /// row names the same columns in the same order.
    #[allow(non_snake_case)]
    pub fn VALUES(mut self, rows: impl IntoRows) -> Self {
        for row in rows.into_rows() {
            let columns: Vec<String> = row.iter().map(|(k, _)| k.clone()).collect();
            if self.columns.is_empty() {
                self.columns = columns;
            } else if self.columns != columns {
                self.column_mismatch = true;
            }
            self.rows
                .push(row.into_iter().map(|(_, v)| v.into_node()).collect());
        }
        self
    }

    #[allow(non_snake_case)]
    pub fn RETURNING(mut self, cols: impl IntoNodeList) -> Self {
        self.returning.extend(cols.into_nodes());
        self
    }

    #[allow(non_snake_case)]
    pub fn ON_CONFLICT_DO_NOTHING(mut self, target: Vec<&str>) -> Self {
        self.on_conflict = Some(OnConflict {
            target: target.into_iter().map(String::from).collect(),
            action: ConflictAction::DoNothing,
        });
        self
    }

    #[allow(non_snake_case)]
    pub fn ON_CONFLICT_DO_UPDATE(
        mut self,
        target: Vec<&str>,
        assignments: Vec<(&str, AssignmentValue)>,
    ) -> Self {
        self.on_conflict = Some(OnConflict {
            target: target.into_iter().map(String::from).collect(),
            action: ConflictAction::DoUpdate(
                assignments
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
            ),
        });
        self
    }
}
