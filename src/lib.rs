//! AST-native PostgreSQL query builder, type-safe expressions, zero SQL
//! strings.
//!
//! Build a query by combining node-returning factory calls into a tree,
//! then [`compile`] it to a single SQL string:
//!
//! ```
//! use sqlforge::prelude::*;
//!
//! let sql = compile(SELECT(vec!["a", "b"]).FROM("x").WHERE(("a", "IN", vec![1, 2]))).unwrap();
//! assert_eq!(sql, r#"SELECT "a", "b" FROM "x" WHERE "a" IN (1, 2)"#);
//! ```

mod compile;
mod escape;
mod substitute;

pub mod builders;
pub mod error;
pub mod node;
pub mod query;
pub mod value;

pub use compile::compile_node;
pub use error::{Error, Result};
pub use escape::{escape_identifier, escape_value};
pub use node::Node;
pub use substitute::substitute;
pub use value::Value;

/// Compile any node (or anything that converts into one, a bare
/// `SelectQuery`/`InsertQuery`/.../`Combined`) into its SQL text.
pub fn compile(node: impl Into<Node>) -> Result<String> {
    compile_node(&node.into())
}

pub mod prelude {
    pub use crate::builders::*;
    pub use crate::error::{Error, Result};
    pub use crate::node::Node;
    pub use crate::query::{AssignmentValue, NullsOrder, SortDirection};
    pub use crate::value::Value;
    pub use crate::{compile, escape_identifier, escape_value, substitute};
}
