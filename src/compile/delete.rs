use crate::compile::select::compile_returning;
use crate::compile::compile_operand;
use crate::error::{Error, Result};
use crate::query::DeleteQuery;

pub(super) fn compile_delete(q: &DeleteQuery) -> Result<String> {
    let from = q
        .from
        .as_ref()
        .ok_or_else(|| Error::query_shape("DELETE without a FROM table"))?;
    let mut out = format!("DELETE FROM {}", compile_operand(from)?);

    if let Some(where_clause) = &q.where_clause {
        out.push_str(" WHERE ");
        out.push_str(&compile_operand(where_clause)?);
    }

    if !q.returning.is_empty() {
        out.push_str(" RETURNING ");
        out.push_str(&compile_returning(&q.returning)?);
    }

    Ok(out)
}
