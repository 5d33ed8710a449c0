use crate::compile::select::compile_returning;
use crate::compile::compile_operand;
use crate::error::{Error, Result};
use crate::escape::escape_identifier;
use crate::query::UpdateQuery;

pub(super) fn compile_update(q: &UpdateQuery) -> Result<String> {
    let table = q
        .table
        .as_ref()
        .ok_or_else(|| Error::query_shape("UPDATE without a target table"))?;
    let table = compile_operand(table)?;

    if q.assignments.is_empty() {
        return Err(Error::query_shape("UPDATE with no assignments"));
    }

    let assignments: Result<Vec<String>> = q
        .assignments
        .iter()
        .map(|(col, val)| {
            let col = escape_identifier(&[col.as_str()])?;
            let val = compile_operand(&val.clone().into_node())?;
            Ok(format!("{col} = {val}"))
        })
        .collect();

    let mut out = format!("UPDATE {table} SET {}", assignments?.join(", "));

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
