use crate::compile::select::compile_returning;
use crate::compile::compile_operand;
use crate::error::{Error, Result};
use crate::escape::escape_identifier;
use crate::query::{ConflictAction, InsertQuery};

pub(super) fn compile_insert(q: &InsertQuery) -> Result<String> {
    let table = q
        .table
        .as_ref()
        .ok_or_else(|| Error::query_shape("INSERT without a target table"))?;
    let table = compile_operand(table)?;

    if q.rows.is_empty() {
        return Err(Error::query_shape("INSERT with no VALUES rows"));
    }
    if q.column_mismatch {
        return Err(Error::query_shape(
            "INSERT VALUES rows do not all share the same column order",
        ));
    }

    let columns: Result<Vec<String>> = q
        .columns
        .iter()
        .map(|c| escape_identifier(&[c.as_str()]))
        .collect();
    let columns = columns?.join(", ");

    let rows: Result<Vec<String>> = q
        .rows
        .iter()
        .map(|row| {
            let values: Result<Vec<String>> = row.iter().map(compile_operand).collect();
            Ok(format!("({})", values?.join(", ")))
        })
        .collect();
    let rows = rows?.join(", ");

    let mut out = format!("INSERT INTO {table} ({columns}) VALUES {rows}");

    if let Some(on_conflict) = &q.on_conflict {
        let target: Result<Vec<String>> = on_conflict
            .target
            .iter()
            .map(|c| escape_identifier(&[c.as_str()]))
            .collect();
        out.push_str(&format!(" ON CONFLICT ({})", target?.join(", ")));
        match &on_conflict.action {
            ConflictAction::DoNothing => out.push_str(" DO NOTHING"),
            ConflictAction::DoUpdate(assignments) => {
                let rendered: Result<Vec<String>> = assignments
                    .iter()
                    .map(|(col, val)| {
                        let col = escape_identifier(&[col.as_str()])?;
                        let val = compile_operand(&val.clone().into_node())?;
                        Ok(format!("{col} = {val}"))
                    })
                    .collect();
                out.push_str(&format!(" DO UPDATE SET {}", rendered?.join(", ")));
            }
        }
    }

    if !q.returning.is_empty() {
        out.push_str(" RETURNING ");
        out.push_str(&compile_returning(&q.returning)?);
    }

    Ok(out)
}
