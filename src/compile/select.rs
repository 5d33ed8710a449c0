use crate::compile::{compile_operand, compile_order_by};
use crate::error::{Error, Result};
use crate::escape::escape_identifier;
use crate::node::Node;
use crate::query::{DistinctMode, Join, JoinCondition, JoinKind, SelectQuery};

pub(super) fn compile_select(q: &SelectQuery) -> Result<String> {
    let mut out = String::from("SELECT");

    match &q.distinct {
        DistinctMode::None => {}
        DistinctMode::Simple => out.push_str(" DISTINCT"),
        DistinctMode::On(fields) => {
            let rendered: Result<Vec<String>> = fields.iter().map(compile_operand).collect();
            out.push_str(&format!(" DISTINCT ON ({})", rendered?.join(", ")));
        }
    }

    if q.fields.is_empty() {
        out.push_str(" *");
    } else {
        let rendered: Result<Vec<String>> =
            q.fields.iter().map(compile_projection_item).collect();
        out.push(' ');
        out.push_str(&rendered?.join(", "));
    }

    if !q.from.is_empty() {
        let rendered: Result<Vec<String>> = q.from.iter().map(compile_operand).collect();
        out.push_str(" FROM ");
        out.push_str(&rendered?.join(" CROSS JOIN "));
    }

    for join in &q.joins {
        out.push(' ');
        out.push_str(&compile_join(join)?);
    }

    if let Some(where_clause) = &q.where_clause {
        out.push_str(" WHERE ");
        out.push_str(&compile_operand(where_clause)?);
    }

    if !q.group_by.is_empty() {
        let rendered: Result<Vec<String>> = q.group_by.iter().map(compile_operand).collect();
        out.push_str(" GROUP BY ");
        out.push_str(&rendered?.join(", "));
    }

    if let Some(having) = &q.having {
        out.push_str(" HAVING ");
        out.push_str(&compile_operand(having)?);
    }

    if !q.order_by.is_empty() {
        out.push_str(" ORDER BY ");
        out.push_str(&compile_order_by(&q.order_by)?);
    }

    if let Some(offset) = q.offset {
        out.push_str(&format!(" OFFSET {offset}"));
    }

    if let Some(limit) = q.limit {
        out.push_str(&format!(" LIMIT {limit}"));
    }

    Ok(out)
}

/// Projection-context compile: preserves an `Aliased` wrapper's alias.
fn compile_projection_item(node: &Node) -> Result<String> {
    match node {
        Node::Aliased(a) => {
            let inner = compile_operand(&a.inner)?;
            Ok(format!("{} AS {}", inner, escape_identifier(&[a.alias.as_str()])?))
        }
        other => compile_operand(other),
    }
}

fn compile_join(join: &Join) -> Result<String> {
    let keyword = match join.kind {
        JoinKind::Cross => "CROSS JOIN",
        JoinKind::Inner => "INNER JOIN",
        JoinKind::LeftOuter => "LEFT OUTER JOIN",
        JoinKind::RightOuter => "RIGHT OUTER JOIN",
    };
    let table = compile_operand(&join.table)?;
    match &join.condition {
        None => Ok(format!("{keyword} {table}")),
        Some(JoinCondition::Using(cols)) => {
            let quoted: Result<Vec<String>> =
                cols.iter().map(|c| escape_identifier(&[c.as_str()])).collect();
            Ok(format!("{keyword} {table} USING ({})", quoted?.join(", ")))
        }
        Some(JoinCondition::On(cond)) => {
            Ok(format!("{keyword} {table} ON {}", compile_operand(cond)?))
        }
    }
}

/// Used by RETURNING lists on INSERT/UPDATE/DELETE, same projection
/// semantics as a SELECT field list.
pub(super) fn compile_returning(items: &[Node]) -> Result<String> {
    if items.is_empty() {
        return Err(Error::query_shape("RETURNING called with no columns"));
    }
    let rendered: Result<Vec<String>> = items.iter().map(compile_projection_item).collect();
    Ok(rendered?.join(", "))
}
