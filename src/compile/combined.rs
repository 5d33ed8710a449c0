use crate::compile::{compile_operand, compile_order_by};
use crate::error::{Error, Result};
use crate::node::Node;
use crate::query::Combined;

/// Compile a set-operation tree. `is_root` distinguishes the call made
/// directly on the outermost node (bare) from a nested occurrence inside
/// another `Combined`'s member list (always parenthesized). See
/// `compile_members` for where that distinction is actually applied.
pub(super) fn compile_combined(c: &Combined, is_root: bool) -> Result<String> {
    let mut out = compile_members(c)?;

    if !c.order_by.is_empty() {
        out.push_str(" ORDER BY ");
        out.push_str(&compile_order_by(&c.order_by)?);
    }
    if let Some(offset) = c.offset {
        out.push_str(&format!(" OFFSET {offset}"));
    }
    if let Some(limit) = c.limit {
        out.push_str(&format!(" LIMIT {limit}"));
    }

    if is_root {
        Ok(out)
    } else {
        Ok(format!("({out})"))
    }
}

fn compile_members(c: &Combined) -> Result<String> {
    if c.members.is_empty() {
        return Err(Error::query_shape("Combined with zero members"));
    }
    if c.members.len() == 1 {
        return compile_operand(&c.members[0]);
    }

    let keyword = format!(" {} ", c.op.keyword());
    let mut rendered = Vec::with_capacity(c.members.len());
    for member in &c.members {
        let text = match member {
            // A nested Combined member always parenthesizes, whether it
            // is the first member or a later one.
            Node::Combined(inner) => compile_combined(inner, false)?,
            other => compile_operand(other)?,
        };
        rendered.push(text);
    }
    Ok(rendered.join(&keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{COL, EXCEPT, SELECT, UNION};
    use crate::compile::compile_node;

    #[test]
    fn right_nested_union_parenthesizes() {
        let n = UNION(vec![
            SELECT("a").FROM("x").into(),
            UNION(vec![SELECT("a").FROM("y").into(), SELECT("a").FROM("z").into()]).into(),
        ]);
        assert_eq!(
            compile_node(&n.into()).unwrap(),
            r#"SELECT "a" FROM "x" UNION (SELECT "a" FROM "y" UNION SELECT "a" FROM "z")"#
        );
    }

    #[test]
    fn left_nested_union_parenthesizes() {
        let n = UNION(vec![
            UNION(vec![SELECT("a").FROM("x").into(), SELECT("a").FROM("y").into()]).into(),
            SELECT("a").FROM("z").into(),
        ]);
        assert_eq!(
            compile_node(&n.into()).unwrap(),
            r#"(SELECT "a" FROM "x" UNION SELECT "a" FROM "y") UNION SELECT "a" FROM "z""#
        );
    }

    #[test]
    fn degenerate_single_member() {
        let n = EXCEPT(vec![SELECT(COL("a")).FROM("x").into()]);
        assert_eq!(compile_node(&n.into()).unwrap(), r#"SELECT "a" FROM "x""#);
    }
}
