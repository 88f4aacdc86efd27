use std::mem;

use serde_json::Value;
use tracing::instrument;

use crate::accessor::ChildAccessor;
use crate::copy::deep_copy;
use crate::errors::{value_kind, TreeError, TreeResult};

/// Predicate-driven pruning over a deep copy of the input; the caller's tree
/// is never touched.
///
/// Children are filtered bottom-up, so the predicate always sees a node whose
/// subtree has already been pruned. At the forest/sibling level a node
/// survives iff the predicate accepts it or it retains surviving descendants;
/// a single non-forest root is always returned, only its descendants are
/// subject to removal. Surviving siblings keep their order, and a node whose
/// children were all pruned loses its children field entirely.
///
/// Structural edits go through the accessor's write field, so a function
/// accessor prunes the default `"children"` field.
#[instrument(level = "debug", skip_all)]
pub fn filter<F>(tree: &Value, mut predicate: F, accessor: &ChildAccessor) -> TreeResult<Value>
where
    F: FnMut(&Value) -> bool,
{
    let field = accessor.write_field();
    let mut pruned = deep_copy(tree);
    match &mut pruned {
        Value::Array(roots) => {
            let taken = mem::take(roots);
            *roots = filter_siblings(taken, &mut predicate, field)?;
        }
        root => filter_node(root, &mut predicate, field)?,
    }
    Ok(pruned)
}

fn filter_siblings<F>(nodes: Vec<Value>, predicate: &mut F, field: &str) -> TreeResult<Vec<Value>>
where
    F: FnMut(&Value) -> bool,
{
    let mut kept = Vec::new();
    for mut node in nodes {
        filter_node(&mut node, predicate, field)?;
        if predicate(&node) || has_children(&node, field) {
            kept.push(node);
        }
    }
    Ok(kept)
}

fn filter_node<F>(node: &mut Value, predicate: &mut F, field: &str) -> TreeResult<()>
where
    F: FnMut(&Value) -> bool,
{
    let filtered = match node.get_mut(field) {
        Some(Value::Array(children)) => {
            Some(filter_siblings(mem::take(children), predicate, field)?)
        }
        None | Some(Value::Null) => None,
        Some(other) => {
            return Err(TreeError::ChildrenNotASequence {
                field: field.to_string(),
                kind: value_kind(other),
            })
        }
    };
    match filtered {
        // emptied children field is dropped, keeping pruned leaves clean
        Some(kept) if kept.is_empty() => {
            if let Value::Object(fields) = node {
                fields.remove(field);
            }
        }
        Some(kept) => {
            if let Some(slot) = node.get_mut(field) {
                *slot = Value::Array(kept);
            }
        }
        None => {}
    }
    Ok(())
}

fn has_children(node: &Value, field: &str) -> bool {
    node.get(field)
        .and_then(Value::as_array)
        .is_some_and(|children| !children.is_empty())
}
