use serde_json::Value;
use tracing::instrument;

use crate::accessor::ChildAccessor;
use crate::errors::{value_kind, TreeError, TreeResult};

/// Structure-preserving transform producing a new tree isomorphic to the
/// input; a forest maps to the sequence of its mapped roots.
///
/// The callback returns the new node's own content. When the source node's
/// children resolved to a present sequence, the mapped children are attached
/// to that result under the accessor's write field — nothing else from the
/// source node is carried over, whatever the callback returns is the new
/// node. A source leaf without a children relation stays free of one.
#[instrument(level = "debug", skip_all)]
pub fn map<F>(tree: &Value, mut callback: F, accessor: &ChildAccessor) -> TreeResult<Value>
where
    F: FnMut(&Value, usize) -> Value,
{
    match tree {
        Value::Array(roots) => {
            let mapped = roots
                .iter()
                .map(|root| map_node(root, 0, &mut callback, accessor))
                .collect::<TreeResult<Vec<_>>>()?;
            Ok(Value::Array(mapped))
        }
        root => map_node(root, 0, &mut callback, accessor),
    }
}

fn map_node<F>(
    node: &Value,
    depth: usize,
    callback: &mut F,
    accessor: &ChildAccessor,
) -> TreeResult<Value>
where
    F: FnMut(&Value, usize) -> Value,
{
    let children = accessor.resolve(node)?;
    let mut mapped = callback(node, depth);
    if let Some(children) = children {
        let mapped_children = children
            .iter()
            .map(|child| map_node(child, depth + 1, callback, accessor))
            .collect::<TreeResult<Vec<_>>>()?;
        match &mut mapped {
            Value::Object(fields) => {
                fields.insert(
                    accessor.write_field().to_string(),
                    Value::Array(mapped_children),
                );
            }
            other => {
                return Err(TreeError::MappedNotARecord {
                    field: accessor.write_field().to_string(),
                    kind: value_kind(other),
                })
            }
        }
    }
    Ok(mapped)
}
