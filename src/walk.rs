use serde_json::Value;
use tracing::instrument;

use crate::accessor::ChildAccessor;
use crate::errors::TreeResult;

/// Depth-first preorder walk over a tree or forest.
///
/// Visits every node exactly once, parents before children and siblings left
/// to right. The callback receives the node, its zero-based depth and the
/// ancestor path from the root down to and including the node. Each branch
/// carries its own path copy, so stored paths never alias across siblings.
///
/// Uses an explicit work-stack rather than native recursion, so very deep
/// inputs cannot exhaust the call stack.
#[instrument(level = "debug", skip_all)]
pub fn walk<'a, F>(tree: &'a Value, mut callback: F, accessor: &ChildAccessor) -> TreeResult<()>
where
    F: FnMut(&'a Value, usize, &[&'a Value]),
{
    // (node, depth, path to the node's parent)
    let mut stack: Vec<(&'a Value, usize, Vec<&'a Value>)> = Vec::new();
    match tree {
        Value::Array(roots) => {
            for root in roots.iter().rev() {
                stack.push((root, 0, Vec::new()));
            }
        }
        root => stack.push((root, 0, Vec::new())),
    }

    while let Some((node, depth, mut path)) = stack.pop() {
        path.push(node);
        callback(node, depth, &path);
        // Push children in reverse order for left-to-right traversal
        for child in accessor.children(node)?.iter().rev() {
            stack.push((child, depth + 1, path.clone()));
        }
    }
    Ok(())
}

/// All nodes of the tree in preorder.
#[instrument(level = "debug", skip_all)]
pub fn flatten<'a>(tree: &'a Value, accessor: &ChildAccessor) -> TreeResult<Vec<&'a Value>> {
    let mut nodes = Vec::new();
    walk(tree, |node, _, _| nodes.push(node), accessor)?;
    Ok(nodes)
}

/// The ancestor path of every node, in preorder of the node visited.
#[instrument(level = "debug", skip_all)]
pub fn paths<'a>(tree: &'a Value, accessor: &ChildAccessor) -> TreeResult<Vec<Vec<&'a Value>>> {
    let mut collected = Vec::new();
    walk(tree, |_, _, path| collected.push(path.to_vec()), accessor)?;
    Ok(collected)
}

/// Nodes grouped by depth: entry `d` holds the depth-`d` nodes in
/// left-to-right preorder.
#[instrument(level = "debug", skip_all)]
pub fn levels<'a>(tree: &'a Value, accessor: &ChildAccessor) -> TreeResult<Vec<Vec<&'a Value>>> {
    let mut rows: Vec<Vec<&'a Value>> = Vec::new();
    walk(
        tree,
        |node, depth, _| {
            if rows.len() <= depth {
                rows.resize_with(depth + 1, Vec::new);
            }
            rows[depth].push(node);
        },
        accessor,
    )?;
    Ok(rows)
}
