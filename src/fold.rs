use serde_json::Value;
use tracing::instrument;

use crate::accessor::ChildAccessor;
use crate::errors::TreeResult;

/// Result of a [`reverse_walk`]: one folded value for a single tree, or one
/// per top-level root for a forest. No synthetic forest-level callback is
/// ever invoked — a forest has no observable common root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Folded<R> {
    Single(Option<R>),
    Forest(Vec<Option<R>>),
}

impl<R> Folded<R> {
    /// The root result of a single-tree fold, `None` for forest inputs.
    pub fn single(self) -> Option<R> {
        match self {
            Folded::Single(result) => result,
            Folded::Forest(_) => None,
        }
    }

    /// Per-root results, uniformly, treating a single tree as a one-root forest.
    pub fn forest(self) -> Vec<Option<R>> {
        match self {
            Folded::Single(result) => vec![result],
            Folded::Forest(results) => results,
        }
    }
}

/// Depth-first postorder fold: leaves are visited first, and each node's
/// callback receives the ordered results its children returned.
///
/// The aggregate is `None` for childless nodes — never an empty vec — and a
/// child returning `None` contributes nothing to its parent's aggregate.
/// Each node's callback return value becomes that node's entry in its own
/// parent's aggregate, so counting, height computation or any reduce-up-the-
/// tree operation is expressible purely in the callback.
#[instrument(level = "debug", skip_all)]
pub fn reverse_walk<'a, R, F>(
    tree: &'a Value,
    mut callback: F,
    accessor: &ChildAccessor,
) -> TreeResult<Folded<R>>
where
    F: FnMut(&'a Value, usize, Option<Vec<R>>) -> Option<R>,
{
    match tree {
        Value::Array(roots) => {
            let mut results = Vec::with_capacity(roots.len());
            for root in roots {
                results.push(fold_node(root, 0, &mut callback, accessor)?);
            }
            Ok(Folded::Forest(results))
        }
        root => Ok(Folded::Single(fold_node(root, 0, &mut callback, accessor)?)),
    }
}

fn fold_node<'a, R, F>(
    node: &'a Value,
    depth: usize,
    callback: &mut F,
    accessor: &ChildAccessor,
) -> TreeResult<Option<R>>
where
    F: FnMut(&'a Value, usize, Option<Vec<R>>) -> Option<R>,
{
    let mut results = Vec::new();
    for child in accessor.children(node)? {
        if let Some(result) = fold_node(child, depth + 1, callback, accessor)? {
            results.push(result);
        }
    }
    let aggregate = if results.is_empty() { None } else { Some(results) };
    Ok(callback(node, depth, aggregate))
}

/// Total number of nodes reachable through the children relation.
#[instrument(level = "debug", skip_all)]
pub fn count(tree: &Value, accessor: &ChildAccessor) -> TreeResult<usize> {
    let folded = reverse_walk(
        tree,
        |_, _, sizes: Option<Vec<usize>>| Some(1 + sizes.map(|s| s.iter().sum::<usize>()).unwrap_or(0)),
        accessor,
    )?;
    Ok(folded.forest().into_iter().flatten().sum())
}

/// Number of node levels: 1 for a lone root, 0 for an empty forest. A forest
/// is as tall as its tallest root.
#[instrument(level = "debug", skip_all)]
pub fn height(tree: &Value, accessor: &ChildAccessor) -> TreeResult<usize> {
    let folded = reverse_walk(
        tree,
        |_, _, heights: Option<Vec<usize>>| {
            Some(1 + heights.and_then(|h| h.into_iter().max()).unwrap_or(0))
        },
        accessor,
    )?;
    Ok(folded.forest().into_iter().flatten().max().unwrap_or(0))
}
