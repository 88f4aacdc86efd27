use serde_json::Value;
use termtree::Tree;
use tracing::instrument;

use crate::accessor::ChildAccessor;
use crate::errors::TreeResult;

/// Renders a tree or forest for terminal display, one rendered tree per
/// root, labeling each node with `label`.
#[instrument(level = "debug", skip_all)]
pub fn render<F>(tree: &Value, label: F, accessor: &ChildAccessor) -> TreeResult<Vec<Tree<String>>>
where
    F: Fn(&Value) -> String,
{
    match tree {
        Value::Array(roots) => roots
            .iter()
            .map(|root| render_node(root, &label, accessor))
            .collect(),
        root => Ok(vec![render_node(root, &label, accessor)?]),
    }
}

fn render_node<F>(node: &Value, label: &F, accessor: &ChildAccessor) -> TreeResult<Tree<String>>
where
    F: Fn(&Value) -> String,
{
    let leaves = accessor
        .children(node)?
        .iter()
        .map(|child| render_node(child, label, accessor))
        .collect::<TreeResult<Vec<_>>>()?;
    Ok(Tree::new(label(node)).with_leaves(leaves))
}
