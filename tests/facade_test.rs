//! Tests for the bound Tree facade

use rstest::{fixture, rstest};
use serde_json::{json, Value};
use treewalk::{flatten, ChildAccessor, Folded, Tree};

#[fixture]
fn sample_tree() -> Value {
    json!({"id": 1, "children": [
        {"id": 2},
        {"id": 3, "children": [{"id": 4}]},
    ]})
}

fn ids(nodes: &[&Value]) -> Vec<i64> {
    nodes.iter().filter_map(|node| node["id"].as_i64()).collect()
}

// ============================================================
// Delegation
// ============================================================

#[rstest]
fn given_bound_tree_when_flattening_then_free_function_result_matches(sample_tree: Value) {
    let bound = Tree::new(sample_tree.clone());
    let bound_ids = ids(&bound.flatten().unwrap());
    let free_ids = ids(&flatten(&sample_tree, &ChildAccessor::default()).unwrap());
    assert_eq!(bound_ids, free_ids);
}

#[rstest]
fn given_bound_tree_then_all_operations_answer_from_the_bound_value(sample_tree: Value) {
    let bound = Tree::new(sample_tree);

    let rows: Vec<Vec<i64>> = bound.levels().unwrap().iter().map(|row| ids(row)).collect();
    assert_eq!(rows, vec![vec![1], vec![2, 3], vec![4]]);

    let chains: Vec<Vec<i64>> = bound.paths().unwrap().iter().map(|path| ids(path)).collect();
    assert_eq!(chains.last(), Some(&vec![1, 3, 4]));

    assert_eq!(bound.count().unwrap(), 4);
    assert_eq!(bound.height().unwrap(), 3);

    let folded = bound
        .reverse_walk(|_, _, sizes: Option<Vec<usize>>| {
            Some(1 + sizes.map(|s| s.iter().sum::<usize>()).unwrap_or(0))
        })
        .unwrap();
    assert_eq!(folded, Folded::Single(Some(4)));

    let mapped = bound.map(|node, _| json!({"id": node["id"]})).unwrap();
    assert_eq!(&mapped, bound.value());

    let pruned = bound
        .filter(|node| node["id"].as_i64().is_some_and(|id| id % 2 != 0))
        .unwrap();
    assert_eq!(pruned, json!({"id": 1, "children": [{"id": 3}]}));
}

#[test]
fn given_custom_accessor_at_construction_then_bound_calls_use_it() {
    let bound = Tree::with_accessor(
        json!({"id": 1, "kids": [{"id": 2}]}),
        ChildAccessor::field("kids"),
    );
    assert_eq!(bound.count().unwrap(), 2);
}

// ============================================================
// Live Bound Value
// ============================================================

#[rstest]
fn given_mutation_between_calls_then_next_call_sees_it(sample_tree: Value) {
    let mut bound = Tree::new(sample_tree);
    assert_eq!(bound.count().unwrap(), 4);

    bound.value_mut()["children"]
        .as_array_mut()
        .unwrap()
        .push(json!({"id": 5}));

    // no cached state: the walk re-derives from the live value
    assert_eq!(bound.count().unwrap(), 5);
    let nodes = bound.flatten().unwrap();
    assert_eq!(ids(&nodes), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn given_into_value_then_the_bound_tree_is_handed_back(sample_tree: Value) {
    let bound = Tree::new(sample_tree.clone());
    assert_eq!(bound.into_value(), sample_tree);
}
