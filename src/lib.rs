//! Structure-agnostic tree traversal and transformation over dynamic node
//! graphs.
//!
//! Nodes are arbitrary [`serde_json::Value`] records; the only field this
//! crate interprets is the children relation, resolved through a
//! [`ChildAccessor`] — a field name (default `"children"`) or a lookup
//! function. A top-level array is a forest: an ordered sequence of
//! independent tree roots, each walked from depth 0.
//!
//! Operations never mutate their input. [`walk()`] visits in preorder with
//! depth and ancestor-path tracking, [`reverse_walk()`] folds child results
//! up the tree in postorder, [`map()`] rebuilds an isomorphic tree,
//! [`filter()`] prunes a deep copy, and [`Tree`] binds a value and accessor
//! into the same surface as methods.
//!
//! ```
//! use serde_json::json;
//! use treewalk::{flatten, ChildAccessor};
//!
//! let tree = json!({"id": 1, "children": [
//!     {"id": 2},
//!     {"id": 3, "children": [{"id": 4}]},
//! ]});
//! let ids: Vec<i64> = flatten(&tree, &ChildAccessor::default())
//!     .unwrap()
//!     .iter()
//!     .filter_map(|node| node["id"].as_i64())
//!     .collect();
//! assert_eq!(ids, vec![1, 2, 3, 4]);
//! ```

pub mod accessor;
pub mod copy;
pub mod display;
pub mod errors;
pub mod facade;
pub mod filter;
pub mod fold;
pub mod map;
pub mod util;
pub mod walk;

pub use accessor::{ChildAccessor, ChildrenFn, CHILDREN_FIELD};
pub use copy::deep_copy;
pub use display::render;
pub use errors::{TreeError, TreeResult};
pub use facade::Tree;
pub use filter::filter;
pub use fold::{count, height, reverse_walk, Folded};
pub use map::map;
pub use walk::{flatten, levels, paths, walk};
