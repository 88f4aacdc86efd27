use serde_json::Value;

use crate::accessor::ChildAccessor;
use crate::errors::TreeResult;
use crate::fold::Folded;
use crate::{filter, fold, map, walk};

/// Stateful wrapper binding a tree value and its child accessor, exposing the
/// free functions as bound operations.
///
/// Holds no derived or cached state: every call recomputes from the live
/// bound value, so mutating it through [`Tree::value_mut`] changes what
/// subsequent calls see.
pub struct Tree {
    value: Value,
    accessor: ChildAccessor,
}

impl Tree {
    /// Binds `value` with the default `"children"` accessor.
    pub fn new(value: Value) -> Self {
        Self::with_accessor(value, ChildAccessor::default())
    }

    pub fn with_accessor(value: Value, accessor: ChildAccessor) -> Self {
        Self { value, accessor }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn walk<F>(&self, callback: F) -> TreeResult<()>
    where
        F: FnMut(&Value, usize, &[&Value]),
    {
        walk::walk(&self.value, callback, &self.accessor)
    }

    pub fn reverse_walk<R, F>(&self, callback: F) -> TreeResult<Folded<R>>
    where
        F: FnMut(&Value, usize, Option<Vec<R>>) -> Option<R>,
    {
        fold::reverse_walk(&self.value, callback, &self.accessor)
    }

    pub fn map<F>(&self, callback: F) -> TreeResult<Value>
    where
        F: FnMut(&Value, usize) -> Value,
    {
        map::map(&self.value, callback, &self.accessor)
    }

    pub fn filter<F>(&self, predicate: F) -> TreeResult<Value>
    where
        F: FnMut(&Value) -> bool,
    {
        filter::filter(&self.value, predicate, &self.accessor)
    }

    pub fn flatten(&self) -> TreeResult<Vec<&Value>> {
        walk::flatten(&self.value, &self.accessor)
    }

    pub fn paths(&self) -> TreeResult<Vec<Vec<&Value>>> {
        walk::paths(&self.value, &self.accessor)
    }

    pub fn levels(&self) -> TreeResult<Vec<Vec<&Value>>> {
        walk::levels(&self.value, &self.accessor)
    }

    pub fn count(&self) -> TreeResult<usize> {
        fold::count(&self.value, &self.accessor)
    }

    pub fn height(&self) -> TreeResult<usize> {
        fold::height(&self.value, &self.accessor)
    }
}
