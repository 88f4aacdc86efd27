use std::fmt;

use serde_json::Value;

use crate::errors::{value_kind, TreeError, TreeResult};

/// Field holding a node's children when no accessor is configured.
pub const CHILDREN_FIELD: &str = "children";

/// Children lookup used by [`ChildAccessor::ByFunc`].
pub type ChildrenFn = Box<dyn for<'a> Fn(&'a Value) -> Option<&'a [Value]>>;

/// How to obtain the ordered children sequence of a node.
///
/// Either a field name on the node record (the common case) or an arbitrary
/// lookup function for nodes that keep their children somewhere less direct.
/// The two variants leave no malformed accessor to guard against; the only
/// runtime failure left is a present children field that is not a sequence.
pub enum ChildAccessor {
    ByField(String),
    ByFunc(ChildrenFn),
}

impl Default for ChildAccessor {
    fn default() -> Self {
        ChildAccessor::ByField(CHILDREN_FIELD.to_string())
    }
}

impl fmt::Debug for ChildAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildAccessor::ByField(name) => f.debug_tuple("ByField").field(name).finish(),
            ChildAccessor::ByFunc(_) => f.write_str("ByFunc(..)"),
        }
    }
}

impl From<&str> for ChildAccessor {
    fn from(name: &str) -> Self {
        ChildAccessor::ByField(name.to_string())
    }
}

impl From<String> for ChildAccessor {
    fn from(name: String) -> Self {
        ChildAccessor::ByField(name)
    }
}

impl ChildAccessor {
    pub fn field(name: impl Into<String>) -> Self {
        ChildAccessor::ByField(name.into())
    }

    pub fn func(f: impl for<'a> Fn(&'a Value) -> Option<&'a [Value]> + 'static) -> Self {
        ChildAccessor::ByFunc(Box::new(f))
    }

    /// Resolves the raw children sequence of `node`.
    ///
    /// `Ok(None)` means the node carries no children relation at all (absent
    /// field, `null` field, or a non-record node) — the normal leaf case.
    /// A present field holding anything other than a sequence is a data error.
    pub fn resolve<'a>(&self, node: &'a Value) -> TreeResult<Option<&'a [Value]>> {
        match self {
            ChildAccessor::ByField(name) => match node.get(name.as_str()) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::Array(items)) => Ok(Some(items.as_slice())),
                Some(other) => Err(TreeError::ChildrenNotASequence {
                    field: name.clone(),
                    kind: value_kind(other),
                }),
            },
            ChildAccessor::ByFunc(lookup) => Ok(lookup(node)),
        }
    }

    /// Children of `node`, defaulting to the empty sequence for leaves.
    pub fn children<'a>(&self, node: &'a Value) -> TreeResult<&'a [Value]> {
        Ok(self.resolve(node)?.unwrap_or(&[]))
    }

    /// Field name used for structural edits (attaching mapped children,
    /// pruning emptied children). A function accessor carries no field name,
    /// so edits fall back to the default `"children"` field.
    pub fn write_field(&self) -> &str {
        match self {
            ChildAccessor::ByField(name) => name,
            ChildAccessor::ByFunc(_) => CHILDREN_FIELD,
        }
    }
}
