//! Node identity and children access.

use std::rc::Rc;

use serde_json::Value;

/// Reads a node's identifier.
pub type IdAccessor<'a, T> = Rc<dyn Fn(&T) -> String + 'a>;

/// Reads a node's children. `None` and an empty slice both mean leaf.
pub type ChildrenAccessor<'a, T> = Rc<dyn Fn(&T) -> Option<&[T]> + 'a>;

/// Trait for application data that can be rendered by a tree.
///
/// Implementing it supplies the default accessors. Types that can't (or
/// shouldn't) implement it pass custom accessors through
/// [`Accessors::new`] instead.
///
/// # Example
///
/// ```ignore
/// struct Entry {
///     path: String,
///     entries: Vec<Entry>,
/// }
///
/// impl TreeNode for Entry {
///     fn id(&self) -> String {
///         self.path.clone()
///     }
///
///     fn children(&self) -> Option<&[Self]> {
///         Some(self.entries.as_slice())
///     }
/// }
/// ```
pub trait TreeNode: Sized {
    /// Unique, stable identifier for this node.
    ///
    /// Must be unique across the entire forest and stable across passes;
    /// expansion state is keyed by it.
    fn id(&self) -> String;

    /// Child nodes. The default marks the node a leaf.
    fn children(&self) -> Option<&[Self]> {
        None
    }
}

/// Reads the `id` and `children` fields of a JSON object.
///
/// String ids are used verbatim, any other JSON id is used in its
/// serialized form, and a missing id is the empty string. A `children`
/// field that is missing or not an array makes the node a leaf.
impl TreeNode for Value {
    fn id(&self) -> String {
        match self.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }

    fn children(&self) -> Option<&[Self]> {
        self.get("children")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }
}

/// The id and children accessors used by a render pass.
pub struct Accessors<'a, T> {
    id: IdAccessor<'a, T>,
    children: ChildrenAccessor<'a, T>,
}

impl<'a, T> Accessors<'a, T> {
    /// Build accessors from two functions.
    pub fn new(
        id: impl Fn(&T) -> String + 'a,
        children: impl Fn(&T) -> Option<&[T]> + 'a,
    ) -> Self {
        Self {
            id: Rc::new(id),
            children: Rc::new(children),
        }
    }

    /// Replace the id accessor.
    pub fn with_id(mut self, id: impl Fn(&T) -> String + 'a) -> Self {
        self.id = Rc::new(id);
        self
    }

    /// Replace the children accessor.
    pub fn with_children(mut self, children: impl Fn(&T) -> Option<&[T]> + 'a) -> Self {
        self.children = Rc::new(children);
        self
    }

    /// Identifier of `node`.
    pub fn id(&self, node: &T) -> String {
        (self.id)(node)
    }

    /// Children of `node`, empty for leaves.
    pub fn children<'n>(&self, node: &'n T) -> &'n [T] {
        (self.children)(node).unwrap_or(&[])
    }

    /// Whether `node` is a folder (has at least one child).
    pub fn is_folder(&self, node: &T) -> bool {
        !self.children(node).is_empty()
    }
}

impl<'a, T: TreeNode + 'a> Default for Accessors<'a, T> {
    fn default() -> Self {
        Self {
            id: Rc::new(T::id),
            children: Rc::new(T::children),
        }
    }
}

impl<T> Clone for Accessors<'_, T> {
    fn clone(&self) -> Self {
        Self {
            id: Rc::clone(&self.id),
            children: Rc::clone(&self.children),
        }
    }
}

impl<T> std::fmt::Debug for Accessors<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accessors").finish_non_exhaustive()
    }
}
