use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::node::Accessors;

type Notify = Arc<dyn Fn() + Send + Sync>;

/// Set of expanded node ids with change tracking.
///
/// `ExpansionState` is the store behind uncontrolled trees: every
/// [`Treefold`](crate::Treefold) instance owns one. It can also be created
/// by the caller and handed to a render pass with
/// [`TreeProps::controlled_by`](crate::TreeProps::controlled_by), which
/// keeps the expansion state on the caller's side while the engine still
/// does the flipping.
///
/// Clones share the same set. Every mutation marks the state dirty and
/// fires the installed change notifier, which is how a host runtime learns
/// that the tree needs another render pass.
///
/// # Example
///
/// ```ignore
/// let state = ExpansionState::new();
/// state.on_change(move || wakeup.send());
///
/// let out = tree.render(
///     TreeProps::new()
///         .nodes(&roots)
///         .controlled_by(&state)
///         .render(row),
/// )?;
/// ```
#[derive(Clone, Default)]
pub struct ExpansionState {
    inner: Arc<RwLock<HashSet<String>>>,
    dirty: Arc<AtomicBool>,
    notify: Arc<RwLock<Option<Notify>>>,
}

impl ExpansionState {
    /// Create an empty state (everything collapsed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with the given ids expanded.
    pub fn with_expanded<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let state = Self::new();
        if let Ok(mut guard) = state.inner.write() {
            guard.extend(ids.into_iter().map(Into::into));
        }
        state
    }

    /// Install the change notifier, replacing any previous one.
    pub fn on_change(&self, notify: impl Fn() + Send + Sync + 'static) {
        if let Ok(mut guard) = self.notify.write() {
            *guard = Some(Arc::new(notify));
        }
    }

    /// Check if a node is expanded.
    pub fn is_expanded(&self, node_id: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.contains(node_id))
            .unwrap_or(false)
    }

    /// Expand a node. Returns true if it was collapsed.
    pub fn expand(&self, node_id: &str) -> bool {
        let changed = self
            .inner
            .write()
            .map(|mut g| g.insert(node_id.to_string()))
            .unwrap_or(false);
        if changed {
            self.mark_changed();
        }
        changed
    }

    /// Collapse a node. Returns true if it was expanded.
    pub fn collapse(&self, node_id: &str) -> bool {
        let changed = self
            .inner
            .write()
            .map(|mut g| g.remove(node_id))
            .unwrap_or(false);
        if changed {
            self.mark_changed();
        }
        changed
    }

    /// Toggle expand/collapse for a node. Returns the new state.
    pub fn toggle(&self, node_id: &str) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        let expanded = if guard.remove(node_id) {
            false
        } else {
            guard.insert(node_id.to_string());
            true
        };
        drop(guard);
        self.mark_changed();
        expanded
    }

    /// Expand every folder reachable from `nodes`. Marks dirty only if a
    /// folder was collapsed.
    pub fn expand_all<T>(&self, nodes: &[T], accessors: &Accessors<'_, T>) {
        let changed = self
            .inner
            .write()
            .map(|mut g| {
                let before = g.len();
                Self::collect_folder_ids(nodes, accessors, &mut g);
                g.len() != before
            })
            .unwrap_or(false);
        if changed {
            self.mark_changed();
        }
    }

    /// Collapse all nodes. Marks dirty only if something was expanded.
    pub fn collapse_all(&self) {
        let changed = self
            .inner
            .write()
            .map(|mut g| {
                let had_any = !g.is_empty();
                g.clear();
                had_any
            })
            .unwrap_or(false);
        if changed {
            self.mark_changed();
        }
    }

    /// Expanded ids, sorted.
    pub fn expanded_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .inner
            .read()
            .map(|g| g.iter().cloned().collect())
            .unwrap_or_default();
        ids.sort();
        ids
    }

    /// Number of expanded ids.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.len()).unwrap_or(0)
    }

    /// Check if nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn mark_changed(&self) {
        self.dirty.store(true, Ordering::SeqCst);
        // Clone out so the notifier can touch this state
        let notify = self.notify.read().ok().and_then(|g| g.clone());
        if let Some(notify) = notify {
            notify();
        }
    }

    fn collect_folder_ids<T>(nodes: &[T], accessors: &Accessors<'_, T>, out: &mut HashSet<String>) {
        for node in nodes {
            let children = accessors.children(node);
            if !children.is_empty() {
                out.insert(accessors.id(node));
                Self::collect_folder_ids(children, accessors, out);
            }
        }
    }
}

impl std::fmt::Debug for ExpansionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpansionState")
            .field("expanded", &self.expanded_ids())
            .field("dirty", &self.is_dirty())
            .finish()
    }
}
