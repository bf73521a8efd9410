//! Key binding registry and resolution.
//!
//! [`KeyBindingRegistry`] maps event identifiers to handlers. Identifiers are
//! matched case-insensitively, and several handlers may share one identifier;
//! they run in registration order.

use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::dom::Tree;

/// A key binding handler. Receives the tree so it can change widgets.
pub type BindingHandler = Box<dyn FnMut(&mut Tree) + Send>;

/// Registry of key bindings, keyed by lowercased identifier.
#[derive(Default)]
pub struct KeyBindingRegistry {
    bindings: HashMap<String, Vec<BindingHandler>>,
}

impl KeyBindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `sequence`, after any existing handlers.
    pub fn bind(&mut self, sequence: &str, handler: impl FnMut(&mut Tree) + Send + 'static) {
        self.bindings.entry(sequence.to_lowercase()).or_default().push(Box::new(handler));
    }

    /// Remove all handlers for `sequence`. Returns whether any existed.
    pub fn unbind(&mut self, sequence: &str) -> bool {
        self.bindings.remove(&sequence.to_lowercase()).is_some()
    }

    /// Remove every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Whether anything is bound to `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.bindings.contains_key(&id.to_lowercase())
    }

    /// Run every handler bound to `id`. Returns whether any ran.
    pub fn resolve(&mut self, id: &str, tree: &mut Tree) -> bool {
        let Some(handlers) = self.bindings.get_mut(&id.to_lowercase()) else {
            return false;
        };
        trace!(id, count = handlers.len(), "key binding matched");
        for handler in handlers.iter_mut() {
            handler(tree);
        }
        true
    }

    /// Number of bound identifiers.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Debug for KeyBindingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBindingRegistry")
            .field("sequences", &self.bindings.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::widgets::Container;

    fn counter() -> (Arc<AtomicUsize>, impl FnMut(&mut Tree) + Send + 'static) {
        let hits = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&hits);
        (hits, move |_: &mut Tree| {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_registry_is_empty() {
        let reg = KeyBindingRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
    }

    // ── Bind / Resolve ───────────────────────────────────────────────

    #[test]
    fn resolve_is_case_insensitive() {
        let mut tree = Tree::new(Container::vertical());
        let mut reg = KeyBindingRegistry::new();
        let (hits, handler) = counter();
        reg.bind("<C-x>", handler);

        assert!(reg.resolve("<c-X>", &mut tree));
        assert!(reg.contains("<C-X>"));
        assert!(!reg.resolve("<C-y>", &mut tree));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn handlers_accumulate() {
        let mut tree = Tree::new(Container::vertical());
        let mut reg = KeyBindingRegistry::new();
        let (first, a) = counter();
        let (second, b) = counter();
        reg.bind("q", a);
        reg.bind("Q", b);
        assert_eq!(reg.len(), 1);

        reg.resolve("q", &mut tree);
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn handler_can_mutate_tree() {
        let mut tree = Tree::new(Container::vertical());
        let mut reg = KeyBindingRegistry::new();
        reg.bind("t", |tree: &mut Tree| {
            let root = tree.root();
            tree.set_title(root, "bound");
        });
        reg.resolve("t", &mut tree);
        assert_eq!(tree.node(tree.root()).unwrap().model.title, "bound");
    }

    #[test]
    fn unbind_and_clear() {
        let mut reg = KeyBindingRegistry::new();
        reg.bind("a", |_: &mut Tree| {});
        reg.bind("b", |_: &mut Tree| {});
        assert!(reg.unbind("A"));
        assert!(!reg.unbind("A"));
        assert_eq!(reg.len(), 1);
        reg.clear();
        assert!(reg.is_empty());
    }
}
