//! Runtime registry of shortcut bindings.
//!
//! Bindings are keyed by id and kept in insertion order. Overwriting an id
//! keeps its original position; removing one shifts the rest down. The
//! order is the dispatch tie-break, so it must stay stable.

use super::{NewBinding, Scope, ShortcutBinding};
use indexmap::IndexMap;

/// Mapping from binding id to binding.
#[derive(Default)]
pub struct BindingRegistry {
    bindings: IndexMap<String, ShortcutBinding>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a binding and return its id.
    ///
    /// Without an explicit id the binding is stored under `scope:key`, so two
    /// such bindings with the same scope and key replace each other. An
    /// existing entry with the same id is overwritten.
    pub fn register(&mut self, binding: NewBinding) -> String {
        let id = binding
            .id
            .clone()
            .unwrap_or_else(|| default_id(binding.scope, &binding.key));

        let binding = ShortcutBinding {
            id: id.clone(),
            key: binding.key,
            handler: binding.handler,
            scope: binding.scope,
            description: binding.description,
            use_raw_key: binding.use_raw_key,
        };

        if self.bindings.insert(id.clone(), binding).is_some() {
            tracing::debug!("Shortcut {} overwritten", id);
        } else {
            tracing::debug!("Shortcut {} registered", id);
        }
        id
    }

    /// Remove a binding. Unknown ids are ignored.
    pub fn unregister(&mut self, id: &str) {
        if self.bindings.shift_remove(id).is_some() {
            tracing::debug!("Shortcut {} unregistered", id);
        }
    }

    pub fn get(&self, id: &str) -> Option<&ShortcutBinding> {
        self.bindings.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.bindings.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ShortcutBinding> {
        self.bindings.values()
    }

    /// Bindings eligible under `active`: its own plus every global one,
    /// interleaved in insertion order.
    pub fn scoped_view(&self, active: Scope) -> impl Iterator<Item = &ShortcutBinding> {
        self.bindings
            .values()
            .filter(move |b| b.scope == active || b.scope == Scope::Global)
    }
}

/// Id used when a binding does not name one.
pub fn default_id(scope: Scope, key: &str) -> String {
    format!("{}:{}", scope, key)
}
