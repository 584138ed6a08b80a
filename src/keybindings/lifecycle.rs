//! Registration tied to component lifetimes.
//!
//! A component holds a [`BindingGuard`] while it is active; dropping the
//! guard unregisters the binding. [`ScopeGuard`] does the same for
//! `enter_scope`/`exit_scope`, including on unwind.

use super::{NewBinding, Scope, Shortcuts};
use std::rc::Rc;

/// Keeps a binding registered until dropped.
#[must_use = "dropping the guard unregisters the binding"]
pub struct BindingGuard {
    shortcuts: Option<Rc<Shortcuts>>,
    id: String,
}

impl BindingGuard {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Leave the binding registered and return its id.
    pub fn forget(mut self) -> String {
        self.shortcuts = None;
        std::mem::take(&mut self.id)
    }
}

impl Drop for BindingGuard {
    fn drop(&mut self) {
        if let Some(shortcuts) = self.shortcuts.take() {
            shortcuts.unregister(&self.id);
        }
    }
}

/// Keeps a scope active until dropped, then restores the saved scope.
#[must_use = "dropping the guard exits the scope"]
pub struct ScopeGuard {
    shortcuts: Rc<Shortcuts>,
    scope: Scope,
}

impl ScopeGuard {
    pub fn scope(&self) -> Scope {
        self.scope
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        self.shortcuts.exit_scope();
    }
}

impl Shortcuts {
    /// Register `binding` for the lifetime of the returned guard.
    pub fn bind(self: &Rc<Self>, binding: NewBinding) -> BindingGuard {
        let id = self.register(binding);
        BindingGuard {
            shortcuts: Some(Rc::clone(self)),
            id,
        }
    }

    /// Enter `scope` for the lifetime of the returned guard.
    pub fn scoped(self: &Rc<Self>, scope: Scope) -> ScopeGuard {
        self.enter_scope(scope);
        ScopeGuard {
            shortcuts: Rc::clone(self),
            scope,
        }
    }
}
