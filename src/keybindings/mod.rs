//! Scoped keyboard shortcuts.
//!
//! Components register bindings at runtime, a single listener resolves each
//! key event to at most one handler. [`Shortcuts`] is the composition root:
//! create one, share it as `Rc<Shortcuts>`, and feed it key events.

mod dispatch;
pub mod event;
mod help;
mod lifecycle;
pub mod normalize;
mod registry;
mod scope;

pub use dispatch::{DispatchEngine, DispatchOutcome, Resolution};
pub use event::{Focus, KeyPress};
pub use help::{display_key, footer_hints, generate_help, group_by_scope};
pub use lifecycle::{BindingGuard, ScopeGuard};
pub use normalize::{normalize_event, normalize_key};
pub use registry::{default_id, BindingRegistry};
pub use scope::ScopeManager;

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Contexts that decide which bindings are eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Active under every scope
    #[default]
    Global,
    /// Code editor has the user's attention
    Editor,
    /// Interactive prompt
    Repl,
    /// A modal dialog is open
    Modal,
    /// A menu is open
    Menu,
}

impl Scope {
    pub const ALL: [Scope; 5] = [
        Scope::Global,
        Scope::Editor,
        Scope::Repl,
        Scope::Modal,
        Scope::Menu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Editor => "editor",
            Scope::Repl => "repl",
            Scope::Modal => "modal",
            Scope::Menu => "menu",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scope::Global => "Global",
            Scope::Editor => "Editor",
            Scope::Repl => "REPL",
            Scope::Modal => "Modal",
            Scope::Menu => "Menu",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::ALL
            .into_iter()
            .find(|scope| scope.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unknown shortcut scope: {}", s))
    }
}

/// Callback invoked with the event that activated a binding.
pub type ShortcutHandler = Rc<dyn Fn(&KeyPress)>;

/// A registered binding.
#[derive(Clone)]
pub struct ShortcutBinding {
    /// Unique within the registry
    pub id: String,
    /// Canonical key, or the literal key value when `use_raw_key` is set
    pub key: String,
    pub handler: ShortcutHandler,
    pub scope: Scope,
    /// Human-readable description for help text
    pub description: String,
    /// Match the event's raw key instead of its canonical form
    pub use_raw_key: bool,
}

impl fmt::Debug for ShortcutBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutBinding")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("scope", &self.scope)
            .field("description", &self.description)
            .field("use_raw_key", &self.use_raw_key)
            .finish_non_exhaustive()
    }
}

/// A binding as supplied to [`Shortcuts::register`]; the id is optional.
#[derive(Clone)]
pub struct NewBinding {
    pub id: Option<String>,
    pub key: String,
    pub handler: ShortcutHandler,
    pub scope: Scope,
    pub description: String,
    pub use_raw_key: bool,
}

impl NewBinding {
    /// `key` is stored as given; build it with [`normalize_key`].
    pub fn new(
        key: impl Into<String>,
        scope: Scope,
        description: impl Into<String>,
        handler: impl Fn(&KeyPress) + 'static,
    ) -> Self {
        Self {
            id: None,
            key: key.into(),
            handler: Rc::new(handler),
            scope,
            description: description.into(),
            use_raw_key: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Match the event's literal key value. Raw-key bindings also fire while
    /// a text field has focus.
    pub fn raw_key(mut self) -> Self {
        self.use_raw_key = true;
        self
    }
}

/// Registry, active scope and listener for one application.
///
/// Single-threaded: the type is neither `Send` nor `Sync`, so registration
/// and dispatch can never overlap.
#[derive(Default)]
pub struct Shortcuts {
    registry: RefCell<BindingRegistry>,
    scopes: RefCell<ScopeManager>,
    engine: RefCell<DispatchEngine>,
}

impl Shortcuts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a binding, overwriting any binding with the same id.
    pub fn register(&self, binding: NewBinding) -> String {
        self.registry.borrow_mut().register(binding)
    }

    /// Remove a binding. Unknown ids are ignored.
    pub fn unregister(&self, id: &str) {
        self.registry.borrow_mut().unregister(id);
    }

    pub fn set_scope(&self, scope: Scope) {
        self.scopes.borrow_mut().set(scope);
    }

    pub fn scope(&self) -> Scope {
        self.scopes.borrow().get()
    }

    /// Save the active scope and switch to `scope`. One level deep.
    pub fn enter_scope(&self, scope: Scope) {
        self.scopes.borrow_mut().enter(scope);
    }

    /// Restore the scope saved by [`enter_scope`](Self::enter_scope).
    pub fn exit_scope(&self) {
        self.scopes.borrow_mut().exit();
    }

    /// Snapshot of every binding in insertion order.
    pub fn bindings(&self) -> Vec<ShortcutBinding> {
        self.registry.borrow().iter().cloned().collect()
    }

    /// Snapshot of the bindings eligible under the active scope.
    pub fn scoped_bindings(&self) -> Vec<ShortcutBinding> {
        let scope = self.scope();
        self.registry.borrow().scoped_view(scope).cloned().collect()
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registry.borrow().contains(id)
    }

    /// Attach the listener. Repeated calls are no-ops and return false.
    pub fn init(&self) -> bool {
        self.engine.borrow_mut().start()
    }

    /// Route one key-down event to at most one handler.
    ///
    /// The handler runs after the registry is released, so it may register,
    /// unregister or change scope itself.
    pub fn dispatch(&self, event: &mut KeyPress) -> DispatchOutcome {
        let resolution = {
            let engine = self.engine.borrow();
            if !engine.is_started() {
                return DispatchOutcome::Inactive;
            }
            let scope = self.scope();
            let registry = self.registry.borrow();
            engine.resolve(&registry, scope, event)
        };

        match resolution {
            Resolution::Suppressed => DispatchOutcome::Suppressed,
            Resolution::Unmatched => DispatchOutcome::Unmatched,
            Resolution::Matched(binding) => {
                event.prevent_default();
                tracing::debug!("Shortcut {} fired", binding.id);
                (binding.handler)(event);
                DispatchOutcome::Handled { id: binding.id }
            }
        }
    }
}
