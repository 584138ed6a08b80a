//! Key event resolution against the registry.
//!
//! The engine decides which binding, if any, a key event activates. It never
//! invokes handlers itself: [`Shortcuts::dispatch`](super::Shortcuts::dispatch)
//! does that once every internal borrow has been released.

use super::event::KeyPress;
use super::normalize::normalize_event;
use super::registry::BindingRegistry;
use super::{Scope, ShortcutBinding};

/// What happened to a dispatched key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The engine has not been started; the event was not looked at
    Inactive,
    /// An editable element has focus and no raw-key binding claims the key
    Suppressed,
    /// No binding in the scoped view matched
    Unmatched,
    /// The binding with this id ran and the default action was prevented
    Handled { id: String },
}

/// Result of matching one event, before the handler runs.
pub enum Resolution {
    Suppressed,
    Unmatched,
    Matched(ShortcutBinding),
}

/// The process-wide key listener.
#[derive(Debug, Default)]
pub struct DispatchEngine {
    started: bool,
}

impl DispatchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the listener. Returns false if it was already attached.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        tracing::debug!("Shortcut dispatch started");
        true
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Find the binding `event` activates under `scope`.
    ///
    /// The first binding in insertion order wins. Global and scope-specific
    /// bindings are not ranked against each other.
    pub fn resolve(
        &self,
        registry: &BindingRegistry,
        scope: Scope,
        event: &KeyPress,
    ) -> Resolution {
        if event.focus.is_editable() && !claims_raw_key(registry, scope, &event.key) {
            return Resolution::Suppressed;
        }

        let pressed = normalize_event(event);
        registry
            .scoped_view(scope)
            .find(|b| matches(b, &pressed, event))
            .cloned()
            .map_or(Resolution::Unmatched, Resolution::Matched)
    }
}

/// Check whether a scoped raw-key binding asks for `raw_key` even while
/// typing.
fn claims_raw_key(registry: &BindingRegistry, scope: Scope, raw_key: &str) -> bool {
    registry
        .scoped_view(scope)
        .any(|b| b.use_raw_key && b.key == raw_key)
}

fn matches(binding: &ShortcutBinding, pressed: &str, event: &KeyPress) -> bool {
    if binding.use_raw_key {
        binding.key == event.key
    } else {
        binding.key == pressed
    }
}
