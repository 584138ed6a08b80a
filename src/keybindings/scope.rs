//! Active scope tracking.

use super::Scope;

/// Holds the active scope and a single saved scope for `enter`/`exit`.
///
/// The saved slot is one level deep. Entering a second scope before exiting
/// the first overwrites it, so the outer scope is not restored.
#[derive(Debug, Default)]
pub struct ScopeManager {
    active: Scope,
    previous: Option<Scope>,
}

impl ScopeManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active scope.
    pub fn set(&mut self, scope: Scope) {
        if self.active != scope {
            tracing::debug!("Shortcut scope {} -> {}", self.active, scope);
        }
        self.active = scope;
    }

    pub fn get(&self) -> Scope {
        self.active
    }

    /// Save the active scope and switch to `scope`.
    pub fn enter(&mut self, scope: Scope) {
        self.previous = Some(self.active);
        self.set(scope);
    }

    /// Restore the scope saved by the last [`enter`](Self::enter).
    ///
    /// Does nothing if no scope is saved.
    pub fn exit(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.set(previous);
        }
    }

    /// Scope that [`exit`](Self::exit) would restore.
    pub fn saved(&self) -> Option<Scope> {
        self.previous
    }
}
