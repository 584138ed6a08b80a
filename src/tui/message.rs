//! Message enum for Elm Architecture (TEA) pattern.
//!
//! Shortcut handlers never touch the app directly. They send a message,
//! and `App::update()` applies it after dispatch has returned.

use crate::config::Action;

/// All possible user actions in the playground.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────────────────────
    // App lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Quit the application
    Quit,
    /// Toggle the shortcut help panel
    ToggleHelp,
    /// Clear the event log
    ClearLog,
    /// Move to the next scope in `Scope::ALL`
    NextScope,

    // ─────────────────────────────────────────────────────────────────────────
    // Text input
    // ─────────────────────────────────────────────────────────────────────────
    /// Focus the text field
    FocusInput,
    /// Return focus to the log panel
    Blur,
    /// Submit the text field contents to the log
    Submit,

    // ─────────────────────────────────────────────────────────────────────────
    // Menu
    // ─────────────────────────────────────────────────────────────────────────
    OpenMenu,
    CloseMenu,
    MenuUp,
    MenuDown,
    /// Run the highlighted menu entry
    MenuSelect,
}

impl From<Action> for Message {
    fn from(action: Action) -> Self {
        match action {
            Action::Quit => Message::Quit,
            Action::ToggleHelp => Message::ToggleHelp,
            Action::OpenMenu => Message::OpenMenu,
            Action::CloseMenu => Message::CloseMenu,
            Action::FocusInput => Message::FocusInput,
            Action::Blur => Message::Blur,
            Action::ClearLog => Message::ClearLog,
            Action::NextScope => Message::NextScope,
        }
    }
}
