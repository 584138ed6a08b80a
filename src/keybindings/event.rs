//! Key events as the engine sees them.
//!
//! Terminal events are converted into [`KeyPress`] values carrying DOM-style
//! key names, the modifier flags and the element holding focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};

/// What currently holds keyboard focus in the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Nothing focused
    #[default]
    None,
    /// A non-editable element (list, button, panel)
    Element,
    /// Single-line text input
    TextInput,
    /// Multi-line text area
    TextArea,
    /// Any other surface that accepts typed text
    ContentEditable,
}

impl Focus {
    /// Returns true if typing into this element produces text.
    pub fn is_editable(&self) -> bool {
        matches!(
            self,
            Focus::TextInput | Focus::TextArea | Focus::ContentEditable
        )
    }
}

/// A single key-down notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Textual key identifier (`"k"`, `"Enter"`, `"ArrowUp"`)
    pub key: String,
    pub ctrl: bool,
    /// Platform meta key (Cmd / Super)
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
    /// Element focused when the key was pressed
    pub focus: Focus,
    /// Set when a handler claimed the key; the host skips its own handling
    pub default_prevented: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: false,
            shift: false,
            alt: false,
            focus: Focus::None,
            default_prevented: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_focus(mut self, focus: Focus) -> Self {
        self.focus = focus;
        self
    }

    /// Stop the host from applying its default handling of this key.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Convert a terminal key event.
    pub fn from_crossterm(event: KeyEvent, focus: Focus) -> Self {
        let mods = event.modifiers;
        Self {
            key: key_name(&event.code),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            meta: mods.intersects(KeyModifiers::SUPER | KeyModifiers::META),
            shift: mods.contains(KeyModifiers::SHIFT) || event.code == KeyCode::BackTab,
            alt: mods.contains(KeyModifiers::ALT),
            focus,
            default_prevented: false,
        }
    }

    /// The printable character this key would type, if any.
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !self.ctrl && !self.meta && !self.alt => Some(c),
            _ => None,
        }
    }
}

/// DOM-style name for a terminal key code.
fn key_name(code: &KeyCode) -> String {
    match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Modifier(m) => modifier_name(m).to_string(),
        _ => "Unidentified".to_string(),
    }
}

fn modifier_name(code: &ModifierKeyCode) -> &'static str {
    match code {
        ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => "Ctrl",
        ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => "Shift",
        ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => "Alt",
        _ => "Meta",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_ctrl_char_from_crossterm() {
        let press = KeyPress::from_crossterm(
            key_event(KeyCode::Char('k'), KeyModifiers::CONTROL),
            Focus::Element,
        );
        assert_eq!(press.key, "k");
        assert!(press.ctrl);
        assert!(!press.meta);
        assert_eq!(press.focus, Focus::Element);
    }

    #[test]
    fn test_super_maps_to_meta() {
        let press = KeyPress::from_crossterm(
            key_event(KeyCode::Char('p'), KeyModifiers::SUPER),
            Focus::None,
        );
        assert!(press.meta);
    }

    #[test]
    fn test_named_keys() {
        let esc = KeyPress::from_crossterm(key_event(KeyCode::Esc, KeyModifiers::NONE), Focus::None);
        assert_eq!(esc.key, "Escape");

        let back_tab =
            KeyPress::from_crossterm(key_event(KeyCode::BackTab, KeyModifiers::NONE), Focus::None);
        assert_eq!(back_tab.key, "Tab");
        assert!(back_tab.shift);

        let ctrl = KeyPress::from_crossterm(
            key_event(
                KeyCode::Modifier(ModifierKeyCode::LeftControl),
                KeyModifiers::CONTROL,
            ),
            Focus::None,
        );
        assert_eq!(ctrl.key, "Ctrl");
    }

    #[test]
    fn test_as_char() {
        assert_eq!(KeyPress::new("a").as_char(), Some('a'));
        assert_eq!(KeyPress::new("a").with_ctrl().as_char(), None);
        let mut alt = KeyPress::new("x");
        alt.alt = true;
        assert_eq!(alt.as_char(), None);
        assert_eq!(KeyPress::new("Enter").as_char(), None);
    }

    #[test]
    fn test_focus_editable() {
        assert!(Focus::TextInput.is_editable());
        assert!(Focus::TextArea.is_editable());
        assert!(Focus::ContentEditable.is_editable());
        assert!(!Focus::Element.is_editable());
        assert!(!Focus::None.is_editable());
    }
}
