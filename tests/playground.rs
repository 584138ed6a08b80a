//! Tests for the terminal playground wired through the shortcut engine.
//!
//! These drive `App` with key presses the way the event loop does, without a
//! terminal attached.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use keyscope::config::{self, Action, BindingConfig, Config};
use keyscope::keybindings::{Focus, KeyPress, Scope};
use keyscope::tui::{App, Message, MENU_ACTIONS};
use pretty_assertions::assert_eq;

// ============================================================================
// Test Helpers
// ============================================================================

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyPress {
    KeyPress::from_crossterm(
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        },
        Focus::None,
    )
}

fn key(c: char) -> KeyPress {
    key_event(KeyCode::Char(c), KeyModifiers::empty())
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        assert!(!app.handle_key(key(c)));
    }
}

// ============================================================================
// Text input and focus suppression
// ============================================================================

#[test]
fn test_q_quits_outside_input() {
    let mut app = App::new(&Config::default());
    assert!(app.handle_key(key('q')));
}

#[test]
fn test_typing_in_input_does_not_trigger_shortcuts() {
    let mut app = App::new(&Config::default());
    assert!(!app.handle_key(key('i')));
    assert_eq!(app.focus, Focus::TextInput);
    assert_eq!(app.shortcuts.scope(), Scope::Editor);

    // 'q' and '?' are global shortcuts, but the field has focus
    type_text(&mut app, "q?i");
    assert_eq!(app.input, "q?i");
    assert!(app.show_help);
}

#[test]
fn test_ctrl_k_is_suppressed_while_typing() {
    let mut app = App::new(&Config::default());
    app.handle_key(key('i'));

    app.handle_key(key_event(KeyCode::Char('k'), KeyModifiers::CONTROL));

    assert!(app.menu.is_none());
    assert_eq!(app.input, "");
}

#[test]
fn test_raw_escape_and_enter_work_while_typing() {
    let mut app = App::new(&Config::default());
    app.handle_key(key('i'));
    type_text(&mut app, "hello");
    app.handle_key(key_event(KeyCode::Backspace, KeyModifiers::empty()));

    app.handle_key(key_event(KeyCode::Enter, KeyModifiers::empty()));
    assert_eq!(app.input, "");
    assert!(app.log.iter().any(|l| l == "submitted: hell"));

    app.handle_key(key_event(KeyCode::Esc, KeyModifiers::empty()));
    assert_eq!(app.focus, Focus::Element);
    assert_eq!(app.shortcuts.scope(), Scope::Global);
}

// ============================================================================
// Menu scope
// ============================================================================

#[test]
fn test_menu_enters_and_restores_scope() {
    let mut app = App::new(&Config::default());
    let before = app.shortcuts.bindings().len();

    app.handle_key(key_event(KeyCode::Char('k'), KeyModifiers::CONTROL));
    assert!(app.menu.is_some());
    assert_eq!(app.shortcuts.scope(), Scope::Menu);
    assert!(app.shortcuts.bindings().len() > before);

    app.handle_key(key_event(KeyCode::Esc, KeyModifiers::empty()));
    assert!(app.menu.is_none());
    assert_eq!(app.shortcuts.scope(), Scope::Global);
    assert_eq!(app.shortcuts.bindings().len(), before);
}

#[test]
fn test_menu_navigation_and_select() {
    let mut app = App::new(&Config::default());
    app.push_log("old entry".to_string());

    app.handle_key(key_event(KeyCode::Char('k'), KeyModifiers::CONTROL));
    app.handle_key(key('j'));
    app.handle_key(key_event(KeyCode::Down, KeyModifiers::empty()));
    assert_eq!(app.menu.as_ref().map(|m| m.selected), Some(2));
    assert_eq!(MENU_ACTIONS[2], Action::ClearLog);

    app.handle_key(key_event(KeyCode::Enter, KeyModifiers::empty()));
    assert!(app.menu.is_none());
    assert!(app.log.is_empty());
    assert_eq!(app.shortcuts.scope(), Scope::Global);
}

#[test]
fn test_menu_keys_inactive_after_close() {
    let mut app = App::new(&Config::default());
    app.handle_key(key_event(KeyCode::Char('k'), KeyModifiers::CONTROL));
    app.handle_key(key_event(KeyCode::Esc, KeyModifiers::empty()));

    app.handle_key(key('j'));
    assert_eq!(app.log.last().map(String::as_str), Some("j            (no binding)"));
}

#[test]
fn test_tab_while_menu_open_closes_menu_first() {
    let mut app = App::new(&Config::default());
    app.handle_key(key_event(KeyCode::Char('k'), KeyModifiers::CONTROL));
    assert_eq!(app.shortcuts.scope(), Scope::Menu);

    // Menu closes and restores Global, then the scope advances from there
    app.handle_key(key_event(KeyCode::Tab, KeyModifiers::empty()));
    assert!(app.menu.is_none());
    assert_eq!(app.shortcuts.scope(), Scope::Editor);

    app.handle_key(key_event(KeyCode::Esc, KeyModifiers::empty()));
    assert_eq!(app.shortcuts.scope(), Scope::Global);

    app.handle_key(key_event(KeyCode::Char('k'), KeyModifiers::CONTROL));
    assert!(app.menu.is_some());
    assert_eq!(app.shortcuts.scope(), Scope::Menu);

    app.handle_key(key_event(KeyCode::Esc, KeyModifiers::empty()));
    assert!(app.menu.is_none());
    assert_eq!(app.shortcuts.scope(), Scope::Global);
}

#[test]
fn test_focus_input_while_menu_open_closes_menu() {
    let mut app = App::new(&Config::default());
    app.handle_key(key_event(KeyCode::Char('k'), KeyModifiers::CONTROL));

    app.handle_key(key('i'));

    assert!(app.menu.is_none());
    assert_eq!(app.focus, Focus::TextInput);
    assert_eq!(app.shortcuts.scope(), Scope::Editor);
}

#[test]
fn test_alt_char_is_not_typed_into_input() {
    let mut app = App::new(&Config::default());
    app.handle_key(key('i'));

    app.handle_key(key_event(KeyCode::Char('x'), KeyModifiers::ALT));
    type_text(&mut app, "y");

    assert_eq!(app.input, "y");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_configured_binding_dispatches_action() {
    let config = Config {
        bindings: vec![BindingConfig {
            id: None,
            key: "L".to_string(),
            scope: Scope::Global,
            description: None,
            raw: false,
            ctrl: true,
            action: Action::ClearLog,
        }],
        ..Config::default()
    };
    let mut app = App::new(&config);
    assert!(app.shortcuts.is_registered("global:ctrl+l"));

    app.push_log("noise".to_string());
    app.handle_key(key_event(KeyCode::Char('l'), KeyModifiers::CONTROL));

    assert!(app.log.is_empty());
}

#[test]
fn test_configured_binding_overrides_builtin() {
    let config = config::parse(
        r#"
        [[bindings]]
        key = "q"
        action = "toggle_help"
        description = "Help instead of quit"
        "#,
    )
    .unwrap();
    let mut app = App::new(&config);

    assert!(!app.handle_key(key('q')));
    assert!(!app.show_help);
}

#[test]
fn test_initial_scope_from_config() {
    let mut config = Config::default();
    config.ui.initial_scope = Scope::Repl;
    let app = App::new(&config);
    assert_eq!(app.shortcuts.scope(), Scope::Repl);
}

#[test]
fn test_next_scope_cycles() {
    let mut app = App::new(&Config::default());
    app.update(Message::NextScope);
    assert_eq!(app.shortcuts.scope(), Scope::Editor);

    app.shortcuts.set_scope(Scope::Menu);
    app.update(Message::NextScope);
    assert_eq!(app.shortcuts.scope(), Scope::Global);
}

#[test]
fn test_configured_menu_binding_survives_menu_close() {
    let config = config::parse(
        r#"
        [[bindings]]
        key = "escape"
        scope = "menu"
        action = "toggle_help"
        "#,
    )
    .unwrap();
    let mut app = App::new(&config);
    assert!(app.shortcuts.is_registered("menu:escape"));

    app.handle_key(key_event(KeyCode::Char('k'), KeyModifiers::CONTROL));
    assert!(app.shortcuts.is_registered("menu-close"));
    app.update(Message::CloseMenu);

    assert!(!app.shortcuts.is_registered("menu-close"));
    assert!(app.shortcuts.is_registered("menu:escape"));
    assert_eq!(app.shortcuts.scope(), Scope::Global);
}
