use crate::config::{Action, Config};
use crate::keybindings::{
    normalize_key, BindingGuard, DispatchOutcome, Focus, KeyPress, NewBinding, Scope, ScopeGuard,
    Shortcuts,
};
use crate::tui::Message;
use std::rc::Rc;
use tokio::sync::mpsc;

/// Maximum number of entries kept in the event log
pub const LOG_CAPACITY: usize = 200;

/// Entries offered by the menu, in display order
pub const MENU_ACTIONS: [Action; 4] = [
    Action::ToggleHelp,
    Action::NextScope,
    Action::ClearLog,
    Action::Quit,
];

/// An open menu. Its bindings and scope live exactly as long as it does.
pub struct Menu {
    pub selected: usize,
    _bindings: Vec<BindingGuard>,
    _scope: ScopeGuard,
}

pub struct App {
    pub shortcuts: Rc<Shortcuts>,
    pub focus: Focus,
    pub input: String,
    pub log: Vec<String>,
    pub show_help: bool,
    pub menu: Option<Menu>,

    tx: mpsc::UnboundedSender<Message>,
    rx: mpsc::UnboundedReceiver<Message>,
    _bindings: Vec<BindingGuard>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let shortcuts = Rc::new(Shortcuts::new());
        shortcuts.set_scope(config.ui.initial_scope);
        let (tx, rx) = mpsc::unbounded_channel();

        let mut app = Self {
            shortcuts,
            focus: Focus::Element,
            input: String::new(),
            log: Vec::new(),
            show_help: config.ui.show_help,
            menu: None,
            tx,
            rx,
            _bindings: Vec::new(),
        };
        let mut bindings = app.builtin_bindings();
        bindings.extend(app.configured_bindings(config));
        app._bindings = bindings;
        app.shortcuts.init();
        app
    }

    /// Bindings that exist for the whole session.
    fn builtin_bindings(&self) -> Vec<BindingGuard> {
        vec![
            self.bind("q", Scope::Global, Message::Quit, "Quit"),
            self.bind("?", Scope::Global, Message::ToggleHelp, "Toggle help"),
            self.bind(&normalize_key("k", true), Scope::Global, Message::OpenMenu, "Open menu"),
            self.bind("i", Scope::Global, Message::FocusInput, "Focus input"),
            self.bind("tab", Scope::Global, Message::NextScope, "Cycle scope"),
            self.bind_raw("Escape", Scope::Editor, Message::Blur, "Leave input"),
            self.bind_raw("Enter", Scope::Editor, Message::Submit, "Submit input"),
        ]
    }

    fn configured_bindings(&self, config: &Config) -> Vec<BindingGuard> {
        config
            .bindings
            .iter()
            .map(|entry| {
                let tx = self.tx.clone();
                let message = Message::from(entry.action);
                let description = entry
                    .description
                    .clone()
                    .unwrap_or_else(|| entry.action.label().to_string());

                let mut binding =
                    NewBinding::new(entry.registry_key(), entry.scope, description, move |_| {
                        let _ = tx.send(message.clone());
                    });
                if let Some(id) = &entry.id {
                    binding = binding.with_id(id.clone());
                }
                if entry.raw {
                    binding = binding.raw_key();
                }
                self.shortcuts.bind(binding)
            })
            .collect()
    }

    fn handler(&self, message: Message) -> impl Fn(&KeyPress) + 'static {
        let tx = self.tx.clone();
        move |_| {
            // Receiver lives in the app, it only closes on shutdown
            let _ = tx.send(message.clone());
        }
    }

    fn bind(&self, key: &str, scope: Scope, message: Message, description: &str) -> BindingGuard {
        self.shortcuts
            .bind(NewBinding::new(key, scope, description, self.handler(message)))
    }

    fn bind_raw(
        &self,
        key: &str,
        scope: Scope,
        message: Message,
        description: &str,
    ) -> BindingGuard {
        self.shortcuts
            .bind(NewBinding::new(key, scope, description, self.handler(message)).raw_key())
    }

    fn bind_menu(
        &self,
        id: &str,
        key: &str,
        message: Message,
        description: &str,
    ) -> BindingGuard {
        self.shortcuts.bind(
            NewBinding::new(key, Scope::Menu, description, self.handler(message)).with_id(id),
        )
    }

    /// Feed one key press through the shortcut engine, then apply any
    /// messages its handler sent. Returns true if quit was requested.
    pub fn handle_key(&mut self, mut press: KeyPress) -> bool {
        press.focus = self.focus;
        let outcome = self.shortcuts.dispatch(&mut press);
        self.record(&press, &outcome);

        if !press.default_prevented {
            self.default_key_action(&press);
        }

        self.drain_messages()
    }

    /// Apply queued messages. Returns true if quit was requested.
    pub fn drain_messages(&mut self) -> bool {
        while let Ok(msg) = self.rx.try_recv() {
            if self.update(msg) {
                return true;
            }
        }
        false
    }

    fn record(&mut self, press: &KeyPress, outcome: &DispatchOutcome) {
        let entry = match outcome {
            DispatchOutcome::Handled { id } => format!("{:<12} -> {}", press.key, id),
            DispatchOutcome::Suppressed | DispatchOutcome::Inactive => return,
            DispatchOutcome::Unmatched => format!("{:<12} (no binding)", press.key),
        };
        self.push_log(entry);
    }

    /// What the host does with keys no shortcut claimed.
    fn default_key_action(&mut self, press: &KeyPress) {
        if !self.focus.is_editable() {
            return;
        }
        if press.key == "Backspace" {
            self.input.pop();
        } else if let Some(c) = press.as_char() {
            self.input.push(c);
        }
    }

    pub fn push_log(&mut self, entry: String) {
        self.log.push(entry);
        if self.log.len() > LOG_CAPACITY {
            let excess = self.log.len() - LOG_CAPACITY;
            self.log.drain(..excess);
        }
    }

    /// Apply a message. Returns true if the app should quit.
    pub fn update(&mut self, msg: Message) -> bool {
        match msg {
            Message::Quit => return true,
            Message::ToggleHelp => self.show_help = !self.show_help,
            Message::ClearLog => self.log.clear(),
            Message::NextScope => {
                // Closing first restores the scope the menu saved
                self.menu = None;
                let current = self.shortcuts.scope();
                let idx = Scope::ALL.iter().position(|s| *s == current).unwrap_or(0);
                self.shortcuts
                    .set_scope(Scope::ALL[(idx + 1) % Scope::ALL.len()]);
            }
            Message::FocusInput => {
                self.menu = None;
                self.focus = Focus::TextInput;
                self.shortcuts.set_scope(Scope::Editor);
            }
            Message::Blur => {
                self.focus = Focus::Element;
                self.shortcuts.set_scope(Scope::Global);
            }
            Message::Submit => {
                if !self.input.is_empty() {
                    let text = std::mem::take(&mut self.input);
                    self.push_log(format!("submitted: {}", text));
                }
            }
            Message::OpenMenu => self.open_menu(),
            Message::CloseMenu => self.menu = None,
            Message::MenuUp => {
                if let Some(menu) = &mut self.menu {
                    menu.selected = menu.selected.saturating_sub(1);
                }
            }
            Message::MenuDown => {
                if let Some(menu) = &mut self.menu {
                    menu.selected = (menu.selected + 1).min(MENU_ACTIONS.len() - 1);
                }
            }
            Message::MenuSelect => {
                if let Some(menu) = self.menu.take() {
                    let action = MENU_ACTIONS[menu.selected];
                    drop(menu);
                    return self.update(action.into());
                }
            }
        }
        false
    }

    fn open_menu(&mut self) {
        if self.menu.is_some() {
            return;
        }
        let scope = self.shortcuts.scoped(Scope::Menu);
        // Explicit ids keep configured `menu:<key>` bindings from being replaced
        let bindings = vec![
            self.bind_menu("menu-up", "arrowup", Message::MenuUp, "Previous entry"),
            self.bind_menu("menu-up-vim", "k", Message::MenuUp, "Previous entry"),
            self.bind_menu("menu-down", "arrowdown", Message::MenuDown, "Next entry"),
            self.bind_menu("menu-down-vim", "j", Message::MenuDown, "Next entry"),
            self.bind_menu("menu-select", "enter", Message::MenuSelect, "Run entry"),
            self.bind_menu("menu-close", "escape", Message::CloseMenu, "Close menu"),
        ];
        self.menu = Some(Menu {
            selected: 0,
            _bindings: bindings,
            _scope: scope,
        });
    }
}
