use crate::keybindings::{normalize_key, Scope};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub initial_scope: Scope,
    #[serde(default = "default_true")]
    pub show_help: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_scope: Scope::Global,
            show_help: true,
        }
    }
}

/// A user-defined shortcut bound to a playground action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConfig {
    #[serde(default)]
    pub id: Option<String>,
    pub key: String,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub description: Option<String>,
    /// Match the literal key value instead of the canonical key
    #[serde(default)]
    pub raw: bool,
    /// Require control (or meta)
    #[serde(default)]
    pub ctrl: bool,
    pub action: Action,
}

impl BindingConfig {
    /// Key as stored in the registry.
    pub fn registry_key(&self) -> String {
        if self.raw {
            self.key.clone()
        } else {
            normalize_key(&self.key, self.ctrl)
        }
    }
}

/// Named actions the playground can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Quit,
    ToggleHelp,
    OpenMenu,
    CloseMenu,
    FocusInput,
    Blur,
    ClearLog,
    NextScope,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Quit => "Quit",
            Action::ToggleHelp => "Toggle help",
            Action::OpenMenu => "Open menu",
            Action::CloseMenu => "Close menu",
            Action::FocusInput => "Focus input",
            Action::Blur => "Leave input",
            Action::ClearLog => "Clear log",
            Action::NextScope => "Cycle scope",
        }
    }
}

pub fn config_dir() -> Result<PathBuf> {
    let dir = directories::ProjectDirs::from("", "", "keyscope")
        .context("Could not determine config directory")?
        .config_dir()
        .to_path_buf();
    Ok(dir)
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load the config. A missing default file yields defaults; a missing
/// explicitly named file is an error.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    parse(&content).with_context(|| format!("Failed to parse config from {}", path.display()))
}

pub fn parse(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    Ok(config)
}

/// Write the default config to `path` (or the default location).
pub fn init(path: Option<&Path>) -> Result<PathBuf> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if config_path.exists() {
        anyhow::bail!("Config already exists at {}", config_path.display());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let config = Config {
        bindings: vec![BindingConfig {
            id: Some("clear-log".to_string()),
            key: "l".to_string(),
            scope: Scope::Global,
            description: None,
            raw: false,
            ctrl: true,
            action: Action::ClearLog,
        }],
        ..Config::default()
    };
    let content = toml::to_string_pretty(&config)?;
    std::fs::write(&config_path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&config_path, std::fs::Permissions::from_mode(0o600))?;
    }

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.ui.initial_scope, Scope::Global);
        assert!(config.ui.show_help);
        assert!(config.bindings.is_empty());
    }

    #[test]
    fn test_binding_registry_key() {
        let config = parse(
            r#"
            [[bindings]]
            key = "K"
            ctrl = true
            scope = "editor"
            action = "open_menu"

            [[bindings]]
            key = "Escape"
            raw = true
            action = "blur"
            "#,
        )
        .unwrap();

        assert_eq!(config.bindings[0].registry_key(), "ctrl+k");
        assert_eq!(config.bindings[0].scope, Scope::Editor);
        assert_eq!(config.bindings[1].registry_key(), "Escape");
        assert_eq!(config.bindings[1].action, Action::Blur);
    }

    #[test]
    fn test_unknown_scope_rejected() {
        let result = parse(
            r#"
            [[bindings]]
            key = "k"
            scope = "sidebar"
            action = "quit"
            "#,
        );
        assert!(result.is_err());
    }
}
