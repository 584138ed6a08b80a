//! Help text derived from registered bindings.

use super::{Scope, ShortcutBinding};
use indexmap::IndexMap;

/// Group bindings by scope, scopes in order of first appearance.
pub fn group_by_scope(bindings: &[ShortcutBinding]) -> IndexMap<Scope, Vec<ShortcutBinding>> {
    let mut grouped: IndexMap<Scope, Vec<ShortcutBinding>> = IndexMap::new();
    for binding in bindings {
        grouped
            .entry(binding.scope)
            .or_default()
            .push(binding.clone());
    }
    grouped
}

/// Format a canonical key for display: `ctrl+k` becomes `Ctrl+K`.
pub fn display_key(key: &str) -> String {
    key.split('+')
        .map(display_part)
        .collect::<Vec<_>>()
        .join("+")
}

fn display_part(part: &str) -> String {
    match part {
        "ctrl" => "Ctrl".to_string(),
        "arrowup" | "ArrowUp" => "↑".to_string(),
        "arrowdown" | "ArrowDown" => "↓".to_string(),
        "arrowleft" | "ArrowLeft" => "←".to_string(),
        "arrowright" | "ArrowRight" => "→".to_string(),
        "escape" | "Escape" => "Esc".to_string(),
        " " => "Space".to_string(),
        _ => {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// Generate help lines for the given bindings, one section per scope.
pub fn generate_help(bindings: &[ShortcutBinding]) -> Vec<String> {
    let mut lines = Vec::new();

    for (scope, group) in group_by_scope(bindings) {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("  {}", scope.label()));
        lines.push(format!("  {}", "─".repeat(scope.label().chars().count())));

        for binding in group {
            lines.push(format!(
                "  {:14}{}",
                display_key(&binding.key),
                binding.description
            ));
        }
    }

    lines
}

/// Compact footer hints, e.g. `"Ctrl+K: menu | ?: help"`.
pub fn footer_hints(bindings: &[ShortcutBinding]) -> String {
    bindings
        .iter()
        .map(|b| format!("{}: {}", display_key(&b.key), b.description))
        .collect::<Vec<_>>()
        .join(" | ")
}
