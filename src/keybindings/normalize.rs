//! Canonical key strings.
//!
//! A canonical key is the lower-cased key name, prefixed with `ctrl+` when
//! control or the platform meta key is held. Shift is ignored: `K` and
//! `Shift+k` both normalize to `k`.

use super::event::KeyPress;

/// Modifier names that are never emitted as the key component.
const MODIFIER_KEYS: &[&str] = &["ctrl", "shift", "alt"];

/// Token prepended when control or meta is held.
const CTRL_TOKEN: &str = "ctrl";

/// Normalize a live key event into its canonical key.
pub fn normalize_event(event: &KeyPress) -> String {
    compose(&event.key, event.ctrl || event.meta)
}

/// Normalize a key that is not attached to a live event.
///
/// Used to build binding keys and display labels, e.g.
/// `normalize_key("K", true) == "ctrl+k"`.
pub fn normalize_key(key: &str, has_ctrl_or_meta: bool) -> String {
    compose(key, has_ctrl_or_meta)
}

fn compose(key: &str, has_ctrl_or_meta: bool) -> String {
    let key = key.to_lowercase();

    let mut parts: Vec<&str> = Vec::with_capacity(2);
    if has_ctrl_or_meta {
        parts.push(CTRL_TOKEN);
    }
    if !is_modifier_key(&key) {
        parts.push(&key);
    }
    parts.join("+")
}

/// Whether a lower-cased key name is a bare modifier.
pub fn is_modifier_key(key: &str) -> bool {
    MODIFIER_KEYS.contains(&key)
}
