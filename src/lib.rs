//! keyscope - scoped keyboard shortcut registry and dispatch engine
//!
//! This library crate exposes the engine, configuration and the terminal
//! playground for integration testing.

pub mod config;
pub mod keybindings;
pub mod tui;
