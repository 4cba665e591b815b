//! Centralized keybindings system.
//!
//! This module provides a single source of truth for all keybindings in the application.
//! The registry defines all bindings, and dispatch/help generation are derived from it.

mod dispatch;
mod help;
mod registry;

pub use dispatch::dispatch;
pub use help::{generate_footer_hints, generate_help_lines};
pub use registry::BINDINGS;

use crate::data::Focus;
use crate::tui::Message;
use crossterm::event::{KeyCode, KeyModifiers};

/// All contexts where keybindings apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Issue list and detail pane
    Normal,
    /// Search input mode (typing in search bar)
    Search,
}

impl Mode {
    /// Returns true if this mode accepts text input (chars are not dispatched as commands).
    pub fn is_text_input(&self) -> bool {
        matches!(self, Mode::Search)
    }
}

impl From<Focus> for Mode {
    fn from(focus: Focus) -> Self {
        match focus {
            Focus::Normal => Mode::Normal,
            Focus::SearchEditing => Mode::Search,
        }
    }
}

/// Categories for grouping bindings in help display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Navigation,
    Filters,
    Search,
    Actions,
    Application,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Navigation => "Navigation",
            Category::Filters => "Filters",
            Category::Search => "Search",
            Category::Actions => "Actions",
            Category::Application => "Application",
        }
    }
}

/// Pattern for matching key events.
#[derive(Debug, Clone)]
pub enum KeyPattern {
    /// Single key without modifiers (e.g., 'j', Enter, Esc)
    Single(KeyCode),
    /// Key with modifiers (e.g., Ctrl+c)
    WithModifier { key: KeyCode, mods: KeyModifiers },
}

impl KeyPattern {
    /// Format this pattern for display in help text.
    pub fn display(&self) -> String {
        match self {
            KeyPattern::Single(code) => format_keycode(code),
            KeyPattern::WithModifier { key, mods } => {
                let mut result = String::new();
                if mods.contains(KeyModifiers::CONTROL) {
                    result.push_str("Ctrl+");
                }
                if mods.contains(KeyModifiers::ALT) {
                    result.push_str("Alt+");
                }
                if mods.contains(KeyModifiers::SHIFT) {
                    result.push_str("Shift+");
                }
                result.push_str(&format_keycode(key));
                result
            }
        }
    }
}

/// Format a KeyCode for display.
fn format_keycode(code: &KeyCode) -> String {
    match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => format!("{:?}", code),
    }
}

/// A complete keybinding definition.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    /// Modes where this binding applies
    pub modes: &'static [Mode],
    /// The key pattern to match
    pub pattern: KeyPattern,
    /// Message produced when the binding fires
    pub message: Message,
    /// Human-readable description for help text
    pub description: &'static str,
    /// Category for grouping in help
    pub category: Category,
    /// Alternative key patterns (e.g., j and Down for same action)
    pub alternatives: &'static [KeyPattern],
    /// Status line hint as (keys, label); `None` keeps the binding out of the footer
    pub footer: Option<(&'static str, &'static str)>,
}
