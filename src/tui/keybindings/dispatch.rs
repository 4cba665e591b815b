//! Dispatch logic using the keybindings registry.
//!
//! Matches key events against the registry and returns the bound message.
//! Dispatch is pure: it reads only the current focus and the key.

use super::registry::BINDINGS;
use super::{KeyPattern, Mode};
use crate::data::Focus;
use crate::tui::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key event to a message for the given focus.
pub fn dispatch(focus: Focus, key: KeyEvent) -> Message {
    let mode = Mode::from(focus);

    if let Some(msg) = dispatch_binding(mode, &key) {
        return msg;
    }

    // Unbound printable characters are typed into the search buffer
    if mode.is_text_input() {
        if let KeyCode::Char(c) = key.code {
            if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
                return Message::SearchInput(c);
            }
        }
    }

    Message::None
}

fn dispatch_binding(mode: Mode, key: &KeyEvent) -> Option<Message> {
    BINDINGS
        .iter()
        .filter(|binding| binding.modes.contains(&mode))
        .find(|binding| {
            matches_pattern(&binding.pattern, key)
                || binding
                    .alternatives
                    .iter()
                    .any(|alt| matches_pattern(alt, key))
        })
        .map(|binding| binding.message)
}

/// Check if a key event matches a pattern.
fn matches_pattern(pattern: &KeyPattern, key: &KeyEvent) -> bool {
    match pattern {
        KeyPattern::Single(code) => {
            if key.code != *code {
                return false;
            }
            // Allow empty modifiers, or SHIFT for characters that require it
            if key.modifiers.is_empty() {
                return true;
            }
            // Allow SHIFT modifier for uppercase letters and shifted symbols
            if key.modifiers == KeyModifiers::SHIFT {
                if let KeyCode::Char(c) = key.code {
                    return c.is_ascii_uppercase() || "~!@#$%^&*()_+{}|:\"<>?".contains(c);
                }
            }
            false
        }
        KeyPattern::WithModifier { key: code, mods } => {
            key.code == *code && key.modifiers == *mods
        }
    }
}
