//! Static registry of all keybindings.
//!
//! This is THE SINGLE SOURCE OF TRUTH for all keybindings in the application.
//! Dispatch, the help screen and the status line hints all derive from this registry.

use super::{Category, KeyBinding, KeyPattern, Mode};
use crate::tui::Message;
use crossterm::event::{KeyCode, KeyModifiers};

/// All keybindings in the application.
///
/// Bindings are organized by mode and category. The dispatch system
/// searches this list in order and the first match wins.
pub static BINDINGS: &[KeyBinding] = &[
    // ═══════════════════════════════════════════════════════════════════════════
    // NORMAL MODE
    // ═══════════════════════════════════════════════════════════════════════════

    // Navigation
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Char('j')),
        message: Message::MoveDown,
        description: "Move down",
        category: Category::Navigation,
        alternatives: &[KeyPattern::Single(KeyCode::Down)],
        footer: Some(("j/k/↑/↓", "navigate")),
    },
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Char('k')),
        message: Message::MoveUp,
        description: "Move up",
        category: Category::Navigation,
        alternatives: &[KeyPattern::Single(KeyCode::Up)],
        footer: None,
    },
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Enter),
        message: Message::Select,
        description: "Show issue details",
        category: Category::Navigation,
        alternatives: &[],
        footer: Some(("Enter", "select")),
    },
    // Filters
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Char('[')),
        message: Message::PrevView,
        description: "Previous status view",
        category: Category::Filters,
        alternatives: &[],
        footer: Some(("[/]", "switch view")),
    },
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Char(']')),
        message: Message::NextView,
        description: "Next status view",
        category: Category::Filters,
        alternatives: &[],
        footer: None,
    },
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Char('{')),
        message: Message::PrevTeam,
        description: "Previous team",
        category: Category::Filters,
        alternatives: &[],
        footer: None,
    },
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Char('}')),
        message: Message::NextTeam,
        description: "Next team",
        category: Category::Filters,
        alternatives: &[],
        footer: None,
    },
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Char('a')),
        message: Message::ToggleAssigned,
        description: "Toggle my issues",
        category: Category::Filters,
        alternatives: &[],
        footer: Some(("a", "my issues")),
    },
    // Search
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Char('/')),
        message: Message::OpenSearch,
        description: "Search titles",
        category: Category::Search,
        alternatives: &[],
        footer: Some(("/", "search")),
    },
    // Actions
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Char('r')),
        message: Message::Refresh,
        description: "Refresh issues",
        category: Category::Actions,
        alternatives: &[],
        footer: Some(("r", "refresh")),
    },
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Char(',')),
        message: Message::CopyUrl,
        description: "Copy issue URL",
        category: Category::Actions,
        alternatives: &[],
        footer: None,
    },
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Char('.')),
        message: Message::CopyBranch,
        description: "Copy branch name",
        category: Category::Actions,
        alternatives: &[],
        footer: None,
    },
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Char('h')),
        message: Message::ToggleHelp,
        description: "Toggle help",
        category: Category::Actions,
        alternatives: &[KeyPattern::Single(KeyCode::Char('?'))],
        footer: Some(("h", "help")),
    },
    KeyBinding {
        modes: &[Mode::Normal],
        pattern: KeyPattern::Single(KeyCode::Char('q')),
        message: Message::Quit,
        description: "Quit",
        category: Category::Application,
        alternatives: &[],
        footer: None,
    },
    // ═══════════════════════════════════════════════════════════════════════════
    // SEARCH MODE
    // ═══════════════════════════════════════════════════════════════════════════
    KeyBinding {
        modes: &[Mode::Search],
        pattern: KeyPattern::Single(KeyCode::Enter),
        message: Message::ApplySearch,
        description: "Apply search",
        category: Category::Search,
        alternatives: &[],
        footer: Some(("Enter", "apply")),
    },
    KeyBinding {
        modes: &[Mode::Search],
        pattern: KeyPattern::Single(KeyCode::Esc),
        message: Message::CancelSearch,
        description: "Cancel and clear search",
        category: Category::Search,
        alternatives: &[KeyPattern::WithModifier {
            key: KeyCode::Char('q'),
            mods: KeyModifiers::CONTROL,
        }],
        footer: Some(("Esc", "cancel")),
    },
    KeyBinding {
        modes: &[Mode::Search],
        pattern: KeyPattern::Single(KeyCode::Backspace),
        message: Message::SearchBackspace,
        description: "Delete character",
        category: Category::Search,
        alternatives: &[],
        footer: None,
    },
    // ═══════════════════════════════════════════════════════════════════════════
    // ANY MODE
    // ═══════════════════════════════════════════════════════════════════════════
    KeyBinding {
        modes: &[Mode::Normal, Mode::Search],
        pattern: KeyPattern::WithModifier {
            key: KeyCode::Char('c'),
            mods: KeyModifiers::CONTROL,
        },
        message: Message::Quit,
        description: "Quit",
        category: Category::Application,
        alternatives: &[],
        footer: Some(("Ctrl+C", "quit")),
    },
    KeyBinding {
        modes: &[Mode::Normal, Mode::Search],
        pattern: KeyPattern::Single(KeyCode::F(5)),
        message: Message::Refresh,
        description: "Refresh issues",
        category: Category::Application,
        alternatives: &[],
        footer: None,
    },
    KeyBinding {
        modes: &[Mode::Normal, Mode::Search],
        pattern: KeyPattern::Single(KeyCode::F(1)),
        message: Message::ToggleHelp,
        description: "Toggle help",
        category: Category::Application,
        alternatives: &[],
        footer: None,
    },
];
