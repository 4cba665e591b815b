//! Message enum for Elm Architecture (TEA) pattern.
//!
//! All possible user actions in the application are represented as messages.
//! This enables unidirectional data flow and testable update logic.

/// All possible user actions in the application.
///
/// Messages are dispatched from key events and processed by the `App::update()` method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────────────────────
    // App lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Quit the application
    Quit,
    /// Refetch issues for the current team
    Refresh,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move cursor up by one
    MoveUp,
    /// Move cursor down by one
    MoveDown,
    /// Show the issue under the cursor in the detail pane
    Select,

    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the "assigned to me" filter
    ToggleAssigned,
    /// Cycle to the previous status view
    PrevView,
    /// Cycle to the next status view
    NextView,
    /// Switch to the previous team and refetch
    PrevTeam,
    /// Switch to the next team and refetch
    NextTeam,

    // ─────────────────────────────────────────────────────────────────────────
    // Search mode
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the search bar, seeded with the active search
    OpenSearch,
    /// Add a character to the search buffer
    SearchInput(char),
    /// Remove last character from the search buffer
    SearchBackspace,
    /// Apply the buffer as the title filter
    ApplySearch,
    /// Discard the buffer and clear the title filter
    CancelSearch,

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the help screen in the detail pane
    ToggleHelp,
    /// Copy the selected issue's URL
    CopyUrl,
    /// Copy the selected issue's branch name
    CopyBranch,

    // ─────────────────────────────────────────────────────────────────────────
    // No-op
    // ─────────────────────────────────────────────────────────────────────────
    /// No operation (for unhandled keys)
    None,
}
