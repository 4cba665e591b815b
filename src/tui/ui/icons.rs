//! Glyphs used throughout the UI.

// Linear Status - Fractional circles (like Linear app)
pub const STATUS_BACKLOG: &str = "○"; // Empty circle
pub const STATUS_TODO: &str = "◔"; // 1/4 filled
pub const STATUS_BLOCKED: &str = "⊘"; // Slashed circle
pub const STATUS_IN_PROGRESS: &str = "◑"; // 1/2 filled
pub const STATUS_IN_REVIEW: &str = "◕"; // 3/4 filled
pub const STATUS_UNKNOWN: &str = "·";

// Team bar
pub const TEAM_ACTIVE_LEFT: &str = "[ ";
pub const TEAM_ACTIVE_RIGHT: &str = " ]";
