//! Layout calculations and text utilities for the TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// Layout constants
pub const TEAM_BAR_HEIGHT: u16 = 2;
pub const SEARCH_BAR_HEIGHT: u16 = 2;
pub const STATUS_BAR_HEIGHT: u16 = 1;
pub const LIST_WIDTH_PERCENT: u16 = 40;

/// Screen regions for one frame. Absent bars take no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub team_bar: Option<Rect>,
    pub list: Rect,
    pub detail: Rect,
    pub search_bar: Option<Rect>,
    pub status_bar: Rect,
}

/// Split the terminal area into the dashboard regions.
///
/// The team bar sits on top when a roster exists, the search bar sits
/// directly above the status bar while editing, and the remaining middle band
/// is divided between the list and the detail pane.
pub fn compute_regions(area: Rect, has_teams: bool, searching: bool) -> Regions {
    let mut constraints = Vec::with_capacity(4);
    if has_teams {
        constraints.push(Constraint::Length(TEAM_BAR_HEIGHT));
    }
    constraints.push(Constraint::Min(0));
    if searching {
        constraints.push(Constraint::Length(SEARCH_BAR_HEIGHT));
    }
    constraints.push(Constraint::Length(STATUS_BAR_HEIGHT));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut rows = rows.iter().copied();
    let team_bar = if has_teams { rows.next() } else { None };
    let main = rows.next().unwrap_or_default();
    let search_bar = if searching { rows.next() } else { None };
    let status_bar = rows.next().unwrap_or_default();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(LIST_WIDTH_PERCENT),
            Constraint::Percentage(100 - LIST_WIDTH_PERCENT),
        ])
        .split(main);

    Regions {
        team_bar,
        list: columns[0],
        detail: columns[1],
        search_bar,
        status_bar,
    }
}

/// Calculate the display width of text (accounting for Unicode).
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Truncate text to a maximum display width.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > max_width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out
}

/// Truncate text with an ellipsis if it exceeds max width.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 1 {
        return "…".to_string();
    }
    let truncated = truncate_to_width(text, max_width.saturating_sub(1));
    format!("{truncated}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(width: u16, height: u16) -> Rect {
        Rect::new(0, 0, width, height)
    }

    #[test]
    fn test_regions_without_bars() {
        let r = compute_regions(area(100, 30), false, false);
        assert_eq!(r.team_bar, None);
        assert_eq!(r.search_bar, None);
        assert_eq!(r.list, Rect::new(0, 0, 40, 29));
        assert_eq!(r.detail, Rect::new(40, 0, 60, 29));
        assert_eq!(r.status_bar, Rect::new(0, 29, 100, 1));
    }

    #[test]
    fn test_search_bar_pushes_main_up() {
        let plain = compute_regions(area(100, 30), true, false);
        let searching = compute_regions(area(100, 30), true, true);

        assert_eq!(plain.team_bar, Some(Rect::new(0, 0, 100, 2)));
        assert_eq!(plain.list.y, 2);
        assert_eq!(searching.list.height, plain.list.height - 2);
        assert_eq!(searching.search_bar, Some(Rect::new(0, 27, 100, 2)));
        assert_eq!(searching.status_bar, plain.status_bar);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("日本語", 4), "日本");
        assert_eq!(display_width("日本"), 4);
        assert_eq!(truncate_with_ellipsis("abcdef", 4), "abc…");
        assert_eq!(truncate_with_ellipsis("abc", 4), "abc");
    }
}
