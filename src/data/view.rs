//! View state: the single source of truth for what the dashboard shows.
//!
//! Every filter change re-derives `issues` from `all_issues` and clears the
//! selection, so a stale index can never point past the end of the list.

use super::{derive_issues, Issue, StatusView, Team, Viewer};
use anyhow::Result;

/// Which widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Normal,
    SearchEditing,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    all_issues: Vec<Issue>,
    issues: Vec<Issue>,
    cursor: usize,
    scroll: usize,
    list_height: usize,
    selected: Option<usize>,
    status_view: StatusView,
    assigned_to_me: bool,
    search_text: String,
    search_buffer: String,
    teams: Vec<Team>,
    current_team: usize,
    viewer: Option<Viewer>,
    focus: Focus,
    show_help: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn all_issues(&self) -> &[Issue] {
        &self.all_issues
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_issue(&self) -> Option<&Issue> {
        self.selected.and_then(|idx| self.issues.get(idx))
    }

    pub fn status_view(&self) -> StatusView {
        self.status_view
    }

    pub fn assigned_to_me(&self) -> bool {
        self.assigned_to_me
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn search_buffer(&self) -> &str {
        &self.search_buffer
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn current_team_index(&self) -> usize {
        self.current_team
    }

    pub fn current_team(&self) -> Option<&Team> {
        self.teams.get(self.current_team)
    }

    pub fn viewer(&self) -> Option<&Viewer> {
        self.viewer.as_ref()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Data loading
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_teams(&mut self, teams: Vec<Team>) {
        self.teams = teams;
        self.current_team = 0;
    }

    pub fn set_viewer(&mut self, viewer: Option<Viewer>) {
        self.viewer = viewer;
        self.recompute();
    }

    /// Replace the fetched set wholesale; a failed fetch becomes a single placeholder issue.
    pub fn load_issues(&mut self, fetched: Result<Vec<Issue>>) {
        self.all_issues = match fetched {
            Ok(issues) => issues,
            Err(e) => vec![Issue::placeholder(&e)],
        };
        self.recompute();
    }

    /// Re-derive `issues` from the active filters and clear the selection.
    pub fn recompute(&mut self) {
        self.issues = derive_issues(
            &self.all_issues,
            self.status_view,
            self.assigned_to_me,
            self.viewer.as_ref().map(|v| v.id.as_str()),
            &self.search_text,
        );
        self.selected = None;

        if self.issues.is_empty() {
            self.cursor = 0;
            self.scroll = 0;
        } else if self.cursor >= self.issues.len() {
            self.cursor = self.issues.len() - 1;
        }
        self.scroll = self.scroll.min(self.cursor);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Record how many list rows fit on screen; used to keep the cursor visible.
    pub fn set_list_height(&mut self, height: usize) {
        self.list_height = height;
        self.scroll = self.visible_scroll(height);
    }

    pub fn move_down(&mut self) {
        if self.issues.is_empty() || self.cursor + 1 >= self.issues.len() {
            return;
        }
        self.cursor += 1;
        let height = self.list_height.max(1);
        if self.cursor >= self.scroll + height {
            self.scroll = self.cursor + 1 - height;
        }
    }

    pub fn move_up(&mut self) {
        if self.issues.is_empty() || self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        }
    }

    /// Show the issue under the cursor in the detail pane.
    pub fn select(&mut self) {
        if self.cursor < self.issues.len() {
            self.selected = Some(self.cursor);
        }
    }

    /// First visible row for a list of `height` rows, keeping the cursor on screen.
    pub fn visible_scroll(&self, height: usize) -> usize {
        let height = height.max(1);
        if self.cursor < self.scroll {
            self.cursor
        } else if self.cursor >= self.scroll + height {
            self.cursor + 1 - height
        } else {
            self.scroll
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_assigned(&mut self) {
        self.assigned_to_me = !self.assigned_to_me;
        self.recompute();
    }

    pub fn next_view(&mut self) {
        self.status_view = self.status_view.next();
        self.recompute();
    }

    pub fn prev_view(&mut self) {
        self.status_view = self.status_view.prev();
        self.recompute();
    }

    /// Advance to the next team. Returns false when there is no roster to cycle.
    pub fn next_team(&mut self) -> bool {
        if self.teams.is_empty() {
            return false;
        }
        self.current_team = (self.current_team + 1) % self.teams.len();
        true
    }

    pub fn prev_team(&mut self) -> bool {
        if self.teams.is_empty() {
            return false;
        }
        let len = self.teams.len();
        self.current_team = (self.current_team + len - 1) % len;
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search editing
    // ─────────────────────────────────────────────────────────────────────────

    pub fn open_search(&mut self) {
        self.focus = Focus::SearchEditing;
        self.search_buffer = self.search_text.clone();
    }

    pub fn search_input(&mut self, c: char) {
        if self.focus == Focus::SearchEditing {
            self.search_buffer.push(c);
        }
    }

    pub fn search_backspace(&mut self) {
        if self.focus == Focus::SearchEditing {
            self.search_buffer.pop();
        }
    }

    pub fn apply_search(&mut self) {
        self.search_text = self.search_buffer.trim().to_string();
        self.search_buffer.clear();
        self.focus = Focus::Normal;
        self.recompute();
    }

    pub fn cancel_search(&mut self) {
        self.search_buffer.clear();
        self.search_text.clear();
        self.focus = Focus::Normal;
        self.recompute();
    }
}
