use crate::data::{Focus, ViewState};
use crate::integrations::clipboard::Clipboard;
use crate::integrations::{self, IssueSource};
use crate::tui::Message;
use anyhow::Result;

/// Which field of the selected issue a copy action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyTarget {
    Url,
    Branch,
}

impl CopyTarget {
    fn label(&self) -> &'static str {
        match self {
            CopyTarget::Url => "URL",
            CopyTarget::Branch => "branch name",
        }
    }
}

pub struct App {
    pub view: ViewState,
    source: Box<dyn IssueSource>,
    clipboard: Box<dyn Clipboard>,
    /// Transient status line text, cleared by the next key press
    pub status_message: Option<String>,
}

impl App {
    pub fn new(source: Box<dyn IssueSource>, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            view: ViewState::new(),
            source,
            clipboard,
            status_message: None,
        }
    }

    /// Startup fetches: team roster, current user, then issues for the first team.
    pub async fn load_initial(&mut self) {
        let teams = integrations::fetch_teams_or_empty(self.source.as_ref()).await;
        tracing::info!("Loaded {} teams", teams.len());
        self.view.set_teams(teams);

        let viewer = integrations::fetch_viewer_or_none(self.source.as_ref()).await;
        self.view.set_viewer(viewer);

        self.refresh().await;
    }

    /// Refetch issues for the current team, or unscoped when there is none.
    pub async fn refresh(&mut self) {
        let team_id = self.view.current_team().map(|t| t.id.clone());
        let fetched = integrations::fetch_issues(self.source.as_ref(), team_id.as_deref()).await;
        if let Err(e) = &fetched {
            tracing::warn!("Failed to fetch issues: {:#}", e);
        }
        self.view.load_issues(fetched);
    }

    /// Process a message and update app state (Elm Architecture update function).
    ///
    /// Returns `Ok(true)` if the app should quit, `Ok(false)` to continue.
    pub async fn update(&mut self, msg: Message) -> Result<bool> {
        if msg != Message::None {
            self.status_message = None;
        }

        let normal = self.view.focus() == Focus::Normal;
        let searching = self.view.focus() == Focus::SearchEditing;

        match msg {
            // ─────────────────────────────────────────────────────────────────
            // App lifecycle
            // ─────────────────────────────────────────────────────────────────
            Message::Quit => return Ok(true),
            Message::Refresh => self.refresh().await,

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Message::MoveUp if normal => self.view.move_up(),
            Message::MoveDown if normal => self.view.move_down(),
            Message::Select if normal => self.view.select(),

            // ─────────────────────────────────────────────────────────────────
            // Filters
            // ─────────────────────────────────────────────────────────────────
            Message::ToggleAssigned if normal => self.view.toggle_assigned(),
            Message::PrevView if normal => self.view.prev_view(),
            Message::NextView if normal => self.view.next_view(),
            Message::PrevTeam if normal => {
                if self.view.prev_team() {
                    self.refresh().await;
                }
            }
            Message::NextTeam if normal => {
                if self.view.next_team() {
                    self.refresh().await;
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Search mode
            // ─────────────────────────────────────────────────────────────────
            Message::OpenSearch if normal => self.view.open_search(),
            Message::SearchInput(c) if searching => self.view.search_input(c),
            Message::SearchBackspace if searching => self.view.search_backspace(),
            Message::ApplySearch if searching => self.view.apply_search(),
            Message::CancelSearch if searching => self.view.cancel_search(),

            // ─────────────────────────────────────────────────────────────────
            // Actions
            // ─────────────────────────────────────────────────────────────────
            Message::ToggleHelp => self.view.toggle_help(),
            Message::CopyUrl if normal => self.copy_selected(CopyTarget::Url),
            Message::CopyBranch if normal => self.copy_selected(CopyTarget::Branch),

            _ => {}
        }

        Ok(false)
    }

    fn copy_selected(&mut self, target: CopyTarget) {
        let Some(issue) = self.view.selected_issue() else {
            return;
        };
        let text = match target {
            CopyTarget::Url => issue.url.clone(),
            CopyTarget::Branch => issue.branch_name.clone(),
        };
        if text.is_empty() {
            return;
        }

        self.status_message = Some(match self.clipboard.copy(&text) {
            Ok(()) => format!("Copied {}: {}", target.label(), text),
            Err(e) => {
                tracing::warn!("Failed to copy {}: {:#}", target.label(), e);
                format!("Copy failed: {:#}", e)
            }
        });
    }
}
