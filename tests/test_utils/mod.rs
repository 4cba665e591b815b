//! Test utilities and fixtures for lazylinear tests
#![allow(dead_code)]

use anyhow::{bail, Result};
use async_trait::async_trait;
use lazylinear::data::{Assignee, Issue, Team, Viewer};
use lazylinear::integrations::clipboard::Clipboard;
use lazylinear::integrations::IssueSource;
use lazylinear::tui::App;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub fn make_issue(identifier: &str, title: &str, state: &str) -> Issue {
    Issue {
        id: format!("id-{}", identifier),
        identifier: identifier.to_string(),
        title: title.to_string(),
        state: state.to_string(),
        url: format!("https://linear.app/test/issue/{}", identifier),
        branch_name: format!("user/{}", identifier.to_lowercase()),
        ..Issue::default()
    }
}

pub fn assigned(mut issue: Issue, user_id: &str, name: &str) -> Issue {
    issue.assignee = Some(Assignee {
        id: user_id.to_string(),
        name: name.to_string(),
    });
    issue
}

pub fn team(id: &str, name: &str, key: &str) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        key: key.to_string(),
    }
}

pub fn viewer(id: &str, name: &str) -> Viewer {
    Viewer {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Mutable backing data for `FakeSource`, shared with the test body.
#[derive(Default)]
pub struct FakeState {
    /// Issues returned when no team is given or the team has no entry
    pub issues: Vec<Issue>,
    pub team_issues: HashMap<String, Vec<Issue>>,
    pub teams: Vec<Team>,
    pub viewer: Option<Viewer>,
    pub issues_error: Option<String>,
    pub teams_error: Option<String>,
    /// Team argument of every issue fetch, in call order
    pub requests: Vec<Option<String>>,
}

#[derive(Clone, Default)]
pub struct FakeSource {
    pub state: Arc<Mutex<FakeState>>,
}

impl FakeSource {
    pub fn with_issues(issues: Vec<Issue>) -> Self {
        let source = Self::default();
        source.state.lock().unwrap().issues = issues;
        source
    }

    pub fn requests(&self) -> Vec<Option<String>> {
        self.state.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl IssueSource for FakeSource {
    async fn fetch_issues(&self, team_id: Option<&str>) -> Result<Vec<Issue>> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(team_id.map(str::to_string));
        if let Some(err) = &state.issues_error {
            bail!("{}", err);
        }
        let issues = team_id
            .and_then(|id| state.team_issues.get(id))
            .unwrap_or(&state.issues);
        Ok(issues.clone())
    }

    async fn fetch_teams(&self) -> Result<Vec<Team>> {
        let state = self.state.lock().unwrap();
        if let Some(err) = &state.teams_error {
            bail!("{}", err);
        }
        Ok(state.teams.clone())
    }

    async fn fetch_viewer(&self) -> Result<Viewer> {
        match self.state.lock().unwrap().viewer.clone() {
            Some(viewer) => Ok(viewer),
            None => bail!("Authentication required"),
        }
    }
}

/// Records copied text; fails every copy when `fail` is set.
#[derive(Clone, Default)]
pub struct FakeClipboard {
    pub copied: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl FakeClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

impl Clipboard for FakeClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        if self.fail {
            bail!("no clipboard utility available");
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// App wired to the given fakes, with startup fetches already done.
pub async fn loaded_app(source: &FakeSource, clipboard: &FakeClipboard) -> App {
    let mut app = App::new(Box::new(source.clone()), Box::new(clipboard.clone()));
    app.view.set_list_height(10);
    app.load_initial().await;
    app
}
