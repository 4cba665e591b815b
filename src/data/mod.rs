mod filter;
mod sorting;
pub mod view;

pub use filter::{derive_issues, IssueFilter};
pub use sorting::{sort_by_status_rank, status_rank, UNRANKED};
pub use view::{Focus, ViewState};

use serde::{Deserialize, Serialize};

/// A Linear issue as shown by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub identifier: String, // e.g., "ENG-123"
    pub title: String,
    pub description: String,
    pub url: String,
    pub branch_name: String,
    /// Workflow state name, e.g. "In Progress"
    pub state: String,
    pub assignee: Option<Assignee>,
    pub comments: Vec<Comment>,
}

impl Issue {
    /// Synthetic issue standing in for a failed fetch.
    pub fn placeholder(error: &anyhow::Error) -> Self {
        Self {
            title: format!("Error loading issues: {:#}", error),
            ..Self::default()
        }
    }

    pub fn assignee_id(&self) -> Option<&str> {
        self.assignee.as_ref().map(|a| a.id.as_str())
    }

    pub fn assignee_name(&self) -> Option<&str> {
        self.assignee.as_ref().map(|a| a.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub body: String,
    /// ISO-8601 timestamp as returned by the API
    pub created_at: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub key: String,
}

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: String,
    pub name: String,
}

/// Fixed status views cycled with `[` and `]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatusView {
    #[default]
    All,
    InReview,
    InProgress,
    Blocked,
    Todo,
    Backlog,
}

impl StatusView {
    pub const ALL: [StatusView; 6] = [
        StatusView::All,
        StatusView::InReview,
        StatusView::InProgress,
        StatusView::Blocked,
        StatusView::Todo,
        StatusView::Backlog,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::InReview => "In Review",
            Self::InProgress => "In Progress",
            Self::Blocked => "Blocked",
            Self::Todo => "Todo",
            Self::Backlog => "Backlog",
        }
    }

    /// State name an issue must carry to appear in this view (`None` for All).
    pub fn state_name(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            other => Some(other.label()),
        }
    }

    /// View whose state name equals `state`, if it is one of the ranked states.
    pub fn from_state(state: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.state_name() == Some(state))
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// Two-letter abbreviation of an assignee's display name for list rows.
pub fn initials(name: Option<&str>) -> String {
    let Some(name) = name else {
        return "--".to_string();
    };
    let mut parts = name.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(first), Some(second)) => first
            .chars()
            .take(1)
            .chain(second.chars().take(1))
            .collect(),
        (Some(only), None) => only.chars().take(2).collect(),
        _ => "--".to_string(),
    }
}
