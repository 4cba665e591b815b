pub mod clipboard;
pub mod linear;

use crate::data::{sort_by_status_rank, Issue, Team, Viewer};
use anyhow::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::time::Duration;

/// Shared HTTP client for all API requests to enable connection pooling
pub static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(2)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        })
});

/// Remote operations the dashboard consumes, so tests can swap in fakes.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Issues in the tracked states, scoped to a team when one is given.
    async fn fetch_issues(&self, team_id: Option<&str>) -> Result<Vec<Issue>>;

    async fn fetch_teams(&self) -> Result<Vec<Team>>;

    async fn fetch_viewer(&self) -> Result<Viewer>;
}

/// Fetch issues for a team and order them by pipeline stage.
pub async fn fetch_issues(source: &dyn IssueSource, team_id: Option<&str>) -> Result<Vec<Issue>> {
    let mut issues = source.fetch_issues(team_id).await?;
    sort_by_status_rank(&mut issues);
    tracing::debug!("Fetched {} issues (team: {:?})", issues.len(), team_id);
    Ok(issues)
}

/// Fetch the team roster; a failure means no team scoping.
pub async fn fetch_teams_or_empty(source: &dyn IssueSource) -> Vec<Team> {
    match source.fetch_teams().await {
        Ok(teams) => teams,
        Err(e) => {
            tracing::warn!("Failed to fetch teams: {:#}", e);
            Vec::new()
        }
    }
}

/// Fetch the current user; a failure disables the "mine" filter's matches.
pub async fn fetch_viewer_or_none(source: &dyn IssueSource) -> Option<Viewer> {
    match source.fetch_viewer().await {
        Ok(viewer) => Some(viewer),
        Err(e) => {
            tracing::warn!("Failed to fetch viewer: {:#}", e);
            None
        }
    }
}
