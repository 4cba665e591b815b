//! Smoke-test the Linear API with the configured key, outside the TUI.

use anyhow::Result;
use lazylinear::config;
use lazylinear::data::{sort_by_status_rank, status_rank, Issue, UNRANKED};
use lazylinear::integrations::linear::LinearClient;
use lazylinear::integrations::IssueSource;
use std::collections::BTreeMap;

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let config = config::load(path.as_deref())?;
    println!("API key configured: {}", config.has_api_key());

    let client = LinearClient::new(&config);

    println!("\n=== Viewer ===");
    match client.fetch_viewer().await {
        Ok(viewer) => println!("Logged in as: {} ({})", viewer.name, viewer.id),
        Err(e) => println!("Request failed: {:#}", e),
    }

    println!("\n=== Teams ===");
    let teams = match client.fetch_teams().await {
        Ok(teams) => teams,
        Err(e) => {
            println!("Request failed: {:#}", e);
            Vec::new()
        }
    };
    for team in &teams {
        println!("  - {} [{}] {}", team.key, team.id, team.name);
    }

    println!("\n=== Issues ===");
    let scope = teams.first().map(|t| t.id.as_str());
    match client.fetch_issues(scope).await {
        Ok(mut issues) => {
            sort_by_status_rank(&mut issues);
            println!("Found {} issues (team: {:?})", issues.len(), scope);
            for ((rank, state), count) in count_by_state(&issues) {
                let marker = if rank == UNRANKED { " (unranked)" } else { "" };
                println!("  {:12} {}{}", state, count, marker);
            }
        }
        Err(e) => println!("Request failed: {:#}", e),
    }

    Ok(())
}

/// Issue counts per state name, in rank order; unranked states sort by name.
fn count_by_state(issues: &[Issue]) -> BTreeMap<(u32, String), usize> {
    let mut counts = BTreeMap::new();
    for issue in issues {
        *counts
            .entry((status_rank(&issue.state), issue.state.clone()))
            .or_insert(0) += 1;
    }
    counts
}
