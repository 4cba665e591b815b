//! Status ranking for fetched issues.
//!
//! Issues arrive from the API in arbitrary order; the dashboard groups them by
//! workflow stage so the "All" view reads in pipeline order.

use super::Issue;

/// Rank given to states outside the tracked pipeline.
pub const UNRANKED: u32 = 999;

/// Pipeline position of a workflow state name.
pub fn status_rank(state: &str) -> u32 {
    match state {
        "In Review" => 0,
        "In Progress" => 1,
        "Blocked" => 2,
        "Todo" => 3,
        "Backlog" => 4,
        _ => UNRANKED,
    }
}

/// Stable sort by status rank; equal ranks keep fetch order.
pub fn sort_by_status_rank(issues: &mut [Issue]) {
    issues.sort_by_key(|issue| status_rank(&issue.state));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_issue(id: &str, state: &str) -> Issue {
        Issue {
            id: id.to_string(),
            identifier: format!("TEST-{}", id),
            title: format!("Test issue {}", id),
            state: state.to_string(),
            ..Issue::default()
        }
    }

    #[test]
    fn test_sort_is_stable_within_rank() {
        let mut issues = vec![
            make_issue("1", "Todo"),
            make_issue("2", "Blocked"),
            make_issue("3", "Todo"),
            make_issue("4", "In Review"),
        ];
        sort_by_status_rank(&mut issues);

        let ids: Vec<&str> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "2", "1", "3"]);
    }

    #[test]
    fn test_unknown_states_sort_last() {
        let mut issues = vec![
            make_issue("1", "Done"),
            make_issue("2", "Backlog"),
            make_issue("3", "Triage"),
        ];
        sort_by_status_rank(&mut issues);

        assert_eq!(issues[0].id, "2");
        assert_eq!(issues[1].id, "1");
        assert_eq!(issues[2].id, "3");
        assert_eq!(status_rank("Done"), UNRANKED);
    }
}
