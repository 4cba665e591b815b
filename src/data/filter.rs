use super::{Issue, StatusView};

/// Active filter inputs applied to the fetched issue set.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueFilter<'a> {
    pub status_view: StatusView,
    pub assigned_to_me: bool,
    pub viewer_id: Option<&'a str>,
    pub search: &'a str,
}

impl IssueFilter<'_> {
    /// Whether a single issue passes every active predicate.
    pub fn matches(&self, issue: &Issue) -> bool {
        if self.assigned_to_me {
            match (issue.assignee_id(), self.viewer_id) {
                (Some(assignee), Some(viewer)) if assignee == viewer => {}
                _ => return false,
            }
        }

        if let Some(state) = self.status_view.state_name() {
            if issue.state != state {
                return false;
            }
        }

        if !self.search.is_empty()
            && !issue
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase())
        {
            return false;
        }

        true
    }

    pub fn apply(&self, all: &[Issue]) -> Vec<Issue> {
        all.iter().filter(|i| self.matches(i)).cloned().collect()
    }
}

/// Derive the visible issue list: assignee, then status view, then title search.
pub fn derive_issues(
    all: &[Issue],
    status_view: StatusView,
    assigned_to_me: bool,
    viewer_id: Option<&str>,
    search: &str,
) -> Vec<Issue> {
    IssueFilter {
        status_view,
        assigned_to_me,
        viewer_id,
        search,
    }
    .apply(all)
}
