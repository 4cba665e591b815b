//! Tests for refresh robustness: failed fetches, missing roster or viewer,
//! and best-effort clipboard actions.

mod test_utils;

use lazylinear::tui::Message;
use pretty_assertions::assert_eq;
use test_utils::{assigned, loaded_app, make_issue, team, viewer, FakeClipboard, FakeSource};

mod fetch_failures {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_failed_fetch_becomes_placeholder_issue() {
        let source = FakeSource::default();
        source.state.lock().unwrap().issues_error = Some("connection refused".to_string());

        let app = loaded_app(&source, &FakeClipboard::default()).await;

        assert_eq!(app.view.issues().len(), 1);
        assert_eq!(
            app.view.issues()[0].title,
            "Error loading issues: connection refused"
        );
        assert_eq!(app.view.selected(), None);
    }

    #[tokio::test]
    async fn test_refresh_recovers_after_failure() {
        let source = FakeSource::with_issues(vec![
            make_issue("ENG-1", "First", "Todo"),
            make_issue("ENG-2", "Second", "In Review"),
        ]);
        source.state.lock().unwrap().issues_error = Some("timeout".to_string());
        let mut app = loaded_app(&source, &FakeClipboard::default()).await;
        assert_eq!(app.view.issues().len(), 1);

        source.state.lock().unwrap().issues_error = None;
        app.update(Message::Refresh).await.unwrap();

        let ids: Vec<_> = app.view.issues().iter().map(|i| i.identifier.as_str()).collect();
        assert_eq!(ids, vec!["ENG-2", "ENG-1"]);
    }

    #[tokio::test]
    async fn test_failure_after_success_replaces_list() {
        let source = FakeSource::with_issues(vec![make_issue("ENG-1", "First", "Todo")]);
        let mut app = loaded_app(&source, &FakeClipboard::default()).await;
        app.update(Message::Select).await.unwrap();

        source.state.lock().unwrap().issues_error = Some("HTTP 500".to_string());
        app.update(Message::Refresh).await.unwrap();

        assert_eq!(app.view.all_issues().len(), 1);
        assert!(app.view.issues()[0].title.starts_with("Error loading issues:"));
        assert_eq!(app.view.selected(), None);
    }

    #[tokio::test]
    async fn test_placeholder_hidden_by_status_views() {
        let source = FakeSource::default();
        source.state.lock().unwrap().issues_error = Some("boom".to_string());
        let mut app = loaded_app(&source, &FakeClipboard::default()).await;

        app.update(Message::NextView).await.unwrap();
        assert!(app.view.issues().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_preserves_filters_and_clamps_cursor() {
        let source = FakeSource::with_issues(
            (1..=5)
                .map(|n| make_issue(&format!("ENG-{}", n), "Task", "Todo"))
                .collect(),
        );
        let mut app = loaded_app(&source, &FakeClipboard::default()).await;
        for _ in 0..4 {
            app.update(Message::MoveDown).await.unwrap();
        }
        app.update(Message::NextView).await.unwrap();
        app.update(Message::PrevView).await.unwrap();

        source.state.lock().unwrap().issues = vec![make_issue("ENG-9", "Task", "Todo")];
        app.update(Message::Refresh).await.unwrap();

        assert_eq!(app.view.cursor(), 0);
        assert_eq!(app.view.issues().len(), 1);
    }
}

mod startup {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_team_fetch_failure_means_unscoped_fetch() {
        let source = FakeSource::with_issues(vec![make_issue("ENG-1", "Only", "Todo")]);
        source.state.lock().unwrap().teams_error = Some("forbidden".to_string());

        let app = loaded_app(&source, &FakeClipboard::default()).await;

        assert!(app.view.teams().is_empty());
        assert_eq!(source.requests(), vec![None]);
        assert_eq!(app.view.issues().len(), 1);
    }

    #[tokio::test]
    async fn test_viewer_failure_makes_mine_filter_empty() {
        let source = FakeSource::with_issues(vec![assigned(
            make_issue("ENG-1", "Assigned", "Todo"),
            "u1",
            "Ada",
        )]);
        let mut app = loaded_app(&source, &FakeClipboard::default()).await;
        assert!(app.view.viewer().is_none());

        app.update(Message::ToggleAssigned).await.unwrap();
        assert!(app.view.issues().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_uses_current_team() {
        let source = FakeSource::default();
        {
            let mut state = source.state.lock().unwrap();
            state.teams = vec![team("t1", "Engineering", "ENG"), team("t2", "Design", "DES")];
            state.viewer = Some(viewer("u1", "Ada"));
        }
        let mut app = loaded_app(&source, &FakeClipboard::default()).await;

        app.update(Message::NextTeam).await.unwrap();
        app.update(Message::Refresh).await.unwrap();

        assert_eq!(
            source.requests(),
            vec![
                Some("t1".to_string()),
                Some("t2".to_string()),
                Some("t2".to_string()),
            ]
        );
    }
}

mod clipboard_actions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_copy_requires_selection() {
        let source = FakeSource::with_issues(vec![make_issue("ENG-1", "Only", "Todo")]);
        let clipboard = FakeClipboard::default();
        let mut app = loaded_app(&source, &clipboard).await;

        app.update(Message::CopyUrl).await.unwrap();
        assert!(clipboard.copied().is_empty());
        assert_eq!(app.status_message, None);
    }

    #[tokio::test]
    async fn test_copy_url_and_branch() {
        let source = FakeSource::with_issues(vec![make_issue("ENG-1", "Only", "Todo")]);
        let clipboard = FakeClipboard::default();
        let mut app = loaded_app(&source, &clipboard).await;

        app.update(Message::Select).await.unwrap();
        app.update(Message::CopyUrl).await.unwrap();
        app.update(Message::CopyBranch).await.unwrap();

        assert_eq!(
            clipboard.copied(),
            vec![
                "https://linear.app/test/issue/ENG-1".to_string(),
                "user/eng-1".to_string(),
            ]
        );
        assert_eq!(
            app.status_message.as_deref(),
            Some("Copied branch name: user/eng-1")
        );
    }

    #[tokio::test]
    async fn test_copy_empty_field_is_noop() {
        let mut issue = make_issue("ENG-1", "No branch", "Todo");
        issue.branch_name.clear();
        let source = FakeSource::with_issues(vec![issue]);
        let clipboard = FakeClipboard::default();
        let mut app = loaded_app(&source, &clipboard).await;

        app.update(Message::Select).await.unwrap();
        app.update(Message::CopyBranch).await.unwrap();

        assert!(clipboard.copied().is_empty());
        assert_eq!(app.status_message, None);
    }

    #[tokio::test]
    async fn test_copy_failure_only_reports() {
        let source = FakeSource::with_issues(vec![make_issue("ENG-1", "Only", "Todo")]);
        let mut app = loaded_app(&source, &FakeClipboard::failing()).await;

        app.update(Message::Select).await.unwrap();
        app.update(Message::CopyUrl).await.unwrap();

        let message = app.status_message.clone().unwrap();
        assert!(message.starts_with("Copy failed:"));
        assert_eq!(app.view.selected(), Some(0));

        // Next key press clears the transient message
        app.update(Message::MoveDown).await.unwrap();
        assert_eq!(app.status_message, None);
    }
}
