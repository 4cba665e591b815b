//! Status configuration plus the team, search and status bars.

use super::icons;
use super::layout::truncate_with_ellipsis;
use crate::data::{Focus, StatusView, ViewState};
use crate::tui::keybindings::{generate_footer_hints, Mode};
use crate::tui::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Unified status configuration - single source of truth for icon and style.
pub struct StatusConfig {
    pub icon: &'static str,
    pub style: Style,
}

/// Trait for types that can provide their display configuration (icon + style).
pub trait StatusConfigurable {
    fn status_config(&self) -> StatusConfig;
}

impl StatusConfigurable for StatusView {
    fn status_config(&self) -> StatusConfig {
        match self {
            StatusView::InReview => StatusConfig {
                icon: icons::STATUS_IN_REVIEW,
                style: Style::default().fg(Color::Yellow),
            },
            StatusView::InProgress => StatusConfig {
                icon: icons::STATUS_IN_PROGRESS,
                style: Style::default().fg(Color::Green),
            },
            StatusView::Blocked => StatusConfig {
                icon: icons::STATUS_BLOCKED,
                style: Style::default().fg(Color::Red),
            },
            StatusView::Todo => StatusConfig {
                icon: icons::STATUS_TODO,
                style: Style::default().fg(Color::Cyan),
            },
            StatusView::Backlog => StatusConfig {
                icon: icons::STATUS_BACKLOG,
                style: Style::default().fg(Color::DarkGray),
            },
            StatusView::All => StatusConfig {
                icon: icons::STATUS_UNKNOWN,
                style: Style::default(),
            },
        }
    }
}

/// Icon and style for a workflow state name; unranked states get a neutral dot.
pub fn state_config(state: &str) -> StatusConfig {
    match StatusView::from_state(state) {
        Some(view) => view.status_config(),
        None => StatusConfig {
            icon: icons::STATUS_UNKNOWN,
            style: Style::default().fg(Color::DarkGray),
        },
    }
}

/// Status line text: key hints prefixed by the active filters.
pub fn status_line(view: &ViewState) -> String {
    let mut status = generate_footer_hints(Mode::from(view.focus()));
    if view.assigned_to_me() {
        status = format!("[My Issues] {}", status);
    }
    if !view.search_text().is_empty() {
        status = format!("[Search: {}] {}", view.search_text(), status);
    }
    status
}

/// Draw the status bar at the bottom of the screen.
pub fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;

    let status = if let Some(msg) = &app.status_message {
        Span::styled(
            truncate_with_ellipsis(msg, width),
            Style::default().fg(Color::Green),
        )
    } else if app.view.focus() == Focus::SearchEditing {
        Span::styled(
            truncate_with_ellipsis(&status_line(&app.view), width),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled(
            truncate_with_ellipsis(&status_line(&app.view), width),
            Style::default().fg(Color::DarkGray),
        )
    };

    let paragraph = Paragraph::new(Line::from(status));
    f.render_widget(paragraph, area);
}

/// Draw the team bar: every team name, the current one bracketed.
pub fn draw_team_bar(f: &mut Frame, app: &App, area: Rect) {
    let current = app.view.current_team_index();
    let mut spans = Vec::new();

    for (i, team) in app.view.teams().iter().enumerate() {
        if i == current {
            spans.push(Span::styled(
                format!(
                    "{}{}{}",
                    icons::TEAM_ACTIVE_LEFT,
                    team.name,
                    icons::TEAM_ACTIVE_RIGHT
                ),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                team.name.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::raw(" "));
    }

    let block = Block::default()
        .title(" Teams ({/} to switch) ")
        .borders(Borders::TOP);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(paragraph, area);
}

/// Draw the search bar with the in-progress buffer and a cursor.
pub fn draw_search_bar(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Search (Enter to apply, Esc or Ctrl+Q to cancel) ")
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::Yellow));

    let line = Line::from(vec![
        Span::styled("/", Style::default().fg(Color::Yellow)),
        Span::raw(app.view.search_buffer().to_string()),
        Span::styled("█", Style::default().fg(Color::Yellow)),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Issue;

    fn view_with(assigned: bool, search: &str) -> ViewState {
        let mut view = ViewState::new();
        view.load_issues(Ok(vec![Issue::default()]));
        if assigned {
            view.toggle_assigned();
        }
        if !search.is_empty() {
            view.open_search();
            for c in search.chars() {
                view.search_input(c);
            }
            view.apply_search();
        }
        view
    }

    #[test]
    fn test_status_line_prefixes() {
        let plain = status_line(&view_with(false, ""));
        assert!(plain.starts_with("j/k/↑/↓: navigate"));

        let mine = status_line(&view_with(true, ""));
        assert!(mine.starts_with("[My Issues] j/k"));

        let both = status_line(&view_with(true, "login"));
        assert!(both.starts_with("[Search: login] [My Issues] j/k"));
    }

    #[test]
    fn test_unranked_state_config() {
        assert_eq!(state_config("Done").icon, icons::STATUS_UNKNOWN);
        assert_eq!(state_config("Blocked").icon, icons::STATUS_BLOCKED);
    }
}
