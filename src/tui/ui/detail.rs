//! Detail pane: help screen, selected issue, or a prompt.

use super::status::state_config;
use crate::data::{Issue, ViewState};
use crate::tui::keybindings::generate_help_lines;
use crate::tui::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const LABEL_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Pane content in priority order: help, selected issue, placeholder prompt.
pub fn detail_lines(view: &ViewState) -> Vec<Line<'static>> {
    if view.show_help() {
        help_lines()
    } else if let Some(issue) = view.selected_issue() {
        issue_lines(issue)
    } else {
        vec![
            Line::from("Select an issue to view details"),
            Line::from(Span::styled(
                "Press 'h' for help",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("lazylinear help", LABEL_STYLE)),
        Line::from(""),
    ];
    lines.extend(generate_help_lines().into_iter().map(Line::from));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "API key: ~/.lazylinear/config.toml or LINEAR_API_KEY",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), LABEL_STYLE),
        Span::raw(value),
    ])
}

fn issue_lines(issue: &Issue) -> Vec<Line<'static>> {
    let state = state_config(&issue.state);
    let mut lines = vec![
        field("ID", issue.identifier.clone()),
        field("Title", issue.title.clone()),
        Line::from(vec![
            Span::styled("State: ", LABEL_STYLE),
            Span::styled(format!("{} {}", state.icon, issue.state), state.style),
        ]),
    ];

    if let Some(name) = issue.assignee_name() {
        lines.push(field("Assignee", name.to_string()));
    }
    if !issue.url.is_empty() {
        lines.push(field("URL", issue.url.clone()));
    }
    if !issue.branch_name.is_empty() {
        lines.push(field("Branch", issue.branch_name.clone()));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Description:", LABEL_STYLE)));
    lines.extend(issue.description.lines().map(|l| Line::from(l.to_string())));

    if !issue.comments.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Comments:", LABEL_STYLE)));
        for comment in &issue.comments {
            lines.push(Line::from(vec![
                Span::raw("- "),
                Span::styled(comment.author.clone(), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!(" ({})", format_timestamp(&comment.created_at)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!(": {}", comment.body)),
            ]));
        }
    }

    lines
}

/// RFC 3339 timestamps render as UTC `YYYY-MM-DD HH:MM`; other text passes through.
fn format_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.with_timezone(&chrono::Utc).format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn draw_detail(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Issue Details ")
        .borders(Borders::ALL);
    let paragraph = Paragraph::new(detail_lines(&app.view))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
