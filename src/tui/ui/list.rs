//! Issue list rendering.

use super::layout::{display_width, truncate_with_ellipsis};
use crate::data::{initials, Issue, ViewState};
use crate::tui::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// List title: status view name plus active filter markers.
pub fn list_title(view: &ViewState) -> String {
    let mut title = view.status_view().label().to_string();
    if view.assigned_to_me() {
        title.push_str(" (My Issues)");
    }
    if !view.search_text().is_empty() {
        title.push_str(&format!(" [{}]", view.search_text()));
    }
    title
}

/// One list row: identifier, assignee initials, title.
fn issue_row(issue: &Issue, width: usize) -> Line<'static> {
    let initials = initials(issue.assignee_name());
    let used = display_width(&issue.identifier) + display_width(&initials) + 2;
    let title = truncate_with_ellipsis(&issue.title, width.saturating_sub(used));

    Line::from(vec![
        Span::styled(issue.identifier.clone(), Style::default().fg(Color::Green)),
        Span::raw(" "),
        Span::styled(initials, Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::raw(title),
    ])
}

pub fn draw_issue_list(f: &mut Frame, app: &App, area: Rect) {
    let view = &app.view;
    let block = Block::default()
        .title(format!(" {} ", list_title(view)))
        .borders(Borders::ALL);
    let inner = block.inner(area);

    let items: Vec<ListItem> = view
        .issues()
        .iter()
        .map(|issue| ListItem::new(issue_row(issue, inner.width as usize)))
        .collect();

    let highlight_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let list = List::new(items).block(block).highlight_style(highlight_style);

    // Local state keeps the render free of side effects on the app
    let mut state = ListState::default().with_offset(view.visible_scroll(inner.height as usize));
    if !view.issues().is_empty() {
        state.select(Some(view.cursor()));
    }

    f.render_stateful_widget(list, area, &mut state);
}
