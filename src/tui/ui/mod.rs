//! TUI rendering module.
//!
//! This module handles all UI rendering for the terminal interface.
//! It's organized into submodules for maintainability:
//!
//! - `icons` - state glyphs and bar markers
//! - `layout` - region geometry and text utilities
//! - `status` - status configuration plus the team, search and status bars
//! - `list` - issue list rendering
//! - `detail` - detail pane (help, issue, prompt)

pub mod detail;
pub mod icons;
pub mod layout;
pub mod list;
pub mod status;

use crate::data::Focus;
use crate::tui::App;
use layout::compute_regions;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

fn regions_for(area: Rect, app: &App) -> layout::Regions {
    compute_regions(
        area,
        !app.view.teams().is_empty(),
        app.view.focus() == Focus::SearchEditing,
    )
}

/// Rows available for list entries inside the list border.
pub fn list_height(area: Rect, app: &App) -> usize {
    regions_for(area, app).list.height.saturating_sub(2) as usize
}

/// Main draw function - renders the entire TUI from a shared borrow of the app.
pub fn draw(f: &mut Frame, app: &App) {
    let regions = regions_for(f.area(), app);

    if let Some(area) = regions.team_bar {
        status::draw_team_bar(f, app, area);
    }
    list::draw_issue_list(f, app, regions.list);
    detail::draw_detail(f, app, regions.detail);
    if let Some(area) = regions.search_bar {
        status::draw_search_bar(f, app, area);
    }
    status::draw_status_bar(f, app, regions.status_bar);
}

/// Frame shown while the startup fetches are in flight.
pub fn draw_loading(f: &mut Frame) {
    let area = f.area();
    let middle = Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1));
    let paragraph = Paragraph::new("Loading issues from Linear…")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(paragraph, middle);
}
