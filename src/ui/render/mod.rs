mod all;
mod detail;
mod favorites;
mod footer;
mod header;
mod home;
mod list;
mod log;
mod status;

use self::log::log;
use super::*;
use detail::detail;
use favorites::favorites;
use footer::footer;
use header::header;
use home::home;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use status::status;

pub use all::all as render;

/// Return a rectangle centered within the given area, sized by percentage.
///
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}
