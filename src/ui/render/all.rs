use super::*;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::widgets::Block;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &State) {
    let theme = Theme::for_mode(state.is_dark_mode());
    let size = frame.size();
    frame.render_widget(Block::default().style(styling::base_style(&theme)), size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(size);

    header(frame, rows[0], state, &theme);
    match state.view() {
        View::Favorites => favorites(frame, rows[1], state, &theme),
        _ => home(frame, rows[1], state, &theme),
    }
    status(frame, rows[2], state, &theme);
    log(frame, rows[3], state, &theme);
    footer(frame, rows[4], state, &theme);

    if state.is_detail_open() {
        detail(frame, centered_rect(80, 80, size), state, &theme);
    }
}
