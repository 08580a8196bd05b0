use super::Frame;
use crate::state::{DisplayMode, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph};

/// Return the key hints for the current state.
///
fn hints(state: &State) -> &'static str {
    if state.is_detail_open() {
        " i: instructions | f: favorite | Esc: back | Ctrl-c: quit"
    } else if state.display_mode() == DisplayMode::Favorites {
        " j/k: navigate | Enter: open | f: unfavorite | Ctrl-f: home | Ctrl-t: theme | Ctrl-c: quit"
    } else if state.current_focus().is_input() {
        " Tab: next panel | Enter: submit | ◀/▶: category | Ctrl-f: favorites | Ctrl-r: reset | Ctrl-c: quit"
    } else {
        " Tab: next panel | j/k: navigate | Enter: open | f: favorite | Ctrl-f: favorites | Ctrl-r: reset | q: quit"
    }
}

/// Render the footer with key hints.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let paragraph = Paragraph::new(Span::styled(hints(state), styling::muted_text_style(theme)));
    frame.render_widget(paragraph, size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_mode() {
        let mut state = State::default();
        assert!(hints(&state).contains("submit"));
        state.next_focus().next_focus();
        assert!(hints(&state).contains("open"));
        state.toggle_display_mode();
        assert!(hints(&state).contains("unfavorite"));
    }
}
