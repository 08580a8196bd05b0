use super::Frame;
use crate::state::State;
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph};

/// Render the current error message, if any.
///
pub fn status(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    if let Some(error) = state.error() {
        let paragraph = Paragraph::new(Span::styled(
            format!(" {}", error),
            styling::error_style(theme),
        ));
        frame.render_widget(paragraph, size);
    }
}
