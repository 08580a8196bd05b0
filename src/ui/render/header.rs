use super::Frame;
use crate::state::{DisplayMode, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the banner with the collection tabs and theme indicator.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let tab = |label: String, active: bool| {
        if active {
            Span::styled(
                format!(" {} ", label),
                styling::active_list_item_style(theme).add_modifier(Modifier::REVERSED),
            )
        } else {
            Span::styled(format!(" {} ", label), styling::normal_text_style(theme))
        }
    };
    let mode = if state.is_dark_mode() {
        "☀ Light Mode"
    } else {
        "☾ Dark Mode"
    };

    let line = Line::from(vec![
        Span::styled("Meal Explorer", styling::banner_style(theme)),
        Span::raw("   "),
        tab("Home".to_string(), state.display_mode() == DisplayMode::Home),
        Span::raw(" "),
        tab(
            format!("Favorites ({})", state.favorites().len()),
            state.display_mode() == DisplayMode::Favorites,
        ),
        Span::raw("   "),
        Span::styled(format!("[Ctrl-t] {}", mode), styling::muted_text_style(theme)),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(paragraph, size);
}
