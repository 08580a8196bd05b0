use super::list::{focus_block, meal_list};
use super::Frame;
use crate::state::{Focus, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the search and suggestion panels.
///
pub fn home(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(50),
            Constraint::Length(3),
            Constraint::Percentage(50),
        ])
        .split(size);
    let focus = state.current_focus();

    input(
        frame,
        rows[0],
        "Search by name".to_string(),
        state.query(),
        focus == Focus::Query,
        theme,
    );
    meal_list(
        frame,
        rows[1],
        format!("Search Results ({})", state.search_results().len()),
        state.search_results(),
        state.search_index(),
        focus == Focus::SearchResults,
        "Type a meal name and press Enter.",
        state,
        theme,
    );

    let ingredient_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(28)])
        .split(rows[2]);
    input(
        frame,
        ingredient_row[0],
        "Ingredients".to_string(),
        state.ingredients(),
        focus == Focus::Ingredients,
        theme,
    );
    let category = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", styling::muted_text_style(theme)),
        Span::styled(
            state.category().unwrap_or("All Categories"),
            styling::normal_text_style(theme),
        ),
        Span::styled(" ▶", styling::muted_text_style(theme)),
    ]))
    .block(focus_block(
        "Category".to_string(),
        focus == Focus::Ingredients,
        theme,
    ));
    frame.render_widget(category, ingredient_row[1]);

    meal_list(
        frame,
        rows[3],
        format!("Suggestions ({})", state.suggestions().len()),
        state.suggestions(),
        state.suggestion_index(),
        focus == Focus::Suggestions,
        "Enter an ingredient to get suggestions.",
        state,
        theme,
    );
}

/// Render a single line text input with a cursor when focused.
///
fn input(frame: &mut Frame, size: Rect, title: String, value: &str, focused: bool, theme: &Theme) {
    let mut spans = vec![Span::styled(
        value.to_string(),
        styling::normal_text_style(theme),
    )];
    if focused {
        spans.push(Span::styled("▏", styling::active_list_item_style(theme)));
    }
    let paragraph = Paragraph::new(Line::from(spans)).block(focus_block(title, focused, theme));
    frame.render_widget(paragraph, size);
}
