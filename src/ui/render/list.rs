use super::Frame;
use crate::mealdb::MealSummary;
use crate::state::State;
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Return a bordered block styled by focus.
///
pub fn focus_block<'a>(title: String, focused: bool, theme: &Theme) -> Block<'a> {
    let block = Block::default().title(title).borders(Borders::ALL);
    if focused {
        block
            .border_style(styling::active_block_border_style(theme))
            .title_style(styling::active_block_title_style())
    } else {
        block.border_style(styling::normal_block_border_style(theme))
    }
}

/// Render a list of meal summaries, marking favorites and highlighting the
/// selection when focused. Renders the placeholder when there are no meals.
///
#[allow(clippy::too_many_arguments)]
pub fn meal_list(
    frame: &mut Frame,
    size: Rect,
    title: String,
    meals: &[MealSummary],
    selected: usize,
    focused: bool,
    placeholder: &str,
    state: &State,
    theme: &Theme,
) {
    let block = focus_block(title, focused, theme);

    if meals.is_empty() {
        let paragraph = Paragraph::new(Span::styled(
            placeholder.to_string(),
            styling::muted_text_style(theme),
        ))
        .block(block);
        frame.render_widget(paragraph, size);
        return;
    }

    let items: Vec<ListItem> = meals
        .iter()
        .map(|meal| {
            let marker = if state.is_favorite(&meal.id) {
                Span::styled("♥ ", styling::favorite_style(theme))
            } else {
                Span::raw("  ")
            };
            ListItem::new(Line::from(vec![
                marker,
                Span::styled(meal.name.clone(), styling::normal_text_style(theme)),
            ]))
        })
        .collect();

    let mut list = List::new(items).block(block);
    let mut list_state = ListState::default();
    if focused {
        list = list
            .highlight_style(styling::active_list_item_style(theme))
            .highlight_symbol("> ");
        list_state.select(Some(selected));
    }
    frame.render_stateful_widget(list, size, &mut list_state);
}
