use super::Frame;
use crate::nutrition::NutritionFacts;
use crate::state::{Detail, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Return the nutrition rows shown for an estimate, values rounded. Fat and
/// protein are omitted when unknown or zero.
///
pub fn nutrition_rows(facts: &NutritionFacts) -> Vec<String> {
    let mut rows = vec![format!("Calories: {}", facts.calories.round())];
    if let Some(fat) = facts.fat.filter(|fat| *fat != 0.0) {
        rows.push(format!("Fat: {}g", fat.round()));
    }
    if let Some(protein) = facts.protein.filter(|protein| *protein != 0.0) {
        rows.push(format!("Protein: {}g", protein.round()));
    }
    rows
}

/// Build the overlay body for the given detail.
///
fn lines<'a>(detail: &'a Detail, favorite: bool, theme: &Theme) -> Vec<Line<'a>> {
    let meal = detail.meal();
    let heading = styling::normal_text_style(theme).add_modifier(Modifier::BOLD);
    let text = styling::normal_text_style(theme);
    let muted = styling::muted_text_style(theme);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            if favorite { "♥ " } else { "♡ " },
            styling::favorite_style(theme),
        ),
        Span::styled(meal.name.as_str(), styling::banner_style(theme)),
    ])];
    if let Some(thumbnail) = &meal.thumbnail {
        lines.push(Line::from(Span::styled(thumbnail.as_str(), muted)));
    }
    lines.push(Line::from(Span::styled(
        format!("Origin: {}", meal.area.as_deref().unwrap_or("")),
        muted.add_modifier(Modifier::ITALIC),
    )));

    if let Some(facts) = detail.nutrition() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Nutrition Facts (approx.)", heading)));
        lines.extend(
            nutrition_rows(facts)
                .into_iter()
                .map(|row| Line::from(Span::styled(format!("• {}", row), text))),
        );
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Ingredients", heading)));
    lines.extend(
        meal.ingredients
            .iter()
            .map(|line| Line::from(Span::styled(format!("• {}", line), text))),
    );

    lines.push(Line::default());
    if detail.show_instructions() {
        lines.push(Line::from(Span::styled("[i] Hide Instructions", heading)));
        for paragraph in meal.instructions.as_deref().unwrap_or("").lines() {
            lines.push(Line::from(Span::styled(paragraph, text)));
        }
    } else {
        lines.push(Line::from(Span::styled("[i] Show Instructions", heading)));
    }
    lines
}

/// Render the meal detail overlay on top of the current view.
///
pub fn detail(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let Some(detail) = state.detail() else {
        return;
    };
    let block = Block::default()
        .title("Meal (Esc: back)")
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .style(styling::base_style(theme));
    let paragraph = Paragraph::new(lines(detail, state.is_favorite(&detail.meal().id), theme))
        .wrap(Wrap { trim: false })
        .block(block);

    frame.render_widget(Clear, size);
    frame.render_widget(paragraph, size);
}
