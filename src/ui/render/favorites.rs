use super::list::meal_list;
use super::Frame;
use crate::state::State;
use crate::ui::theme::Theme;
use ratatui::layout::Rect;

/// Render the saved favorites.
///
pub fn favorites(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    meal_list(
        frame,
        size,
        format!("Favorites ({})", state.favorites().len()),
        state.favorites(),
        state.favorite_index(),
        true,
        "No favorites yet. Discover and save your culinary treasures!",
        state,
        theme,
    );
}
