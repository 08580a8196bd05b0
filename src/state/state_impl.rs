use super::{Detail, DisplayMode, Focus, StateError, View, CATEGORIES};
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::favorites::Favorites;
use crate::logger::LogBuffer;
use crate::mealdb::{Meal, MealDbError, MealSummary};
use crate::nutrition::NutritionFacts;
use crate::preferences::Preferences;
use log::*;

/// Houses data representative of the browsing session.
///
/// Network results come back through the `apply_*` methods together with the
/// sequence number handed out when the request was issued. Only a response to
/// the most recently issued request of its kind is applied.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    favorites: Favorites,
    preferences: Preferences,
    log: LogBuffer,
    display_mode: DisplayMode,
    current_focus: Focus,
    query: String,
    ingredients: String,
    category_index: Option<usize>, // None = all categories
    search_results: Vec<MealSummary>,
    suggestions: Vec<MealSummary>,
    search_index: usize,
    suggestion_index: usize,
    favorite_index: usize,
    error: Option<StateError>,
    detail: Option<Detail>,
    detail_generation: u64,
    search_sequence: u64,
    suggestion_sequence: u64,
    lookup_sequence: u64,
}

/// Defines default session state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            favorites: Favorites::default(),
            preferences: Preferences::default(),
            log: LogBuffer::default(),
            display_mode: DisplayMode::Home,
            current_focus: Focus::Query,
            query: String::new(),
            ingredients: String::new(),
            category_index: None,
            search_results: vec![],
            suggestions: vec![],
            search_index: 0,
            suggestion_index: 0,
            favorite_index: 0,
            error: None,
            detail: None,
            detail_generation: 0,
            search_sequence: 0,
            suggestion_sequence: 0,
            lookup_sequence: 0,
        }
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        favorites: Favorites,
        preferences: Preferences,
        log: LogBuffer,
    ) -> Self {
        State {
            net_sender: Some(net_sender),
            favorites,
            preferences,
            log,
            ..State::default()
        }
    }

    fn dispatch(&self, event: NetworkEvent) {
        match &self.net_sender {
            Some(sender) => {
                if let Err(e) = sender.send(event) {
                    error!("Failed to dispatch network event: {}", e);
                }
            }
            None => warn!("Dropping network event '{:?}' without a sender.", event),
        }
    }

    /// Return the view derived from the display mode and loaded collections.
    ///
    pub fn view(&self) -> View {
        match self.display_mode {
            DisplayMode::Favorites => View::Favorites,
            DisplayMode::Home => {
                match (self.search_results.is_empty(), self.suggestions.is_empty()) {
                    (true, true) => View::Idle,
                    (false, true) => View::SearchResults,
                    (true, false) => View::Suggestions,
                    (false, false) => View::SearchResultsAndSuggestions,
                }
            }
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Show the home collections. No data is cleared.
    ///
    pub fn show_home(&mut self) -> &mut Self {
        self.display_mode = DisplayMode::Home;
        self.current_focus = Focus::Query;
        self
    }

    /// Show the favorites collection. No data is cleared.
    ///
    pub fn show_favorites(&mut self) -> &mut Self {
        self.display_mode = DisplayMode::Favorites;
        self.current_focus = Focus::Favorites;
        self.favorite_index = self.favorite_index.min(self.favorites.len().saturating_sub(1));
        self
    }

    pub fn toggle_display_mode(&mut self) -> &mut Self {
        match self.display_mode {
            DisplayMode::Home => self.show_favorites(),
            DisplayMode::Favorites => self.show_home(),
        }
    }

    /// Return the current focus.
    ///
    pub fn current_focus(&self) -> Focus {
        self.current_focus
    }

    /// Move focus to the next home panel.
    ///
    pub fn next_focus(&mut self) -> &mut Self {
        self.current_focus = self.current_focus.next();
        self
    }

    /// Move focus to the previous home panel.
    ///
    pub fn previous_focus(&mut self) -> &mut Self {
        self.current_focus = self.current_focus.previous();
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) -> &mut Self {
        self.query = query.to_owned();
        self
    }

    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    pub fn set_ingredients(&mut self, ingredients: &str) -> &mut Self {
        self.ingredients = ingredients.to_owned();
        self
    }

    /// Append a character to the focused text input.
    ///
    pub fn add_input_char(&mut self, c: char) -> &mut Self {
        match self.current_focus {
            Focus::Query => self.query.push(c),
            Focus::Ingredients => self.ingredients.push(c),
            _ => (),
        }
        self
    }

    /// Remove the last character of the focused text input.
    ///
    pub fn remove_input_char(&mut self) -> &mut Self {
        match self.current_focus {
            Focus::Query => {
                self.query.pop();
            }
            Focus::Ingredients => {
                self.ingredients.pop();
            }
            _ => (),
        }
        self
    }

    /// Return the selected category, or None for all categories.
    ///
    pub fn category(&self) -> Option<&'static str> {
        self.category_index.map(|index| CATEGORIES[index])
    }

    pub fn set_category(&mut self, category_index: Option<usize>) -> &mut Self {
        self.category_index = category_index.filter(|index| *index < CATEGORIES.len());
        self
    }

    /// Cycle forward through all categories, then back to none.
    ///
    pub fn next_category(&mut self) -> &mut Self {
        self.category_index = match self.category_index {
            None => Some(0),
            Some(index) if index + 1 < CATEGORIES.len() => Some(index + 1),
            Some(_) => None,
        };
        self
    }

    /// Cycle backward through all categories, then back to none.
    ///
    pub fn previous_category(&mut self) -> &mut Self {
        self.category_index = match self.category_index {
            None => Some(CATEGORIES.len() - 1),
            Some(0) => None,
            Some(index) => Some(index - 1),
        };
        self
    }

    /// Issue a name search for the query input. Blank input is ignored.
    ///
    pub fn submit_search(&mut self) -> &mut Self {
        if self.query.trim().is_empty() {
            return self;
        }
        self.search_sequence += 1;
        let query = std::mem::take(&mut self.query);
        info!("Searching meals for '{}'...", query);
        self.dispatch(NetworkEvent::SearchMeals {
            query,
            sequence: self.search_sequence,
        });
        self
    }

    /// Apply the outcome of a name search.
    ///
    pub fn apply_search_results(
        &mut self,
        sequence: u64,
        result: Result<Vec<MealSummary>, MealDbError>,
    ) -> &mut Self {
        if sequence != self.search_sequence {
            debug!("Discarding stale search response #{}.", sequence);
            return self;
        }
        match result {
            Ok(meals) if meals.is_empty() => {
                info!("Search found no meals.");
                self.search_results.clear();
                self.search_index = 0;
                self.error = Some(StateError::NoMealsFound);
            }
            Ok(meals) => {
                info!("Search found {} meals.", meals.len());
                self.search_results = meals;
                self.search_index = 0;
                self.error = None;
            }
            Err(e) => {
                error!("Search failed: {}", e);
                self.error = Some(StateError::SearchFailed);
            }
        }
        self
    }

    /// Issue an ingredient suggestion for the ingredient input and selected
    /// category. The ingredient input is cleared once the request is issued.
    /// Blank input is ignored.
    ///
    pub fn submit_suggestion(&mut self) -> &mut Self {
        if self.ingredients.trim().is_empty() {
            return self;
        }
        self.suggestion_sequence += 1;
        let ingredients = std::mem::take(&mut self.ingredients);
        let category = self.category().map(str::to_owned);
        info!(
            "Suggesting meals with '{}' ({})...",
            ingredients,
            category.as_deref().unwrap_or("all categories")
        );
        self.dispatch(NetworkEvent::SuggestMeals {
            ingredients,
            category,
            sequence: self.suggestion_sequence,
        });
        self
    }

    /// Apply the outcome of an ingredient suggestion.
    ///
    pub fn apply_suggestions(
        &mut self,
        sequence: u64,
        result: Result<Vec<MealSummary>, MealDbError>,
    ) -> &mut Self {
        if sequence != self.suggestion_sequence {
            debug!("Discarding stale suggestion response #{}.", sequence);
            return self;
        }
        match result {
            Ok(meals) => {
                info!("Suggested {} meals.", meals.len());
                self.suggestions = meals;
                self.suggestion_index = 0;
                self.error = None;
            }
            Err(e) => {
                error!("Suggestion failed: {}", e);
                self.error = Some(StateError::SuggestFailed);
            }
        }
        self
    }

    /// Issue a full lookup for the meal ID.
    ///
    pub fn open_meal(&mut self, id: &str) -> &mut Self {
        self.lookup_sequence += 1;
        info!("Loading meal {}...", id);
        self.dispatch(NetworkEvent::LookupMeal {
            id: id.to_owned(),
            sequence: self.lookup_sequence,
        });
        self
    }

    /// Issue a full lookup for the selected summary, if any.
    ///
    pub fn open_selected(&mut self) -> &mut Self {
        if let Some(id) = self.selected_meal().map(|m| m.id.clone()) {
            self.open_meal(&id);
        }
        self
    }

    /// Apply the outcome of a full lookup. On success the detail overlay opens
    /// immediately and a nutrition estimate is requested for it.
    ///
    pub fn apply_meal_detail(
        &mut self,
        sequence: u64,
        result: Result<Option<Meal>, MealDbError>,
    ) -> &mut Self {
        if sequence != self.lookup_sequence {
            debug!("Discarding stale lookup response #{}.", sequence);
            return self;
        }
        match result {
            Ok(Some(meal)) => {
                self.detail_generation += 1;
                let meal_name = meal.name.clone();
                self.detail = Some(Detail::new(meal, self.detail_generation));
                self.error = None;
                self.dispatch(NetworkEvent::EstimateNutrition {
                    meal_name,
                    generation: self.detail_generation,
                });
            }
            Ok(None) => {
                warn!("Meal lookup returned no record.");
                self.error = Some(StateError::MealNotFound);
            }
            Err(e) => {
                error!("Error fetching meal by ID: {}", e);
                self.error = Some(StateError::DetailFailed);
            }
        }
        self
    }

    /// Attach a nutrition estimate to the overlay it was requested for.
    /// Estimates for a closed or replaced overlay are dropped.
    ///
    pub fn apply_nutrition(
        &mut self,
        generation: u64,
        nutrition: Option<NutritionFacts>,
    ) -> &mut Self {
        match self.detail.as_mut() {
            Some(detail) if detail.generation() == generation => detail.set_nutrition(nutrition),
            _ => debug!("Discarding nutrition estimate for closed detail #{}.", generation),
        }
        self
    }

    pub fn detail(&self) -> Option<&Detail> {
        self.detail.as_ref()
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail.is_some()
    }

    /// Close the detail overlay, returning to the underlying view.
    ///
    pub fn close_detail(&mut self) -> &mut Self {
        self.detail = None;
        self
    }

    pub fn toggle_instructions(&mut self) -> &mut Self {
        if let Some(detail) = self.detail.as_mut() {
            detail.toggle_instructions();
        }
        self
    }

    /// Clear search results, suggestions, the error and any open overlay.
    /// Requests still in flight are discarded when they resolve. Favorites
    /// and preferences are kept.
    ///
    pub fn reset(&mut self) -> &mut Self {
        info!("Resetting session.");
        self.search_results.clear();
        self.suggestions.clear();
        self.search_index = 0;
        self.suggestion_index = 0;
        self.error = None;
        self.detail = None;
        self.search_sequence += 1;
        self.suggestion_sequence += 1;
        self.lookup_sequence += 1;
        self
    }

    pub fn error(&self) -> Option<&StateError> {
        self.error.as_ref()
    }

    pub fn search_results(&self) -> &[MealSummary] {
        &self.search_results
    }

    pub fn suggestions(&self) -> &[MealSummary] {
        &self.suggestions
    }

    pub fn favorites(&self) -> &[MealSummary] {
        self.favorites.list()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Toggle the meal in favorites. The active view is unchanged.
    ///
    pub fn toggle_favorite(&mut self, meal: MealSummary) -> &mut Self {
        if let Err(e) = self.favorites.toggle(meal) {
            error!("Failed to persist favorites: {}", e);
        }
        self.favorite_index = self.favorite_index.min(self.favorites.len().saturating_sub(1));
        self
    }

    /// Toggle the selected summary in favorites, if any.
    ///
    pub fn toggle_selected_favorite(&mut self) -> &mut Self {
        if let Some(meal) = self.selected_meal().cloned() {
            self.toggle_favorite(meal);
        }
        self
    }

    /// Toggle the meal shown in the detail overlay in favorites, if any.
    ///
    pub fn toggle_detail_favorite(&mut self) -> &mut Self {
        if let Some(meal) = self.detail.as_ref().map(|d| d.meal().summary()) {
            self.toggle_favorite(meal);
        }
        self
    }

    pub fn is_dark_mode(&self) -> bool {
        self.preferences.dark_mode()
    }

    pub fn toggle_dark_mode(&mut self) -> &mut Self {
        match self.preferences.toggle_dark_mode() {
            Ok(dark_mode) => debug!("Dark mode {}.", if dark_mode { "on" } else { "off" }),
            Err(e) => error!("Failed to persist dark mode preference: {}", e),
        }
        self
    }

    fn focused_list(&self) -> Option<(&[MealSummary], usize)> {
        match self.current_focus {
            Focus::SearchResults => Some((self.search_results.as_slice(), self.search_index)),
            Focus::Suggestions => Some((self.suggestions.as_slice(), self.suggestion_index)),
            Focus::Favorites => Some((self.favorites.list(), self.favorite_index)),
            Focus::Query | Focus::Ingredients => None,
        }
    }

    fn focused_index_mut(&mut self) -> Option<&mut usize> {
        match self.current_focus {
            Focus::SearchResults => Some(&mut self.search_index),
            Focus::Suggestions => Some(&mut self.suggestion_index),
            Focus::Favorites => Some(&mut self.favorite_index),
            Focus::Query | Focus::Ingredients => None,
        }
    }

    /// Return the selected summary of the focused list.
    ///
    pub fn selected_meal(&self) -> Option<&MealSummary> {
        self.focused_list().and_then(|(meals, index)| meals.get(index))
    }

    pub fn search_index(&self) -> usize {
        self.search_index
    }

    pub fn suggestion_index(&self) -> usize {
        self.suggestion_index
    }

    pub fn favorite_index(&self) -> usize {
        self.favorite_index
    }

    /// Select the next item in the focused list, wrapping around.
    ///
    pub fn next_item(&mut self) -> &mut Self {
        let len = self.focused_list().map(|(meals, _)| meals.len()).unwrap_or(0);
        if let Some(index) = self.focused_index_mut() {
            if len > 0 {
                *index = (*index + 1) % len;
            }
        }
        self
    }

    /// Select the previous item in the focused list, wrapping around.
    ///
    pub fn previous_item(&mut self) -> &mut Self {
        let len = self.focused_list().map(|(meals, _)| meals.len()).unwrap_or(0);
        if let Some(index) = self.focused_index_mut() {
            if len > 0 {
                *index = if *index == 0 { len - 1 } else { *index - 1 };
            }
        }
        self
    }

    /// Return a snapshot of captured log lines.
    ///
    pub fn log_entries(&self) -> Vec<String> {
        crate::logger::snapshot(&self.log)
    }
}
