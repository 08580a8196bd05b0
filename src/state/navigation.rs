//! Navigation-related state types.
//!
//! This module contains enums for the active collection, input focus and the
//! derived view the session is in.

/// Meal categories offered by the suggestion filter.
///
pub const CATEGORIES: [&str; 3] = ["Breakfast", "Vegetarian", "Dessert"];

/// Specifying which collection is rendered.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DisplayMode {
    Home,
    Favorites,
}

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Query,
    Ingredients,
    SearchResults,
    Suggestions,
    Favorites,
}

impl Focus {
    /// Return the focus after this one within the home view.
    ///
    pub fn next(self) -> Focus {
        match self {
            Focus::Query => Focus::Ingredients,
            Focus::Ingredients => Focus::SearchResults,
            Focus::SearchResults => Focus::Suggestions,
            Focus::Suggestions => Focus::Query,
            Focus::Favorites => Focus::Favorites,
        }
    }

    /// Return the focus before this one within the home view.
    ///
    pub fn previous(self) -> Focus {
        match self {
            Focus::Query => Focus::Suggestions,
            Focus::Ingredients => Focus::Query,
            Focus::SearchResults => Focus::Ingredients,
            Focus::Suggestions => Focus::SearchResults,
            Focus::Favorites => Focus::Favorites,
        }
    }

    /// Check if the focus is a text input.
    ///
    pub fn is_input(self) -> bool {
        matches!(self, Focus::Query | Focus::Ingredients)
    }
}

/// Specifying the view derived from the display mode and loaded collections.
/// The detail overlay is tracked separately and may sit on top of any view.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Idle,
    SearchResults,
    Suggestions,
    SearchResultsAndSuggestions,
    Favorites,
}
