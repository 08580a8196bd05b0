//! User-visible error messages.

/// Errors surfaced in the session's single error line. Display strings are
/// shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Search succeeded but matched nothing
    #[error("No meals found")]
    NoMealsFound,

    /// Search request failed
    #[error("Failed to search meals")]
    SearchFailed,

    /// Suggestion request failed
    #[error("Failed to suggest meals")]
    SuggestFailed,

    /// Detail lookup request failed
    #[error("Failed to load meal details.")]
    DetailFailed,

    /// Detail lookup found no meal for the ID
    #[error("Meal not found.")]
    MealNotFound,
}
