//! Meal catalog client.
//!
//! Wraps the catalog's search, filter and lookup endpoints and normalizes
//! their responses into [`MealSummary`] and [`Meal`] values.

mod client;
mod error;
mod models;
mod resource;

pub use error::MealDbError;
pub use models::{MealRecord, INGREDIENT_SLOTS};
pub use resource::*;

use client::Client;
use log::*;
use std::collections::HashSet;

/// Default catalog base URL.
///
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Responsible for asynchronous interaction with the meal catalog including
/// transformation of response data into explicitly-defined types.
///
pub struct MealDb {
    client: Client,
}

impl MealDb {
    /// Returns a new instance for the given catalog base URL.
    ///
    pub fn new(base_url: &str) -> MealDb {
        debug!("Initializing catalog client for {}...", base_url);
        MealDb {
            client: Client::new(base_url),
        }
    }

    /// Returns meals whose name matches the query, in catalog order. An empty
    /// vector means no match. Blank input issues no request.
    ///
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<MealSummary>, MealDbError> {
        if query.trim().is_empty() {
            debug!("Skipping search for blank query.");
            return Ok(vec![]);
        }
        debug!("Searching meals by name '{}'...", query);
        self.client.meals("search.php", &[("s", query)]).await
    }

    /// Returns meals containing the ingredient, narrowed to the category when
    /// one is given. Order follows the ingredient filter. The category call is
    /// skipped when the ingredient filter finds nothing. Blank input issues no
    /// request.
    ///
    pub async fn suggest_by_ingredient(
        &self,
        ingredient: &str,
        category: Option<&str>,
    ) -> Result<Vec<MealSummary>, MealDbError> {
        if ingredient.trim().is_empty() {
            debug!("Skipping suggestions for blank ingredient.");
            return Ok(vec![]);
        }
        debug!("Filtering meals by ingredient '{}'...", ingredient);
        let meals: Vec<MealSummary> = self.client.meals("filter.php", &[("i", ingredient)]).await?;

        let category = match category.map(str::trim) {
            Some(category) if !category.is_empty() && !meals.is_empty() => category,
            _ => return Ok(meals),
        };

        debug!("Filtering meals by category '{}'...", category);
        let in_category: Vec<MealSummary> =
            self.client.meals("filter.php", &[("c", category)]).await?;
        let ids: HashSet<&str> = in_category.iter().map(|m| m.id.as_str()).collect();
        let meals: Vec<MealSummary> = meals
            .into_iter()
            .filter(|m| ids.contains(m.id.as_str()))
            .collect();
        debug!(
            "{} meals with '{}' remain in category '{}'",
            meals.len(),
            ingredient,
            category
        );
        Ok(meals)
    }

    /// Returns the full record for the meal ID, or None if the catalog has no
    /// such meal.
    ///
    pub async fn fetch_by_id(&self, id: &str) -> Result<Option<Meal>, MealDbError> {
        debug!("Looking up meal ID {}...", id);
        let records: Vec<MealRecord> = self.client.meals("lookup.php", &[("i", id)]).await?;
        Ok(records.into_iter().next().map(MealRecord::into_meal))
    }
}
