//! Favorites registry.
//!
//! An ordered, ID-unique list of meal summaries mirrored to the key-value
//! store. Every toggle rewrites the whole list under [`FAVORITES_KEY`].

use crate::mealdb::MealSummary;
use crate::store::{KvStore, MemoryStore, SharedStore, StoreError};
use log::*;
use std::collections::HashSet;
use std::sync::Arc;

/// Store key holding the favorites list.
///
pub const FAVORITES_KEY: &str = "favorites";

/// Houses the favorite meals in insertion order.
///
pub struct Favorites {
    store: SharedStore,
    meals: Vec<MealSummary>,
}

impl Favorites {
    /// Read the stored favorites once. Missing or malformed data yields an
    /// empty list.
    ///
    pub fn load(store: SharedStore) -> Favorites {
        let meals = match store.get(FAVORITES_KEY) {
            Ok(Some(value)) => match serde_json::from_value::<Vec<MealSummary>>(value) {
                Ok(meals) => dedup(meals),
                Err(e) => {
                    warn!("Ignoring unreadable favorites: {}", e);
                    vec![]
                }
            },
            Ok(None) => vec![],
            Err(e) => {
                warn!("Ignoring unreadable favorites: {}", e);
                vec![]
            }
        };
        debug!("Loaded {} favorites", meals.len());
        Favorites { store, meals }
    }

    /// Remove the meal if a favorite with its ID exists, otherwise append it,
    /// then persist the whole list. Returns whether the meal is now a
    /// favorite. The in-memory list only changes once the store accepted it.
    ///
    pub fn toggle(&mut self, meal: MealSummary) -> Result<bool, StoreError> {
        let mut meals = self.meals.clone();
        let added = match meals.iter().position(|m| m.id == meal.id) {
            Some(index) => {
                meals.remove(index);
                false
            }
            None => {
                meals.push(meal.clone());
                true
            }
        };
        save(self.store.as_ref(), &meals)?;
        self.meals = meals;
        if added {
            info!("Added '{}' to favorites", meal.name);
        } else {
            info!("Removed '{}' from favorites", meal.name);
        }
        Ok(added)
    }

    /// Check if a meal is a favorite.
    ///
    pub fn contains(&self, id: &str) -> bool {
        self.meals.iter().any(|m| m.id == id)
    }

    /// Return favorites in insertion order.
    ///
    pub fn list(&self) -> &[MealSummary] {
        &self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

impl Default for Favorites {
    fn default() -> Self {
        Favorites::load(Arc::new(MemoryStore::default()))
    }
}

fn save(store: &dyn KvStore, meals: &[MealSummary]) -> Result<(), StoreError> {
    let value = serde_json::to_value(meals)?;
    store.set(FAVORITES_KEY, &value)
}

fn dedup(meals: Vec<MealSummary>) -> Vec<MealSummary> {
    let mut seen = HashSet::new();
    meals
        .into_iter()
        .filter(|m| seen.insert(m.id.clone()))
        .collect()
}
