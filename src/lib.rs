//! A terminal recipe explorer backed by TheMealDB.
//!
//! Search meals by name, get suggestions from ingredients, inspect full
//! recipes with an approximate nutrition estimate, and keep a persisted list
//! of favorites.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod favorites;
pub mod logger;
pub mod mealdb;
pub mod nutrition;
pub mod preferences;
pub mod state;
pub mod store;
pub mod ui;
