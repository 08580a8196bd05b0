//! Wire models for catalog responses.

use super::Meal;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Number of numbered ingredient/measure field pairs on a full record.
///
pub const INGREDIENT_SLOTS: usize = 20;

/// Every catalog endpoint wraps its records in `{"meals": [...]}`, with
/// `null` (or a missing key) meaning no match.
///
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub meals: Option<Vec<T>>,
}

/// Full record as returned by the lookup endpoint. The numbered
/// `strIngredientN`/`strMeasureN` fields land in `fields`.
///
#[derive(Clone, Debug, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl MealRecord {
    /// Collapse the numbered ingredient/measure pairs into display lines.
    /// Slots with an empty or missing ingredient are skipped; the measure is
    /// kept verbatim, blank or not.
    ///
    pub fn ingredient_lines(&self) -> Vec<String> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let ingredient = self.text_field(&format!("strIngredient{}", slot))?;
                if ingredient.is_empty() {
                    return None;
                }
                let measure = self
                    .text_field(&format!("strMeasure{}", slot))
                    .unwrap_or("");
                Some(format!("{} {}", measure, ingredient))
            })
            .collect()
    }

    fn text_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Convert into the full meal representation.
    ///
    pub fn into_meal(self) -> Meal {
        let ingredients = self.ingredient_lines();
        Meal {
            id: self.id,
            name: self.name,
            thumbnail: self.thumbnail,
            area: self.area,
            instructions: self.instructions,
            ingredients,
        }
    }
}
