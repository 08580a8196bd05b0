use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines the summary shape of a meal as returned by search and filter
/// calls. Two summaries are equal when their IDs are.
///
/// Field names follow the catalog's wire format so favorites can be stored
/// and read back in the same shape.
///
#[derive(Clone, Debug, Dummy, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

impl PartialEq for MealSummary {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MealSummary {}

/// Defines full meal data structure, only produced by a lookup by ID.
///
#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<String>, // "measure ingredient" display lines, catalog order
}

impl Meal {
    /// Return the summary projection of this meal.
    ///
    pub fn summary(&self) -> MealSummary {
        MealSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            thumbnail: self.thumbnail.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use serde_json::json;

    #[test]
    fn summary_equality_uses_id_only() {
        let meal: MealSummary = Faker.fake();
        let renamed = MealSummary {
            name: format!("{} (renamed)", meal.name),
            thumbnail: None,
            ..meal.clone()
        };
        assert_eq!(meal, renamed);
    }

    #[test]
    fn summary_reads_catalog_fields() {
        let summary: MealSummary = serde_json::from_value(json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strMealThumb": "https://example.com/teriyaki.jpg",
            "strArea": "Japanese"
        }))
        .unwrap();
        assert_eq!(summary.id, "52772");
        assert_eq!(summary.name, "Teriyaki Chicken Casserole");
        assert_eq!(
            summary.thumbnail.as_deref(),
            Some("https://example.com/teriyaki.jpg")
        );
    }

    #[test]
    fn summary_of_full_meal() {
        let meal: Meal = Faker.fake();
        let summary = meal.summary();
        assert_eq!(summary.id, meal.id);
        assert_eq!(summary.name, meal.name);
        assert_eq!(summary.thumbnail, meal.thumbnail);
    }
}
