//! Detail overlay state.

use crate::mealdb::Meal;
use crate::nutrition::NutritionFacts;

/// The meal shown in the detail overlay. The generation identifies this
/// opening of the overlay; nutrition estimates carry it back so results for
/// a closed or replaced overlay can be recognised.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    meal: Meal,
    nutrition: Option<NutritionFacts>,
    show_instructions: bool,
    generation: u64,
}

impl Detail {
    pub fn new(meal: Meal, generation: u64) -> Self {
        Detail {
            meal,
            nutrition: None,
            show_instructions: false,
            generation,
        }
    }

    pub fn meal(&self) -> &Meal {
        &self.meal
    }

    pub fn nutrition(&self) -> Option<&NutritionFacts> {
        self.nutrition.as_ref()
    }

    pub fn set_nutrition(&mut self, nutrition: Option<NutritionFacts>) {
        self.nutrition = nutrition;
    }

    pub fn show_instructions(&self) -> bool {
        self.show_instructions
    }

    pub fn toggle_instructions(&mut self) {
        self.show_instructions = !self.show_instructions;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn new_detail_is_collapsed_without_nutrition() {
        let detail = Detail::new(Faker.fake(), 3);
        assert!(!detail.show_instructions());
        assert!(detail.nutrition().is_none());
        assert_eq!(detail.generation(), 3);
    }

    #[test]
    fn toggle_instructions() {
        let mut detail = Detail::new(Faker.fake(), 1);
        detail.toggle_instructions();
        assert!(detail.show_instructions());
        detail.toggle_instructions();
        assert!(!detail.show_instructions());
    }
}
