use crate::mealdb::MealDb;
use crate::nutrition::NutritionEstimator;
use crate::state::State;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SearchMeals {
        query: String,
        sequence: u64,
    },
    SuggestMeals {
        ingredients: String,
        category: Option<String>,
        sequence: u64,
    },
    LookupMeal {
        id: String,
        sequence: u64,
    },
    EstimateNutrition {
        meal_name: String,
        generation: u64,
    },
}

/// Specify struct for managing state with network events. Cloning is cheap;
/// each event is expected to run on its own task.
///
#[derive(Clone)]
pub struct Handler {
    state: Arc<Mutex<State>>,
    meal_db: Arc<MealDb>,
    nutrition: Arc<NutritionEstimator>,
}

impl Handler {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &Arc<Mutex<State>>, meal_db: MealDb, nutrition: NutritionEstimator) -> Self {
        Handler {
            state: Arc::clone(state),
            meal_db: Arc::new(meal_db),
            nutrition: Arc::new(nutrition),
        }
    }

    /// Handle network events by type. The state is only locked to apply the
    /// result once the remote call has resolved.
    ///
    pub async fn handle(&self, event: Event) {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::SearchMeals { query, sequence } => self.search_meals(query, sequence).await,
            Event::SuggestMeals {
                ingredients,
                category,
                sequence,
            } => self.suggest_meals(ingredients, category, sequence).await,
            Event::LookupMeal { id, sequence } => self.lookup_meal(id, sequence).await,
            Event::EstimateNutrition {
                meal_name,
                generation,
            } => self.estimate_nutrition(meal_name, generation).await,
        }
    }

    /// Update state with meals matching the query.
    ///
    async fn search_meals(&self, query: String, sequence: u64) {
        let result = self.meal_db.search_by_name(&query).await;
        let mut state = self.state.lock().await;
        state.apply_search_results(sequence, result);
    }

    /// Update state with meals suggested for the ingredients.
    ///
    async fn suggest_meals(&self, ingredients: String, category: Option<String>, sequence: u64) {
        let result = self
            .meal_db
            .suggest_by_ingredient(&ingredients, category.as_deref())
            .await;
        let mut state = self.state.lock().await;
        state.apply_suggestions(sequence, result);
    }

    /// Update state with the full meal record.
    ///
    async fn lookup_meal(&self, id: String, sequence: u64) {
        let result = self.meal_db.fetch_by_id(&id).await;
        let mut state = self.state.lock().await;
        state.apply_meal_detail(sequence, result);
    }

    /// Patch the detail overlay with a nutrition estimate.
    ///
    async fn estimate_nutrition(&self, meal_name: String, generation: u64) {
        let nutrition = self.nutrition.estimate(&meal_name).await;
        if let Some(facts) = &nutrition {
            info!(
                "Estimated {:.0} calories for '{}'.",
                facts.calories, meal_name
            );
        }
        let mut state = self.state.lock().await;
        state.apply_nutrition(generation, nutrition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::Favorites;
    use crate::logger::LogBuffer;
    use crate::preferences::Preferences;
    use crate::state::StateError;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::mpsc::{channel, Receiver};

    async fn setup(server: &MockServer) -> (Handler, Arc<Mutex<State>>, Receiver<Event>) {
        let (tx, rx) = channel();
        let state = Arc::new(Mutex::new(State::new(
            tx,
            Favorites::default(),
            Preferences::default(),
            LogBuffer::default(),
        )));
        let handler = Handler::new(
            &state,
            MealDb::new(&server.base_url()),
            NutritionEstimator::new(&server.base_url(), "demo", "demo"),
        );
        (handler, state, rx)
    }

    #[tokio::test]
    async fn search_event_updates_results() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search.php").query_param("s", "Kumpir");
                then.status(200).json_body(json!({
                    "meals": [{ "idMeal": "52978", "strMeal": "Kumpir", "strMealThumb": null }]
                }));
            })
            .await;
        let (handler, state, rx) = setup(&server).await;

        state.lock().await.set_query("Kumpir").submit_search();
        handler.handle(rx.try_recv().unwrap()).await;

        let state = state.lock().await;
        assert_eq!(state.search_results().len(), 1);
        assert_eq!(state.search_results()[0].name, "Kumpir");
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn search_event_failure_sets_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search.php");
                then.status(500);
            })
            .await;
        let (handler, state, rx) = setup(&server).await;

        state.lock().await.set_query("Kumpir").submit_search();
        handler.handle(rx.try_recv().unwrap()).await;

        assert_eq!(
            state.lock().await.error(),
            Some(&StateError::SearchFailed)
        );
    }

    #[tokio::test]
    async fn lookup_then_nutrition_patches_detail() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/lookup.php").query_param("i", "52977");
                then.status(200).json_body(json!({
                    "meals": [{
                        "idMeal": "52977",
                        "strMeal": "Corba",
                        "strArea": "Turkish",
                        "strInstructions": "Pick through your lentils.",
                        "strIngredient1": "Lentils",
                        "strMeasure1": "1 cup"
                    }]
                }));
            })
            .await;
        let nutrition_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/nutrition-data")
                    .query_param("ingr", "Corba");
                then.status(200).json_body(json!({
                    "calories": 248.5,
                    "totalNutrients": { "FAT": { "quantity": 10.2 } }
                }));
            })
            .await;
        let (handler, state, rx) = setup(&server).await;

        state.lock().await.open_meal("52977");
        handler.handle(rx.try_recv().unwrap()).await;
        {
            let state = state.lock().await;
            let detail = state.detail().unwrap();
            assert_eq!(detail.meal().ingredients, vec!["1 cup Lentils".to_string()]);
            assert!(detail.nutrition().is_none());
        }

        let nutrition_event = rx.try_recv().unwrap();
        assert!(matches!(nutrition_event, Event::EstimateNutrition { .. }));
        handler.handle(nutrition_event).await;
        nutrition_mock.assert_async().await;

        let state = state.lock().await;
        let nutrition = state.detail().unwrap().nutrition().unwrap();
        assert!((nutrition.calories - 248.5).abs() < 1e-9);
        assert!(nutrition.protein.is_none());
    }

    #[tokio::test]
    async fn nutrition_after_close_is_discarded() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/lookup.php");
                then.status(200).json_body(json!({
                    "meals": [{ "idMeal": "1", "strMeal": "Corba" }]
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/nutrition-data");
                then.status(200).json_body(json!({ "calories": 100.0 }));
            })
            .await;
        let (handler, state, rx) = setup(&server).await;

        state.lock().await.open_meal("1");
        handler.handle(rx.try_recv().unwrap()).await;
        let nutrition_event = rx.try_recv().unwrap();
        state.lock().await.close_detail();
        handler.handle(nutrition_event).await;

        let state = state.lock().await;
        assert!(state.detail().is_none());
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn nutrition_failure_never_sets_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/lookup.php");
                then.status(200).json_body(json!({
                    "meals": [{ "idMeal": "1", "strMeal": "Corba" }]
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/nutrition-data");
                then.status(503);
            })
            .await;
        let (handler, state, rx) = setup(&server).await;

        state.lock().await.open_meal("1");
        handler.handle(rx.try_recv().unwrap()).await;
        handler.handle(rx.try_recv().unwrap()).await;

        let state = state.lock().await;
        assert!(state.detail().unwrap().nutrition().is_none());
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn suggest_event_updates_suggestions() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/filter.php").query_param("i", "chicken");
                then.status(200).json_body(json!({
                    "meals": [
                        { "idMeal": "1", "strMeal": "Chicken Pie" },
                        { "idMeal": "2", "strMeal": "Chicken Cake" }
                    ]
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/filter.php").query_param("c", "Dessert");
                then.status(200).json_body(json!({
                    "meals": [{ "idMeal": "2", "strMeal": "Chicken Cake" }]
                }));
            })
            .await;
        let (handler, state, rx) = setup(&server).await;

        state
            .lock()
            .await
            .set_ingredients("chicken")
            .set_category(Some(2))
            .submit_suggestion();
        handler.handle(rx.try_recv().unwrap()).await;

        let state = state.lock().await;
        assert_eq!(state.suggestions().len(), 1);
        assert_eq!(state.suggestions()[0].id, "2");
    }
}
