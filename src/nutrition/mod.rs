//! Nutrition estimator client.
//!
//! Estimates approximate nutrition for a free-text meal name. Estimates are an
//! enrichment only: every failure is logged and reported as no estimate.

mod error;

pub use error::NutritionError;

use fake::Dummy;
use log::*;
use serde_json::Value;

/// Default nutrition service base URL.
///
pub const DEFAULT_BASE_URL: &str = "https://api.edamam.com";

/// Approximate nutrition for one meal. Calories are required; fat and
/// protein are reported in grams when the service knows them.
///
#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct NutritionFacts {
    pub calories: f64,
    pub fat: Option<f64>,
    pub protein: Option<f64>,
}

impl NutritionFacts {
    /// Build facts from a service response body. Returns None when calories
    /// are missing, non-numeric or zero; the service answers zero calories for
    /// text it does not recognise.
    ///
    pub fn from_response(body: &Value) -> Option<NutritionFacts> {
        let calories = body
            .get("calories")
            .and_then(Value::as_f64)
            .filter(|calories| *calories > 0.0)?;
        let nutrient = |code: &str| {
            body.get("totalNutrients")
                .and_then(|nutrients| nutrients.get(code))
                .and_then(|nutrient| nutrient.get("quantity"))
                .and_then(Value::as_f64)
        };
        Some(NutritionFacts {
            calories,
            fat: nutrient("FAT"),
            protein: nutrient("PROCNT"),
        })
    }
}

/// Issues nutrition lookups against the nutrition-data endpoint.
///
pub struct NutritionEstimator {
    base_url: String,
    app_id: String,
    app_key: String,
    http_client: reqwest::Client,
}

impl NutritionEstimator {
    /// Returns a new instance for the given base URL and application
    /// credentials.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This only happens when
    /// the TLS backend fails to initialize.
    pub fn new(base_url: &str, app_id: &str, app_key: &str) -> Self {
        debug!("Initializing nutrition client for {}...", base_url);
        NutritionEstimator {
            base_url: base_url.trim_end_matches('/').to_owned(),
            app_id: app_id.to_owned(),
            app_key: app_key.to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Return an estimate for the meal name, or None if the service has no
    /// usable estimate or could not be reached.
    ///
    pub async fn estimate(&self, meal_name: &str) -> Option<NutritionFacts> {
        if meal_name.trim().is_empty() {
            return None;
        }
        debug!("Estimating nutrition for '{}'...", meal_name);
        match self.request(meal_name).await {
            Ok(body) => {
                let facts = NutritionFacts::from_response(&body);
                if facts.is_none() {
                    debug!("No calorie estimate available for '{}'", meal_name);
                }
                facts
            }
            Err(e) => {
                error!("Nutrition fetch failed for '{}': {}", meal_name, e);
                None
            }
        }
    }

    async fn request(&self, meal_name: &str) -> Result<Value, NutritionError> {
        let response = self
            .http_client
            .get(format!("{}/api/nutrition-data", self.base_url))
            .query(&[
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
                ("ingr", meal_name),
            ])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NutritionError::Status(status.as_u16()));
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
