//! HTTP client for meal catalog requests.
//!
//! This module provides a low-level wrapper around `reqwest` that issues GET
//! requests against catalog endpoints and unwraps the `meals` envelope.

use super::models::Envelope;
use super::MealDbError;
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Makes requests to the catalog and tries to conform response data to the
/// given record type.
///
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This only happens when
    /// the TLS backend fails to initialize.
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Return the records for the endpoint and query parameters. A `null` or
    /// missing `meals` key yields an empty vector.
    ///
    pub async fn meals<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>, MealDbError> {
        let response = self.call(endpoint, params).await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::error!(
                "Catalog request to {} failed with status {}: {}",
                endpoint,
                status,
                message
            );
            return Err(MealDbError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let response_bytes = response.bytes().await?;
        match serde_json::from_slice::<Envelope<T>>(&response_bytes) {
            Ok(envelope) => {
                let meals = envelope.meals.unwrap_or_default();
                log::debug!("Catalog {} returned {} records", endpoint, meals.len());
                Ok(meals)
            }
            Err(e) => {
                log::error!(
                    "Failed to deserialize catalog response: {}. Response body: {}",
                    e,
                    String::from_utf8_lossy(&response_bytes)
                );
                Err(e.into())
            }
        }
    }

    /// Make request and return the raw response or error.
    ///
    async fn call(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Response, MealDbError> {
        let request_url = format!("{}/{}", self.base_url, endpoint);
        Ok(self
            .http_client
            .get(&request_url)
            .query(params)
            .send()
            .await?)
    }
}
