//! Nutrition service error types.

/// Errors that can occur while requesting a nutrition estimate. These never
/// reach the user; the estimator logs them and reports no estimate.
#[derive(Debug, thiserror::Error)]
pub enum NutritionError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Service returned a non-success status
    #[error("Nutrition service returned status {0}")]
    Status(u16),

    /// Failed to deserialize service response
    #[error("Failed to deserialize nutrition response: {0}")]
    Deserialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrition_error_display() {
        let error = NutritionError::Status(429);
        assert!(error.to_string().contains("429"));
    }
}
