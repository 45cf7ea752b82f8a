//! Error types surfaced to the user by a prediction attempt.

use thiserror::Error;

/// Message shown when the weight input fails validation.
pub const INVALID_WEIGHT_MESSAGE: &str = "Please enter a valid weight between 30-150 kg";

/// Fallback message when the predictor fails without saying why.
pub const GENERIC_FAILURE_MESSAGE: &str = "Prediction failed";

/// Why a prediction attempt did not produce a result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// Input was absent, non-numeric, or outside the accepted range.
    /// Never reaches the network.
    #[error("{0}")]
    Validation(String),

    /// The predictor returned a failure status or the transport failed.
    #[error("{0}")]
    Request(String),
}

impl PredictionError {
    pub fn invalid_weight() -> Self {
        Self::Validation(INVALID_WEIGHT_MESSAGE.to_string())
    }

    /// Build a request error from an optional collaborator message.
    pub fn request(message: Option<String>) -> Self {
        match message {
            Some(m) if !m.trim().is_empty() => Self::Request(m),
            _ => Self::Request(GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Inline text shown to the user.
    pub fn user_message(&self) -> String {
        format!("❌ Error: {}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_falls_back_to_generic_message() {
        assert_eq!(PredictionError::request(None).to_string(), "Prediction failed");
        assert_eq!(
            PredictionError::request(Some("  ".to_string())).to_string(),
            "Prediction failed"
        );
        assert_eq!(
            PredictionError::request(Some("model unavailable".to_string())).to_string(),
            "model unavailable"
        );
    }

    #[test]
    fn test_user_message_is_prefixed() {
        let err = PredictionError::invalid_weight();
        assert!(err.is_validation());
        assert_eq!(
            err.user_message(),
            "❌ Error: Please enter a valid weight between 30-150 kg"
        );
    }
}
