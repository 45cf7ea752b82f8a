//! Prediction collaborator
//!
//! The remote model is opaque: it takes a weight and answers with a height
//! plus the coefficient and intercept it used.

pub mod http;

pub use http::HttpPredictor;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PredictionError;

/// A successful prediction. `coefficient` and `intercept` are display-only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    pub height: f64,
    pub coefficient: f64,
    pub intercept: f64,
}

impl Prediction {
    /// Model formula as shown on the result card.
    pub fn formula(&self) -> String {
        format!(
            "Height = {} + {} × (Standardized Weight)",
            self.intercept, self.coefficient
        )
    }
}

#[async_trait]
pub trait Predictor: Send + Sync {
    /// Predict a height in centimeters for a validated weight in kilograms.
    async fn predict(&self, weight_kg: f64) -> Result<Prediction, PredictionError>;
}
