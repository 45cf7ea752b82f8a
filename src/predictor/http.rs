use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

use super::{Prediction, Predictor};
use crate::error::PredictionError;

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Calls a `POST /predict` style JSON endpoint.
pub struct HttpPredictor {
    client: Client,
    endpoint: String,
}

impl HttpPredictor {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    async fn predict(&self, weight_kg: f64) -> Result<Prediction, PredictionError> {
        debug!("Requesting prediction for {} kg from {}", weight_kg, self.endpoint);

        let res = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "weight": weight_kg }))
            .send()
            .await
            .map_err(|e| {
                warn!("Prediction transport failure: {}", e);
                PredictionError::Request(e.to_string())
            })?;

        let status = res.status();
        if !status.is_success() {
            // The body may be missing or not JSON at all.
            let message = res
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            warn!("Predictor answered {}: {:?}", status, message);
            return Err(PredictionError::request(message));
        }

        res.json::<Prediction>().await.map_err(|e| {
            warn!("Malformed prediction response: {}", e);
            PredictionError::Request(format!("Invalid prediction response: {e}"))
        })
    }
}
