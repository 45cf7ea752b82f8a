//! Height Predictor
//!
//! Terminal client for a weight-to-height prediction service:
//! - Input validation and a single in-flight request per submission
//! - BMI and figure proportions derived from each prediction
//! - Bounded, durable prediction history with a chart series
//! - Presentation events for result, gauge, figure, chart and celebration

pub mod config;
pub mod effects;
pub mod error;
pub mod figure;
pub mod history;
pub mod metrics;
pub mod orchestrator;
pub mod predictor;
pub mod render;
pub mod telemetry;

// Re-exports for convenience
pub use config::AppConfig;
pub use error::PredictionError;
pub use history::{FileStore, HistoryStore, MemoryStore};
pub use orchestrator::{PredictionOrchestrator, PredictorEvent};
pub use predictor::{HttpPredictor, Prediction, Predictor};
