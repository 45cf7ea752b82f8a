//! Orchestrator Module
//!
//! Drives one prediction at a time from raw input to presentation events.

pub mod events;
pub mod input;
pub mod pipeline;
pub mod state;

pub use events::{EventBus, PredictorEvent};
pub use input::{parse_weight, MAX_WEIGHT_KG, MIN_WEIGHT_KG};
pub use pipeline::{PredictionOrchestrator, PredictionOutcome};
pub use state::OrchestratorState;
