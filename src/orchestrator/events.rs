//! Presentation events
//!
//! The orchestrator never renders anything itself; it publishes what changed
//! and whoever drives the UI subscribes.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::OrchestratorState;
use crate::effects::ConfettiBurst;
use crate::figure::FigureDimensions;
use crate::history::{ChartPoint, HistoryCollection};
use crate::metrics::BmiReading;
use crate::predictor::Prediction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "payload")]
pub enum PredictorEvent {
    /// The orchestrator moved to a new state
    StateChanged(OrchestratorState),
    /// A request is in flight; the predict control must be disabled
    TriggerDisabled,
    /// The predict control may be used again
    TriggerEnabled,
    /// Result card contents
    ResultReady { weight: f64, prediction: Prediction },
    /// BMI gauge contents
    BmiUpdated(BmiReading),
    /// History list contents, newest first
    HistoryUpdated(HistoryCollection),
    /// Figure contents
    FigureUpdated {
        weight: f64,
        height: f64,
        dimensions: FigureDimensions,
    },
    /// Chart series, oldest to newest
    ChartRefreshed(Vec<ChartPoint>),
    /// History was cleared; hide the chart
    ChartCleared,
    /// A prediction succeeded
    CelebrationStarted,
    /// One tick of the celebration effect
    ConfettiFrame { frame: usize, bursts: Vec<ConfettiBurst> },
    /// One step of the figure's arm wave
    WaveFrame { step: usize, arm_x2: u32, arm_y2: u32 },
    /// Inline error text
    Error(String),
}

/// Broadcast channel owned by one orchestrator session.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<PredictorEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1024);
        Self { tx }
    }

    /// Publish an event to all subscribers. Having none is fine.
    pub fn publish(&self, event: PredictorEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PredictorEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
