//! Prediction Orchestrator
//!
//! Validates input, calls the predictor, and on success fans the result out
//! to the metrics calculator, the history store, the figure mapper and the
//! presentation events, in that order.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::input::parse_weight;
use super::{EventBus, OrchestratorState, PredictorEvent};
use crate::effects;
use crate::error::PredictionError;
use crate::figure::{map_proportions, FigureDimensions};
use crate::history::{ChartPoint, HistoryCollection, HistoryStore};
use crate::metrics::{compute_bmi, BmiReading};
use crate::predictor::{Prediction, Predictor};

/// Everything derived from one successful prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub weight: f64,
    pub prediction: Prediction,
    pub bmi: BmiReading,
    pub figure: FigureDimensions,
    pub history: HistoryCollection,
    pub chart: Vec<ChartPoint>,
}

pub struct PredictionOrchestrator {
    predictor: Arc<dyn Predictor>,
    history: HistoryStore,
    bus: EventBus,
    state: OrchestratorState,
    effects_enabled: bool,
}

impl PredictionOrchestrator {
    pub fn new(predictor: Arc<dyn Predictor>, history: HistoryStore) -> Self {
        Self {
            predictor,
            history,
            bus: EventBus::new(),
            state: OrchestratorState::Idle,
            effects_enabled: true,
        }
    }

    /// Toggle the timed celebration and wave tasks. The
    /// `CelebrationStarted` signal is published either way.
    pub fn with_effects(mut self, enabled: bool) -> Self {
        self.effects_enabled = enabled;
        self
    }

    pub fn events(&self) -> &EventBus {
        &self.bus
    }

    pub fn state(&self) -> OrchestratorState {
        self.state
    }

    pub fn history(&self) -> &HistoryCollection {
        self.history.collection()
    }

    /// Load stored history at session start and publish it if there is any.
    pub async fn restore(&mut self) -> HistoryCollection {
        let history = self.history.load().await;
        if !history.is_empty() {
            info!("Restored {} past predictions", history.len());
            self.bus.publish(PredictorEvent::HistoryUpdated(history.clone()));
            self.bus
                .publish(PredictorEvent::ChartRefreshed(history.chart_series()));
        }
        history
    }

    fn transition(&mut self, next: OrchestratorState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {:?} -> {:?}",
            self.state,
            next
        );
        debug!("Orchestrator {:?} -> {:?}", self.state, next);
        self.state = next;
        self.bus.publish(PredictorEvent::StateChanged(next));
    }

    fn fail(&mut self, error: PredictionError) -> PredictionError {
        self.transition(OrchestratorState::Failed);
        self.bus.publish(PredictorEvent::Error(error.user_message()));
        self.transition(OrchestratorState::Idle);
        error
    }

    /// Return to `Idle` after a submission whose future was dropped mid-flight.
    fn recover_abandoned(&mut self) {
        if self.state == OrchestratorState::Idle {
            return;
        }
        warn!("Previous submission abandoned in {:?}", self.state);
        if self.state == OrchestratorState::Requesting {
            self.bus.publish(PredictorEvent::TriggerEnabled);
        }
        self.state = OrchestratorState::Idle;
        self.bus
            .publish(PredictorEvent::StateChanged(OrchestratorState::Idle));
    }

    /// Run one prediction for a raw weight entry.
    ///
    /// Takes `&mut self`, so a second submission cannot start while one is
    /// in flight.
    #[tracing::instrument(skip(self, raw), fields(raw_len = raw.len()))]
    pub async fn submit(&mut self, raw: &str) -> Result<PredictionOutcome, PredictionError> {
        self.recover_abandoned();
        self.transition(OrchestratorState::Validating);
        let weight = match parse_weight(raw) {
            Ok(w) => w,
            Err(e) => {
                debug!("Rejected weight input {:?}", raw);
                return Err(self.fail(e));
            }
        };

        self.transition(OrchestratorState::Requesting);
        self.bus.publish(PredictorEvent::TriggerDisabled);
        let result = self.predictor.predict(weight).await;
        self.bus.publish(PredictorEvent::TriggerEnabled);

        let prediction = match result.and_then(usable_height) {
            Ok(p) => p,
            Err(e) => {
                warn!("Prediction for {} kg failed: {}", weight, e);
                return Err(self.fail(e));
            }
        };

        self.transition(OrchestratorState::Succeeded);
        let outcome = self.apply(weight, prediction).await;
        self.transition(OrchestratorState::Idle);
        Ok(outcome)
    }

    async fn apply(&mut self, weight: f64, prediction: Prediction) -> PredictionOutcome {
        let height = prediction.height;
        info!("Predicted {} cm for {} kg", height, weight);
        self.bus
            .publish(PredictorEvent::ResultReady { weight, prediction });

        let bmi = compute_bmi(weight, height);
        self.bus.publish(PredictorEvent::BmiUpdated(bmi));

        let history = match self.history.record(weight, height).await {
            Ok(history) => history,
            Err(e) => {
                warn!("Prediction history not persisted this time: {:#}", e);
                self.history.collection().clone()
            }
        };
        self.bus.publish(PredictorEvent::HistoryUpdated(history.clone()));

        let figure = map_proportions(weight, height);
        self.bus.publish(PredictorEvent::FigureUpdated {
            weight,
            height,
            dimensions: figure.clone(),
        });

        let chart = history.chart_series();
        self.bus.publish(PredictorEvent::ChartRefreshed(chart.clone()));

        self.bus.publish(PredictorEvent::CelebrationStarted);
        if self.effects_enabled {
            effects::spawn_wave(self.bus.clone());
            effects::spawn_celebration(self.bus.clone());
        }

        PredictionOutcome {
            weight,
            prediction,
            bmi,
            figure,
            history,
            chart,
        }
    }

    /// Empty the history and its durable entry. The caller has confirmed.
    pub async fn clear_history(&mut self) -> anyhow::Result<()> {
        self.history.clear().await?;
        info!("Prediction history cleared");
        self.bus
            .publish(PredictorEvent::HistoryUpdated(HistoryCollection::new()));
        self.bus.publish(PredictorEvent::ChartCleared);
        Ok(())
    }
}

/// Heights feed a division in the BMI formula, so only positive finite ones
/// are accepted.
fn usable_height(prediction: Prediction) -> Result<Prediction, PredictionError> {
    if prediction.height.is_finite() && prediction.height > 0.0 {
        Ok(prediction)
    } else {
        Err(PredictionError::Request(format!(
            "Invalid prediction response: height {} cm",
            prediction.height
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct FixedPredictor {
        result: Result<Prediction, PredictionError>,
        calls: AtomicUsize,
    }

    impl FixedPredictor {
        fn height(height: f64) -> Self {
            Self {
                result: Ok(Prediction {
                    height,
                    coefficient: 8.5,
                    intercept: 168.4,
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                result: Err(PredictionError::Request(message.to_string())),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Predictor for FixedPredictor {
        async fn predict(&self, _weight_kg: f64) -> Result<Prediction, PredictionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    /// Never answers within any reasonable timeout.
    struct StalledPredictor;

    #[async_trait]
    impl Predictor for StalledPredictor {
        async fn predict(&self, _weight_kg: f64) -> Result<Prediction, PredictionError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Err(PredictionError::request(None))
        }
    }

    fn orchestrator(predictor: Arc<FixedPredictor>) -> PredictionOrchestrator {
        let history = HistoryStore::new(Arc::new(MemoryStore::new()));
        PredictionOrchestrator::new(predictor, history).with_effects(false)
    }

    fn drain(rx: &mut tokio::sync::broadcast::Receiver<PredictorEvent>) -> Vec<PredictorEvent> {
        let mut events = Vec::new();
        while let Ok(e) = rx.try_recv() {
            events.push(e);
        }
        events
    }

    #[tokio::test]
    async fn test_success_fans_out_in_order() {
        let predictor = Arc::new(FixedPredictor::height(175.0));
        let mut orch = orchestrator(predictor.clone());
        let mut rx = orch.events().subscribe();

        let outcome = orch.submit("70").await.unwrap();
        assert_eq!(outcome.bmi.value, 22.9);
        assert_eq!(outcome.history.len(), 1);
        assert_eq!(outcome.chart.len(), 1);
        assert_eq!(orch.state(), OrchestratorState::Idle);

        let names: Vec<&'static str> = drain(&mut rx)
            .iter()
            .map(|e| match e {
                PredictorEvent::StateChanged(_) => "state",
                PredictorEvent::TriggerDisabled => "disable",
                PredictorEvent::TriggerEnabled => "enable",
                PredictorEvent::ResultReady { .. } => "result",
                PredictorEvent::BmiUpdated(_) => "bmi",
                PredictorEvent::HistoryUpdated(_) => "history",
                PredictorEvent::FigureUpdated { .. } => "figure",
                PredictorEvent::ChartRefreshed(_) => "chart",
                PredictorEvent::CelebrationStarted => "celebrate",
                _ => "other",
            })
            .collect();
        assert_eq!(
            names,
            vec![
                "state", "state", "disable", "enable", "state", "result", "bmi", "history",
                "figure", "chart", "celebrate", "state"
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_input_never_calls_predictor() {
        let predictor = Arc::new(FixedPredictor::height(175.0));
        let mut orch = orchestrator(predictor.clone());
        let mut rx = orch.events().subscribe();

        for raw in ["29.999", "150.001", "", "heavy"] {
            let err = orch.submit(raw).await.unwrap_err();
            assert!(err.is_validation());
        }
        assert_eq!(predictor.calls.load(Ordering::SeqCst), 0);
        assert!(orch.history().is_empty());

        let events = drain(&mut rx);
        assert!(events.contains(&PredictorEvent::StateChanged(OrchestratorState::Failed)));
        assert!(!events.contains(&PredictorEvent::TriggerDisabled));
    }

    #[tokio::test]
    async fn test_request_failure_is_not_recorded() {
        let predictor = Arc::new(FixedPredictor::failing("model unavailable"));
        let mut orch = orchestrator(predictor.clone());
        let mut rx = orch.events().subscribe();

        let err = orch.submit("70").await.unwrap_err();
        assert_eq!(err, PredictionError::Request("model unavailable".into()));
        assert!(orch.history().is_empty());
        assert_eq!(orch.state(), OrchestratorState::Idle);

        let events = drain(&mut rx);
        // Trigger re-enabled after failure.
        assert!(events.contains(&PredictorEvent::TriggerEnabled));
        assert!(events.contains(&PredictorEvent::Error(
            "❌ Error: model unavailable".into()
        )));
    }

    #[tokio::test]
    async fn test_clear_history_publishes_chart_cleared() {
        let predictor = Arc::new(FixedPredictor::height(175.0));
        let mut orch = orchestrator(predictor);
        orch.submit("70").await.unwrap();

        let mut rx = orch.events().subscribe();
        orch.clear_history().await.unwrap();
        assert!(orch.history().is_empty());
        assert!(drain(&mut rx).contains(&PredictorEvent::ChartCleared));
    }

    #[tokio::test]
    async fn test_non_positive_height_is_rejected_and_not_recorded() {
        for height in [0.0, -12.0, f64::NAN, f64::INFINITY] {
            let predictor = Arc::new(FixedPredictor::height(height));
            let mut orch = orchestrator(predictor.clone());
            let mut rx = orch.events().subscribe();

            let err = orch.submit("70").await.unwrap_err();
            assert!(matches!(&err, PredictionError::Request(m) if m.starts_with("Invalid prediction response")));
            assert!(orch.history().is_empty());
            assert_eq!(orch.state(), OrchestratorState::Idle);

            let events = drain(&mut rx);
            assert!(!events.iter().any(|e| matches!(e, PredictorEvent::BmiUpdated(_))));
            assert!(!events.contains(&PredictorEvent::CelebrationStarted));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_submission_does_not_wedge_the_next_one() {
        let history = HistoryStore::new(Arc::new(MemoryStore::new()));
        let mut orch =
            PredictionOrchestrator::new(Arc::new(StalledPredictor), history).with_effects(false);

        let timed_out = tokio::time::timeout(Duration::from_millis(10), orch.submit("70")).await;
        assert!(timed_out.is_err());
        assert_eq!(orch.state(), OrchestratorState::Requesting);

        let mut rx = orch.events().subscribe();
        let err = orch.submit("200").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(orch.state(), OrchestratorState::Idle);

        let events = drain(&mut rx);
        assert_eq!(events[0], PredictorEvent::TriggerEnabled);
        assert_eq!(events[1], PredictorEvent::StateChanged(OrchestratorState::Idle));
    }
}
