use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::debug;

use crate::orchestrator::{EventBus, PredictorEvent};

pub const CONFETTI_DURATION: Duration = Duration::from_millis(2000);
pub const CONFETTI_INTERVAL: Duration = Duration::from_millis(100);
pub const CONFETTI_COLORS: [&str; 4] = ["#6366f1", "#8b5cf6", "#06b6d4", "#10b981"];

/// One confetti emission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfettiBurst {
    pub particle_count: u32,
    pub angle: u32,
    pub spread: u32,
    /// Horizontal origin, 0.0 is the left edge and 1.0 the right.
    pub origin_x: f64,
    pub colors: Vec<String>,
}

impl ConfettiBurst {
    fn from_edge(angle: u32, origin_x: f64) -> Self {
        Self {
            particle_count: 3,
            angle,
            spread: 55,
            origin_x,
            colors: CONFETTI_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// The pair fired on every tick: one from each side.
pub fn confetti_pair() -> Vec<ConfettiBurst> {
    vec![ConfettiBurst::from_edge(60, 0.0), ConfettiBurst::from_edge(120, 1.0)]
}

/// Fire-and-forget celebration with the default timing.
pub fn spawn_celebration(bus: EventBus) -> JoinHandle<usize> {
    tokio::spawn(run_celebration(bus, CONFETTI_DURATION, CONFETTI_INTERVAL))
}

/// Emit a confetti frame every `interval` until `duration` has passed.
/// Returns the number of frames emitted.
pub async fn run_celebration(bus: EventBus, duration: Duration, interval: Duration) -> usize {
    let start = Instant::now();
    let deadline = start + duration;
    let mut ticker = time::interval_at(start + interval, interval);
    let mut frames = 0;

    loop {
        let tick = ticker.tick().await;
        if tick >= deadline {
            break;
        }
        frames += 1;
        bus.publish(PredictorEvent::ConfettiFrame {
            frame: frames,
            bursts: confetti_pair(),
        });
    }

    debug!("Celebration finished after {} frames", frames);
    frames
}
