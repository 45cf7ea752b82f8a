use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::orchestrator::{EventBus, PredictorEvent};

/// Pause between the figure update and the first wave frame.
pub const WAVE_DELAY: Duration = Duration::from_millis(1000);
pub const WAVE_INTERVAL: Duration = Duration::from_millis(300);
pub const WAVE_STEPS: usize = 5;

pub const ARM_X2: u32 = 160;
pub const ARM_RAISED_Y2: u32 = 120;
pub const ARM_REST_Y2: u32 = 140;

pub fn spawn_wave(bus: EventBus) -> JoinHandle<usize> {
    tokio::spawn(run_wave(bus, WAVE_DELAY, WAVE_INTERVAL))
}

/// Toggle the right arm between raised and resting, then leave it resting.
/// Returns the number of wave frames, not counting the final reset.
pub async fn run_wave(bus: EventBus, delay: Duration, interval: Duration) -> usize {
    time::sleep(delay).await;

    let mut ticker = time::interval_at(Instant::now() + interval, interval);
    for step in 0..WAVE_STEPS {
        ticker.tick().await;
        let arm_y2 = if step % 2 == 0 { ARM_RAISED_Y2 } else { ARM_REST_Y2 };
        bus.publish(PredictorEvent::WaveFrame {
            step,
            arm_x2: ARM_X2,
            arm_y2,
        });
    }

    bus.publish(PredictorEvent::WaveFrame {
        step: WAVE_STEPS,
        arm_x2: ARM_X2,
        arm_y2: ARM_REST_Y2,
    });
    WAVE_STEPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_wave_alternates_and_resets() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();
        let started = Instant::now();

        assert_eq!(spawn_wave(bus).await.unwrap(), WAVE_STEPS);
        assert!(started.elapsed() >= WAVE_DELAY + WAVE_INTERVAL * WAVE_STEPS as u32);

        let mut ys = Vec::new();
        while let Ok(PredictorEvent::WaveFrame { arm_y2, .. }) = rx.try_recv() {
            ys.push(arm_y2);
        }
        assert_eq!(ys, vec![120, 140, 120, 140, 120, 140]);
    }
}
