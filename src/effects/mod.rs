//! Cosmetic timed effects
//!
//! Both effects run as detached tokio tasks on a fixed schedule and end on
//! their own; nothing needs to cancel them.

pub mod celebration;
pub mod wave;

pub use celebration::{confetti_pair, run_celebration, spawn_celebration, ConfettiBurst};
pub use wave::{run_wave, spawn_wave};
