//! Metrics Calculator
//!
//! Pure BMI computation and the display metadata attached to each
//! BMI category (gauge position, badge color, figure colors).

mod bmi;

pub use bmi::{compute_bmi, raw_bmi, round_one_decimal, BmiCategory, BmiReading};
