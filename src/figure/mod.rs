//! Figure Proportion Mapper
//!
//! Scales the human figure's visual attributes from the ratio of the input
//! weight to a 70 kg reference, clamped into display ranges.

use serde::{Deserialize, Serialize};

use crate::metrics::{compute_bmi, BmiCategory};

/// Weight the figure is drawn at with no scaling.
pub const REFERENCE_WEIGHT_KG: f64 = 70.0;

pub const TORSO_RX_RANGE: (f64, f64) = (25.0, 50.0);
pub const TORSO_RY_RANGE: (f64, f64) = (50.0, 75.0);
pub const LEG_WIDTH_RANGE: (f64, f64) = (6.0, 16.0);
pub const ARM_WIDTH_RANGE: (f64, f64) = (5.0, 12.0);
pub const HEAD_RADIUS_RANGE: (f64, f64) = (20.0, 30.0);

/// Display dimensions for the figure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FigureDimensions {
    pub torso_rx: f64,
    pub torso_ry: f64,
    pub leg_width: f64,
    pub arm_width: f64,
    pub head_radius: f64,
    pub body_color: String,
    pub body_stroke: String,
    pub category: BmiCategory,
}

fn clamp_to(value: f64, (min, max): (f64, f64)) -> f64 {
    // f64::clamp passes NaN through; pin it to the lower bound instead.
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

/// Map a weight/height pair to figure dimensions and colors.
pub fn map_proportions(weight_kg: f64, height_cm: f64) -> FigureDimensions {
    let ratio = weight_kg / REFERENCE_WEIGHT_KG;
    let root = ratio.sqrt();
    let category = compute_bmi(weight_kg, height_cm).category;

    FigureDimensions {
        torso_rx: clamp_to(35.0 * ratio, TORSO_RX_RANGE),
        torso_ry: clamp_to(60.0 * root, TORSO_RY_RANGE),
        leg_width: clamp_to(10.0 * root, LEG_WIDTH_RANGE),
        arm_width: clamp_to(8.0 * root, ARM_WIDTH_RANGE),
        head_radius: clamp_to(25.0 + (ratio - 1.0) * 5.0, HEAD_RADIUS_RANGE),
        body_color: category.color().to_string(),
        body_stroke: category.stroke().to_string(),
        category,
    }
}
