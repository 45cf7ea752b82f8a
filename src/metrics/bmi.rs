use serde::{Deserialize, Serialize};

const UNDERWEIGHT_LIMIT: f64 = 18.5;
const NORMAL_LIMIT: f64 = 25.0;
const OVERWEIGHT_LIMIT: f64 = 30.0;

/// BMI band, derived and never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify an unrounded BMI value. Bands are half-open: `[18.5, 25)` is normal.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_LIMIT {
            Self::Underweight
        } else if bmi < NORMAL_LIMIT {
            Self::Normal
        } else if bmi < OVERWEIGHT_LIMIT {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal Weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Badge and figure fill color.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Underweight => "#3b82f6",
            Self::Normal => "#10b981",
            Self::Overweight => "#f59e0b",
            Self::Obese => "#ef4444",
        }
    }

    /// Figure outline color.
    pub fn stroke(&self) -> &'static str {
        match self {
            Self::Underweight => "#2563eb",
            Self::Normal => "#059669",
            Self::Overweight => "#d97706",
            Self::Obese => "#dc2626",
        }
    }

    /// Gauge marker position, percent of the gauge width.
    pub fn gauge_position(&self) -> u8 {
        match self {
            Self::Underweight => 10,
            Self::Normal => 35,
            Self::Overweight => 60,
            Self::Obese => 85,
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed BMI: display value plus category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmiReading {
    /// BMI rounded to one decimal place.
    pub value: f64,
    pub category: BmiCategory,
}

impl BmiReading {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    pub fn color(&self) -> &'static str {
        self.category.color()
    }

    pub fn gauge_position(&self) -> u8 {
        self.category.gauge_position()
    }
}

/// Unrounded BMI. `height_cm` must be positive.
pub fn raw_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    debug_assert!(height_cm > 0.0, "height must be positive, got {height_cm}");
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute the BMI for a weight/height pair.
///
/// The category is taken from the unrounded value so that display rounding
/// (e.g. 24.96 shown as 25.0) never moves a reading across a band edge.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> BmiReading {
    let bmi = raw_bmi(weight_kg, height_cm);
    BmiReading {
        value: round_one_decimal(bmi),
        category: BmiCategory::from_bmi(bmi),
    }
}
