use crate::error::PredictionError;

pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 150.0;

/// Parse a raw weight entry. Both bounds are inclusive.
pub fn parse_weight(raw: &str) -> Result<f64, PredictionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PredictionError::invalid_weight());
    }

    let weight: f64 = trimmed
        .parse()
        .map_err(|_| PredictionError::invalid_weight())?;

    if !weight.is_finite() || weight < MIN_WEIGHT_KG || weight > MAX_WEIGHT_KG {
        return Err(PredictionError::invalid_weight());
    }
    Ok(weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(parse_weight("30").unwrap(), 30.0);
        assert_eq!(parse_weight("150").unwrap(), 150.0);
        assert_eq!(parse_weight(" 72.5 ").unwrap(), 72.5);
    }

    #[test]
    fn test_rejects_out_of_range_and_garbage() {
        for raw in ["", "   ", "abc", "29.999", "150.001", "200", "-70", "NaN", "inf", "70kg"] {
            let err = parse_weight(raw).unwrap_err();
            assert!(err.is_validation(), "input {raw:?}");
        }
    }
}
