use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One past prediction. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRecord {
    weight: f64,
    height: f64,
    timestamp: DateTime<Utc>,
    id: i64,
}

impl PredictionRecord {
    pub fn new(weight: f64, height: f64, timestamp: DateTime<Utc>, id: i64) -> Self {
        Self {
            weight,
            height,
            timestamp,
            id,
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn id(&self) -> i64 {
        self.id
    }
}

/// Hands out creation-ordered ids derived from the clock.
///
/// Ids are milliseconds since the epoch; two records created within the same
/// millisecond (or after a clock step backwards) get `last + 1`. A stored id
/// at `i64::MAX` cannot be followed, so the clock value is used instead.
#[derive(Debug, Default, Clone)]
pub struct IdSequence {
    last: Option<i64>,
}

impl IdSequence {
    /// Resume after the largest id already handed out.
    pub fn resume_after(last: Option<i64>) -> Self {
        Self { last }
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> i64 {
        let candidate = now.timestamp_millis();
        let id = match self.last {
            Some(last) if candidate <= last => last.checked_add(1).unwrap_or(candidate),
            _ => candidate,
        };
        self.last = Some(id);
        id
    }
}
