//! Bounded, newest-first prediction history.

use serde::{Deserialize, Serialize};

use super::PredictionRecord;

/// Maximum number of records kept.
pub const HISTORY_CAP: usize = 10;

/// A point on the history chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    /// 1-based position, oldest first.
    pub index: usize,
    pub weight: f64,
    pub height: f64,
}

impl ChartPoint {
    pub fn label(&self) -> String {
        format!("#{}", self.index)
    }

    pub fn tooltip_title(&self) -> String {
        format!("Weight: {} kg", self.weight)
    }

    pub fn tooltip_label(&self) -> String {
        format!("Height: {} cm", self.height)
    }
}

/// Past predictions, newest first, never longer than [`HISTORY_CAP`].
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct HistoryCollection {
    records: Vec<PredictionRecord>,
}

impl HistoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records already ordered newest first, dropping any past the cap.
    pub fn from_newest_first(mut records: Vec<PredictionRecord>) -> Self {
        records.truncate(HISTORY_CAP);
        Self { records }
    }

    /// Prepend a record, evicting from the tail once over the cap.
    pub fn push_front(&mut self, record: PredictionRecord) {
        self.records.insert(0, record);
        self.trim_to_cap();
    }

    fn trim_to_cap(&mut self) {
        self.records.truncate(HISTORY_CAP);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn newest(&self) -> Option<&PredictionRecord> {
        self.records.first()
    }

    pub fn records(&self) -> &[PredictionRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &PredictionRecord> {
        self.records.iter()
    }

    pub fn max_id(&self) -> Option<i64> {
        self.records.iter().map(PredictionRecord::id).max()
    }

    /// Chart series, oldest to newest.
    pub fn chart_series(&self) -> Vec<ChartPoint> {
        self.records
            .iter()
            .rev()
            .enumerate()
            .map(|(i, r)| ChartPoint {
                index: i + 1,
                weight: r.weight(),
                height: r.height(),
            })
            .collect()
    }
}
