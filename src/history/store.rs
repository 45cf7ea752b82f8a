//! History Store - owns the prediction history and keeps it durable
//!
//! The whole collection is rewritten under a single key after every
//! mutation; a missing or corrupt entry loads as an empty history.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, warn};

use super::{HistoryCollection, IdSequence, KeyValueStore, PredictionRecord};

/// Durable key holding the serialized history.
pub const HISTORY_KEY: &str = "predictionHistory";

pub struct HistoryStore {
    backend: Arc<dyn KeyValueStore>,
    collection: HistoryCollection,
    ids: IdSequence,
}

impl HistoryStore {
    /// An empty store over `backend`. Call [`HistoryStore::load`] to restore.
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            collection: HistoryCollection::new(),
            ids: IdSequence::default(),
        }
    }

    /// Read the durable entry, replacing the in-memory history.
    ///
    /// Absent, unreadable or malformed data yields an empty history.
    pub async fn load(&mut self) -> HistoryCollection {
        self.collection = match self.backend.get(HISTORY_KEY).await {
            Ok(Some(json)) => match serde_json::from_str::<Vec<PredictionRecord>>(&json) {
                Ok(records) => HistoryCollection::from_newest_first(records),
                Err(e) => {
                    warn!("Discarding malformed prediction history: {}", e);
                    HistoryCollection::new()
                }
            },
            Ok(None) => HistoryCollection::new(),
            Err(e) => {
                warn!("Could not read prediction history: {:#}", e);
                HistoryCollection::new()
            }
        };
        self.ids = IdSequence::resume_after(self.collection.max_id());

        debug!("Loaded {} history records", self.collection.len());
        self.collection.clone()
    }

    /// Record a prediction made now.
    pub async fn record(&mut self, weight_kg: f64, height_cm: f64) -> Result<HistoryCollection> {
        self.record_at(weight_kg, height_cm, Utc::now()).await
    }

    /// Record a prediction with an explicit creation instant.
    ///
    /// The in-memory history is updated even if the durable write fails;
    /// the error only reports that this cycle was not persisted.
    pub async fn record_at(
        &mut self,
        weight_kg: f64,
        height_cm: f64,
        now: DateTime<Utc>,
    ) -> Result<HistoryCollection> {
        let id = self.ids.next(now);
        self.collection
            .push_front(PredictionRecord::new(weight_kg, height_cm, now, id));

        self.persist().await?;
        Ok(self.collection.clone())
    }

    /// Drop every record and the durable entry. The caller has confirmed.
    pub async fn clear(&mut self) -> Result<()> {
        self.collection.clear();
        self.backend
            .remove(HISTORY_KEY)
            .await
            .context("Failed to remove prediction history")?;
        Ok(())
    }

    pub fn collection(&self) -> &HistoryCollection {
        &self.collection
    }

    async fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.collection)
            .context("Failed to serialize prediction history")?;
        self.backend
            .set(HISTORY_KEY, &json)
            .await
            .context("Failed to write prediction history")?;
        Ok(())
    }
}
