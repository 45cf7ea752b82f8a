//! History System Module
//!
//! Bounded newest-first prediction history, its durable store, and the
//! key-value backends it persists through.

pub mod backend;
pub mod collection;
pub mod record;
pub mod store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use collection::{ChartPoint, HistoryCollection, HISTORY_CAP};
pub use record::{IdSequence, PredictionRecord};
pub use store::{HistoryStore, HISTORY_KEY};
