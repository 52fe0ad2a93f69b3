use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{NewReading, ReadingStore, SortOrder, StoreError};
use crate::db::Reading;

/// In-memory [`ReadingStore`] backing the handler tests and local
/// experiments. Assigns `id` and `time` the way the database would.
///
/// Wrapped in `Arc` so clones share the same rows across tasks.
#[derive(Clone, Default)]
pub struct MemoryStore {
    rows: Arc<RwLock<Vec<Reading>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-formed row, timestamp included. Lets tests pin exact
    /// times instead of racing the clock.
    pub async fn insert_row(&self, row: Reading) {
        self.rows.write().await.push(row);
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl ReadingStore for MemoryStore {
    async fn insert(&self, reading: NewReading) -> Result<(), StoreError> {
        let row = Reading {
            id: Uuid::new_v4(),
            device_id: reading.device_id,
            heartrate: reading.heartrate,
            spo2: reading.spo2,
            time: Some(Utc::now()),
        };
        self.rows.write().await.push(row);
        Ok(())
    }

    async fn fetch(&self, order: SortOrder) -> Result<Vec<Reading>, StoreError> {
        let mut rows = self.rows.read().await.clone();
        // Stable sort keeps insertion order for identical timestamps.
        rows.sort_by_key(|r| r.time);
        if order == SortOrder::TimeDescending {
            rows.reverse();
        }
        Ok(rows)
    }
}
