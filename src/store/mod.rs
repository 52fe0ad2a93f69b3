mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::db::Reading;

/// Retrieval order for [`ReadingStore::fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    TimeAscending,
    TimeDescending,
}

/// A validated sample ready to persist. `id` and `time` are assigned by the
/// store, never by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReading {
    pub device_id: String,
    pub heartrate: f64,
    pub spo2: f64,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    /// The backing store could not be reached at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence seam for readings.
///
/// The production implementation talks to Postgres; [`MemoryStore`] backs
/// the handler tests. Both read endpoints go through [`fetch`], differing
/// only in the order they ask for.
///
/// [`fetch`]: ReadingStore::fetch
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Persist one reading as a single atomic statement. The store stamps
    /// the row with its own clock.
    async fn insert(&self, reading: NewReading) -> Result<(), StoreError>;

    /// Fetch every stored reading ordered by `time`, honoring the
    /// configured row cap if one is set.
    async fn fetch(&self, order: SortOrder) -> Result<Vec<Reading>, StoreError>;
}
