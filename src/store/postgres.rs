use async_trait::async_trait;
use sqlx::PgPool;

use super::{NewReading, ReadingStore, SortOrder, StoreError};
use crate::db::Reading;

/// Postgres-backed [`ReadingStore`] over the `sensor_data` table.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    /// Optional cap on fetched rows (`READING_LIMIT`). `None` preserves the
    /// unbounded result sets existing clients rely on.
    limit: Option<i64>,
}

impl PgStore {
    pub fn new(pool: PgPool, limit: Option<i64>) -> Self {
        Self { pool, limit }
    }
}

#[async_trait]
impl ReadingStore for PgStore {
    async fn insert(&self, reading: NewReading) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO sensor_data (device_id, heartrate, spo2, time) \
             VALUES ($1, $2, $3, NOW())",
        )
        .bind(&reading.device_id)
        .bind(reading.heartrate)
        .bind(reading.spo2)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn fetch(&self, order: SortOrder) -> Result<Vec<Reading>, StoreError> {
        let sql = match order {
            SortOrder::TimeAscending => {
                "SELECT id, device_id, heartrate, spo2, time \
                 FROM sensor_data ORDER BY time ASC LIMIT $1"
            }
            SortOrder::TimeDescending => {
                "SELECT id, device_id, heartrate, spo2, time \
                 FROM sensor_data ORDER BY time DESC LIMIT $1"
            }
        };

        // LIMIT NULL places no bound on the result set.
        let rows = sqlx::query_as::<_, Reading>(sql)
            .bind(self.limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
