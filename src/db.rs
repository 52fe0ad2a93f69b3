use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// One persisted sensor sample. Rows are insert-only: nothing in this
/// service updates or deletes them after the fact.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Reading {
    pub id: Uuid,
    pub device_id: String,
    /// Beats per minute.
    pub heartrate: f64,
    /// Blood-oxygen saturation, percent.
    pub spo2: f64,
    /// Assigned by the database at insert time. `None` only for rows that
    /// predate the column default; readers substitute the current clock.
    pub time: Option<DateTime<Utc>>,
}

pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
