use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::Reading;

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Row shape served by `GET /api/sensor` — no `id`, matching what the
/// charting frontend consumes.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadingDto {
    pub device_id: String,
    pub heartrate: f64,
    pub spo2: f64,
    pub time: DateTime<Utc>,
}

impl From<Reading> for ReadingDto {
    fn from(r: Reading) -> Self {
        Self {
            device_id: r.device_id,
            heartrate: r.heartrate,
            spo2: r.spo2,
            // Store-assigned in normal operation; the current clock only
            // stands in for rows that somehow lack a timestamp.
            time: r.time.unwrap_or_else(Utc::now),
        }
    }
}

/// Row shape served by `GET /api/get` — the raw row including `id`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryEntryDto {
    pub id: Uuid,
    pub device_id: String,
    pub spo2: f64,
    pub heartrate: f64,
    pub time: Option<DateTime<Utc>>,
}

impl From<Reading> for HistoryEntryDto {
    fn from(r: Reading) -> Self {
        Self {
            id: r.id,
            device_id: r.device_id,
            spo2: r.spo2,
            heartrate: r.heartrate,
            time: r.time,
        }
    }
}
