use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::error;

use crate::store::StoreError;

/// Failure shape for `/api/sensor`. Device firmware in the field parses the
/// `message`/`detail` pair, so it must stay distinct from [`HistoryError`].
#[derive(Debug)]
pub enum SensorError {
    /// Client sent an unusable payload; echoed back for diagnostics.
    Rejected {
        message: &'static str,
        received: Value,
    },
    Store(StoreError),
}

impl IntoResponse for SensorError {
    fn into_response(self) -> Response {
        match self {
            Self::Rejected { message, received } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": message, "received": received })),
            )
                .into_response(),
            Self::Store(e) => {
                error!(error = %e, "sensor endpoint failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Server error", "detail": e.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

impl From<StoreError> for SensorError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// Failure shape for `/api/get`. The dashboard reads a bare `error` key,
/// hence the different body from [`SensorError`].
#[derive(Debug)]
pub struct HistoryError(pub StoreError);

impl IntoResponse for HistoryError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "history endpoint failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

impl From<StoreError> for HistoryError {
    fn from(e: StoreError) -> Self {
        Self(e)
    }
}
