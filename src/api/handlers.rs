use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde_json::{json, Map, Value};
use utoipa::OpenApi;

use super::{
    dto::{HistoryEntryDto, LoginRequest, ReadingDto},
    errors::{HistoryError, SensorError},
    AppState,
};
use crate::store::{NewReading, SortOrder};

// ---------------------------------------------------------------------------
// Body parsing and validation
// ---------------------------------------------------------------------------

/// Parse a request body as JSON, treating a missing or malformed body as
/// `{}` so validation reports missing fields instead of a parse error.
fn parse_body(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Apply the write-path rules in order: field presence first ("Missing
/// sensor data"), then numeric typing ("Invalid data types"). Zero is a
/// legal value for both vitals, so presence is a null check, never a
/// falsiness check.
fn validate_reading(payload: &Value) -> Result<NewReading, &'static str> {
    const MISSING: &str = "Missing sensor data";
    const BAD_TYPES: &str = "Invalid data types";

    let device_id = match payload.get("device_id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => id.to_owned(),
        _ => return Err(MISSING),
    };

    let heartrate = payload.get("heartrate").filter(|v| !v.is_null());
    let spo2 = payload.get("spo2").filter(|v| !v.is_null());
    let (Some(heartrate), Some(spo2)) = (heartrate, spo2) else {
        return Err(MISSING);
    };

    // `as_f64` succeeds only for JSON numbers; `"72"` and `true` fail here.
    let (Some(heartrate), Some(spo2)) = (heartrate.as_f64(), spo2.as_f64()) else {
        return Err(BAD_TYPES);
    };

    Ok(NewReading {
        device_id,
        heartrate,
        spo2,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Validate dashboard credentials. Stateless: no token or session is
/// issued, the dashboard re-sends credentials as needed.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted"),
        (status = 401, description = "Credentials rejected"),
        (status = 405, description = "Method not allowed"),
    ),
    tag = "auth"
)]
pub async fn login(State(state): State<AppState>, body: Bytes) -> (StatusCode, Json<Value>) {
    let payload = parse_body(&body);
    let username = payload.get("username").and_then(Value::as_str);
    let password = payload.get("password").and_then(Value::as_str);

    // A malformed body or missing field is just a failed login, not a
    // distinct error.
    let ok = match (username, password) {
        (Some(user), Some(pass)) => state.credentials.verify(user, pass),
        _ => false,
    };

    if ok {
        (StatusCode::OK, Json(json!({ "success": true })))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "success": false })))
    }
}

/// Accept one reading from a device. The database stamps the row with its
/// own clock; clients never supply `time`.
#[utoipa::path(
    post,
    path = "/api/sensor",
    request_body = NewReadingBody,
    responses(
        (status = 200, description = "Reading persisted"),
        (status = 400, description = "Missing or mistyped fields, payload echoed back"),
        (status = 500, description = "Store failure"),
    ),
    tag = "sensors"
)]
pub async fn submit_reading(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, SensorError> {
    let payload = parse_body(&body);
    let reading = validate_reading(&payload).map_err(|message| SensorError::Rejected {
        message,
        received: payload,
    })?;

    state.store.insert(reading).await?;
    Ok(Json(json!({ "message": "Data saved successfully" })))
}

/// Serve every stored reading, oldest first, without `id`.
#[utoipa::path(
    get,
    path = "/api/sensor",
    responses(
        (status = 200, description = "Readings in ascending time order", body = Vec<ReadingDto>),
        (status = 500, description = "Store failure"),
    ),
    tag = "sensors"
)]
pub async fn list_readings(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReadingDto>>, SensorError> {
    let rows = state.store.fetch(SortOrder::TimeAscending).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Serve the full reading history including row IDs. Fetches newest-first
/// and re-reverses here; the response order is identical to the ascending
/// fetch on `/api/sensor`.
#[utoipa::path(
    get,
    path = "/api/get",
    responses(
        (status = 200, description = "Full history in ascending time order", body = Vec<HistoryEntryDto>),
        (status = 500, description = "Store failure"),
    ),
    tag = "sensors"
)]
pub async fn reading_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<HistoryEntryDto>>, HistoryError> {
    let mut rows = state.store.fetch(SortOrder::TimeDescending).await?;
    rows.reverse();
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Shared 405 body for routes that pin their method set.
pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "message": "Method not allowed" })),
    )
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Returns `200 OK` with `{"status":"ok"}` when the server is running.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "system"
)]
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// OpenAPI spec
// ---------------------------------------------------------------------------

/// Documented shape of the `POST /api/sensor` body. The handler itself
/// parses leniently so it can echo whatever arrived.
#[derive(Debug, serde::Deserialize, utoipa::ToSchema)]
pub struct NewReadingBody {
    pub device_id: String,
    /// Beats per minute.
    pub heartrate: f64,
    /// Blood-oxygen saturation, percent.
    pub spo2: f64,
}

#[derive(OpenApi)]
#[openapi(
    paths(login, submit_reading, list_readings, reading_history, health),
    components(schemas(LoginRequest, NewReadingBody, ReadingDto, HistoryEntryDto)),
    tags(
        (name = "auth",    description = "Dashboard login"),
        (name = "sensors", description = "Reading ingestion and retrieval"),
        (name = "system",  description = "System endpoints"),
    ),
    info(
        title = "Pulse Relay API",
        version = "0.1.0",
        description = "Ingestion and retrieval backend for heart-rate/SpO2 readings"
    )
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
