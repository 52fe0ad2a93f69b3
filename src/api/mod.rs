pub mod dto;
pub mod errors;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::{auth::Credentials, store::ReadingStore};
use handlers::ApiDoc;

/// Per-request context: the reading store plus the static dashboard
/// credentials. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReadingStore>,
    pub credentials: Credentials,
}

pub fn router(store: Arc<dyn ReadingStore>, credentials: Credentials) -> Router {
    let state = AppState { store, credentials };

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .route(
            "/api/login",
            post(handlers::login).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/sensor",
            get(handlers::list_readings)
                .post(handlers::submit_reading)
                .fallback(handlers::method_not_allowed),
        )
        .route("/api/get", get(handlers::reading_history))
        .with_state(state)
        .split_for_parts();

    router
        .route("/health", get(handlers::health))
        .route(
            "/api-docs/openapi.json",
            get(move || async move { axum::Json(api) }),
        )
}
