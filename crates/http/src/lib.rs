//! HTTP API server for case-tracker.

#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod api_types;
mod handlers;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use case_tracker_core::MAX_UPLOAD_BYTES;
use case_tracker_llm::CaseExtractor;
use case_tracker_service::{CaseService, ExtractionService};
use case_tracker_storage::CaseStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use api_error::ApiError;
pub use api_types::{PaginationQuery, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// Built once at startup and handed to the router; handlers never reach for globals.
pub struct AppState {
    /// Case persistence operations
    pub case_service: Arc<CaseService>,
    /// Model-backed case extraction
    pub extraction_service: Arc<ExtractionService>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn CaseStore>, extractor: CaseExtractor) -> Self {
        Self {
            case_service: Arc::new(CaseService::new(store)),
            extraction_service: Arc::new(ExtractionService::new(extractor)),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cases = get(handlers::cases::list_cases).post(handlers::cases::create_case);
    let extract_text = post(handlers::extraction::extract_from_text);
    let extract_image = post(handlers::extraction::extract_from_image);

    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/cases", cases.clone())
        .route("/api/cases/", cases)
        .route("/api/cases/{id}/complete", put(handlers::cases::mark_case_complete))
        .route("/api/extract-case-no", extract_text.clone())
        .route("/api/extract-case-no/", extract_text)
        .route("/api/extract-case-no-from-image", extract_image.clone())
        .route("/api/extract-case-no-from-image/", extract_image)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
