use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, State},
};
use case_tracker_core::TextIn;
use serde_json::Value;

use crate::AppState;
use crate::api_error::ApiError;

/// Multipart field carrying the uploaded image.
const FILE_FIELD: &str = "file";

pub async fn extract_from_text(
    State(state): State<Arc<AppState>>,
    Json(text_in): Json<TextIn>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.extraction_service.extract_from_text(&text_in.text).await?))
}

pub async fn extract_from_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(ToOwned::to_owned);
        let bytes = field.bytes().await?;
        let value = state
            .extraction_service
            .extract_from_image(file_name.as_deref(), bytes.to_vec())
            .await?;
        return Ok(Json(value));
    }
    Err(ApiError::BadRequest(format!("missing multipart field '{FILE_FIELD}'")))
}
