use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use case_tracker_core::{Case, NewCase};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::PaginationQuery;

pub async fn create_case(
    State(state): State<Arc<AppState>>,
    Json(new_case): Json<NewCase>,
) -> Result<Json<Case>, ApiError> {
    Ok(Json(state.case_service.create_case(new_case).await?))
}

pub async fn list_cases(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Vec<Case>>, ApiError> {
    Ok(Json(state.case_service.list_cases(query.skip, query.limit).await?))
}

pub async fn mark_case_complete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Case>, ApiError> {
    Ok(Json(state.case_service.mark_complete(id).await?))
}
