//! HTTP boundary for the sort benchmarking service.
//!
//! Two routes select the execution strategy and otherwise behave
//! identically: `/process-single` runs the sequential sorter,
//! `/process-concurrent` runs the fan-out/fan-in sorter. Both validate the
//! payload before the core is invoked and report the wall-clock time of the
//! core call in nanoseconds.

use axum::{
    extract::rejection::JsonRejection,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::sorter;

/// A strategy is any batch sorter with the core signature.
type SortStrategy = fn(&[Vec<i64>]) -> Vec<Vec<i64>>;

#[derive(Debug, Deserialize)]
pub struct SortRequest {
    #[serde(default)]
    pub to_sort: Vec<Vec<i64>>,
}

#[derive(Debug, Serialize)]
pub struct SortResponse {
    pub sorted_arrays: Vec<Vec<i64>>,
    pub time_ns: u64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Shared handler body: validate, run the chosen strategy, time it.
///
/// The strategy runs on the blocking pool — it is pure CPU work and would
/// otherwise stall the async workers. The two `Instant` captures bracket the
/// core call only, so scheduling overhead is not billed to the sort.
async fn process(
    payload: Result<Json<SortRequest>, JsonRejection>,
    strategy: SortStrategy,
) -> Result<Json<SortResponse>, AppError> {
    let Json(request) =
        payload.map_err(|_| AppError::BadRequest("Invalid JSON payload".to_string()))?;

    if request.to_sort.is_empty() {
        return Err(AppError::BadRequest("Empty 'to_sort' array".to_string()));
    }

    debug!("sorting batch of {} arrays", request.to_sort.len());

    let response = tokio::task::spawn_blocking(move || {
        let start = Instant::now();
        let sorted_arrays = strategy(&request.to_sort);
        let time_ns = start.elapsed().as_nanos() as u64;

        SortResponse {
            sorted_arrays,
            time_ns,
        }
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(response))
}

async fn process_single(
    payload: Result<Json<SortRequest>, JsonRejection>,
) -> Result<Json<SortResponse>, AppError> {
    process(payload, sorter::sort_sequential).await
}

async fn process_concurrent(
    payload: Result<Json<SortRequest>, JsonRejection>,
) -> Result<Json<SortResponse>, AppError> {
    process(payload, sorter::sort_concurrent).await
}

// =============================================================================
// Router
// =============================================================================

/// Build the service router with permissive CORS on all routes.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/process-single", post(process_single))
        .route("/process-concurrent", post(process_concurrent))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
