//! Request handlers and query-parameter validation.
//!
//! # Responsibilities
//! - Parse the `url`, `threads` and `concurrent` query parameters
//! - Reject missing or malformed parameters before any dispatch happens
//! - Render the final tally as plain text

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::http::server::AppState;

/// Raw query parameters for `/test-url`.
///
/// All fields are optional strings so that missing and malformed values can
/// be told apart and reported with distinct status codes.
#[derive(Debug, Deserialize)]
pub struct TestUrlParams {
    url: Option<String>,
    threads: Option<String>,
    concurrent: Option<String>,
}

/// Validation failures surfaced to the HTTP caller.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Query parameter '{0}' is missing")]
    MissingParam(&'static str),

    #[error("Query parameter '{0}' must be a non-negative integer")]
    NotAnInteger(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,
            ApiError::NotAnInteger(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, self.to_string()).into_response()
    }
}

/// `GET /test-url` — run one load-test batch and report the tally.
pub async fn test_url(
    State(state): State<AppState>,
    Query(params): Query<TestUrlParams>,
) -> Result<String, ApiError> {
    let url = params
        .url
        .filter(|u| !u.is_empty())
        .ok_or(ApiError::MissingParam("url"))?;

    let threads_raw = params
        .threads
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::MissingParam("threads"))?;

    // Absent or empty `concurrent` falls back to `threads`: one worker per
    // request, effectively unbounded concurrency for the batch.
    let concurrent_raw = params
        .concurrent
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| threads_raw.clone());

    let threads = parse_count(&threads_raw, "threads")?;
    let concurrent = parse_count(&concurrent_raw, "concurrent")?;

    tracing::info!(url = %url, threads, concurrent, "load test requested");

    let tally = state.dispatcher.dispatch(&url, threads, concurrent).await;

    Ok(format!(
        "Success: {}, Errors: {}",
        tally.success, tally.errors
    ))
}

fn parse_count(raw: &str, name: &'static str) -> Result<usize, ApiError> {
    raw.parse().map_err(|_| ApiError::NotAnInteger(name))
}
