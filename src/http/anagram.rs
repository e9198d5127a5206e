//! Handlers for the anagram API.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::anagram::AnagramGroup;
use crate::error::AnagramResult;
use crate::http::request::ParsedRequest;
use crate::http::response::{AnagramResponse, ApiError, HealthStatus};
use crate::http::server::AppState;
use crate::observability::metrics;

/// Label used until a registry has accepted the client's tag.
const UNKNOWN: &str = "unknown";

/// Metric labels for one request. Only registry-owned tags end up here, so
/// the set of label values stays bounded whatever clients send.
#[derive(Debug, Clone, Copy)]
struct Labels {
    origin: &'static str,
    algorithm: &'static str,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            origin: UNKNOWN,
            algorithm: UNKNOWN,
        }
    }
}

/// `POST /anagram`: read words from the requested source and group them.
pub async fn find_anagrams(State(state): State<AppState>, request: Request) -> Response {
    let start_time = Instant::now();
    let mut labels = Labels::default();

    let parsed = match ParsedRequest::from_http(request, &state).await {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(status = %e.status(), error = %e, "Rejected anagram request");
            metrics::record_request(labels.origin, labels.algorithm, e.status().as_u16(), start_time);
            return e.into_response();
        }
    };

    let origin = parsed.origin.clone();
    let algorithm = parsed.algorithm.clone();

    tracing::debug!(origin = %origin, algorithm = %algorithm, "Grouping anagrams");

    match group_words(&state, parsed, &mut labels).await {
        Ok((word_count, groups)) => {
            tracing::info!(
                origin = %origin,
                algorithm = %algorithm,
                words = word_count,
                groups = groups.len(),
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "Anagram request completed"
            );
            metrics::record_grouping(labels.origin, word_count, groups.len());
            metrics::record_request(labels.origin, labels.algorithm, 200, start_time);
            (StatusCode::OK, Json(AnagramResponse::groups(groups))).into_response()
        }
        Err(e) => {
            let e = ApiError::from(e);
            let status = e.status();
            if status.is_server_error() {
                tracing::error!(origin = %origin, algorithm = %algorithm, status = %status, error = %e, "Anagram request failed");
            } else {
                tracing::warn!(origin = %origin, algorithm = %algorithm, status = %status, error = %e, "Anagram request failed");
            }
            metrics::record_request(labels.origin, labels.algorithm, status.as_u16(), start_time);
            e.into_response()
        }
    }
}

/// Resolve grouper and source, read the words, group them.
///
/// The grouper is resolved first so a bad algorithm never triggers a fetch.
/// `labels` picks up each tag as its registry accepts it.
async fn group_words(
    state: &AppState,
    request: ParsedRequest,
    labels: &mut Labels,
) -> AnagramResult<(usize, Vec<AnagramGroup>)> {
    let grouper = state.groupers.create(&request.algorithm)?;
    labels.algorithm = grouper.name();
    let source = state.sources.create(&request.origin, request.payload)?;
    labels.origin = source.origin();

    let words = source.get_words().await?;
    let word_count = words.len();
    let groups = grouper.find_anagrams(words)?;

    Ok((word_count, groups))
}

/// `GET /health`.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
