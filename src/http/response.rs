//! Response bodies and error-to-status mapping.
//!
//! # Responsibilities
//! - Serialize anagram groups as `{"anagramGroups": [...]}`
//! - Serialize failures as `{"anagramGroups": null, "error": "..."}`
//! - Map core and request errors to HTTP status codes
//!
//! # Design Decisions
//! - Every source/grouper error is a client error, except remote fetch
//!   failures which surface as 502 Bad Gateway
//! - Oversized bodies keep axum's 413

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::anagram::AnagramGroup;
use crate::error::AnagramError;

/// Body returned by `POST /anagram`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnagramResponse {
    /// Groups of anagrams; `null` when the request failed.
    pub anagram_groups: Option<Vec<AnagramGroup>>,

    /// Failure description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnagramResponse {
    pub fn groups(groups: Vec<AnagramGroup>) -> Self {
        Self {
            anagram_groups: Some(groups),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            anagram_groups: None,
            error: Some(message.into()),
        }
    }
}

/// Body returned by `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Anything that stops an `/anagram` request from producing groups.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Anagram(#[from] AnagramError),

    /// JSON or multipart body could not be read.
    #[error("invalid request format: {message}")]
    Malformed { status: StatusCode, message: String },

    #[error("multipart request must include a `file` field")]
    MissingFile,

    #[error("unsupported content type `{0}`. supported: application/json, multipart/form-data")]
    UnsupportedContentType(String),

    #[error("request timed out")]
    Timeout,
}

impl ApiError {
    /// Build a `Malformed` error from an axum rejection's status and text.
    pub fn malformed(status: StatusCode, message: String) -> Self {
        let status = if status == StatusCode::PAYLOAD_TOO_LARGE {
            status
        } else {
            StatusCode::BAD_REQUEST
        };
        ApiError::Malformed { status, message }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Anagram(AnagramError::Fetch { .. }) => StatusCode::BAD_GATEWAY,
            ApiError::Anagram(_) => StatusCode::BAD_REQUEST,
            ApiError::Malformed { status, .. } => *status,
            ApiError::MissingFile => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(AnagramResponse::error(self.to_string()))).into_response()
    }
}
