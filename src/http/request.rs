//! Request parsing for `POST /anagram`.
//!
//! # Responsibilities
//! - Sniff the content type (JSON or multipart upload)
//! - Turn the body into an origin tag, algorithm tag and `SourcePayload`
//!
//! # Design Decisions
//! - Tags are not checked here; the registries are the single authority
//! - `remote_url` data travels as a `Url` payload, other JSON data as `Text`
//! - Missing `algorithm` falls back to the built-in strategy

use std::io::Cursor;

use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::anagram::sort_and_group::SORT_AND_GROUP;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::source::{SourcePayload, REMOTE_URL, UPLOADED_FILE};

/// Body encodings `POST /anagram` understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Multipart,
}

/// Classify a `Content-Type` header by its media type, ignoring case and
/// parameters. `application/*+json` counts as JSON.
fn body_kind(content_type: &str) -> Option<BodyKind> {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match media_type.as_str() {
        "application/json" => Some(BodyKind::Json),
        "multipart/form-data" => Some(BodyKind::Multipart),
        other if other.starts_with("application/") && other.ends_with("+json") => {
            Some(BodyKind::Json)
        }
        _ => None,
    }
}

fn default_algorithm() -> String {
    SORT_AND_GROUP.to_string()
}

/// JSON body of `POST /anagram`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnagramRequest {
    /// Origin tag (`inline_text`, `remote_url`, ...).
    pub input_type: String,

    /// Comma-separated words, or the word-list URL.
    #[serde(default)]
    pub input_data: String,

    /// Algorithm tag.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl AnagramRequest {
    fn into_parsed(self) -> ParsedRequest {
        let payload = if self.input_type == REMOTE_URL {
            SourcePayload::Url(self.input_data)
        } else {
            SourcePayload::Text(self.input_data)
        };
        ParsedRequest {
            origin: self.input_type,
            algorithm: self.algorithm,
            payload,
        }
    }
}

/// Transport-independent view of one request.
#[derive(Debug)]
pub struct ParsedRequest {
    pub origin: String,
    pub algorithm: String,
    pub payload: SourcePayload,
}

impl ParsedRequest {
    /// Parse `request` according to its content type.
    pub async fn from_http(request: Request, state: &AppState) -> Result<Self, ApiError> {
        let content_type = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        match body_kind(&content_type) {
            Some(BodyKind::Multipart) => {
                let multipart = Multipart::from_request(request, state)
                    .await
                    .map_err(|e| ApiError::malformed(e.status(), e.body_text()))?;
                Self::from_multipart(multipart).await
            }
            Some(BodyKind::Json) => {
                let Json(body) = Json::<AnagramRequest>::from_request(request, state)
                    .await
                    .map_err(|e| ApiError::malformed(e.status(), e.body_text()))?;
                Ok(body.into_parsed())
            }
            None => Err(ApiError::UnsupportedContentType(content_type)),
        }
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut file = None;
        let mut origin = None;
        let mut algorithm = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::malformed(e.status(), e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" => {
                    file = Some(
                        field
                            .bytes()
                            .await
                            .map_err(|e| ApiError::malformed(e.status(), e.body_text()))?,
                    )
                }
                "inputType" => {
                    origin = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| ApiError::malformed(e.status(), e.body_text()))?,
                    )
                }
                "algorithm" => {
                    algorithm = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| ApiError::malformed(e.status(), e.body_text()))?,
                    )
                }
                _ => {}
            }
        }

        let file = file.ok_or(ApiError::MissingFile)?;
        Ok(Self {
            origin: origin
                .filter(|o| !o.is_empty())
                .unwrap_or_else(|| UPLOADED_FILE.to_string()),
            algorithm: algorithm
                .filter(|a| !a.is_empty())
                .unwrap_or_else(default_algorithm),
            payload: SourcePayload::stream(Cursor::new(file)),
        })
    }
}
