//! In-process tests for the `/anagram` API.

use anagram_finder::config::AppConfig;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

mod common;

use common::{groups, json_request, multipart_request, read_response, test_server};

fn app() -> axum::Router {
    test_server(AppConfig::default()).router()
}

#[tokio::test]
async fn test_inline_text_request() {
    let response = app()
        .oneshot(json_request(
            r#"{"inputType": "inline_text", "inputData": "listen,enlist,inlets,cat,silent,tac,nag a ram,anagram", "algorithm": "sort_and_group"}"#,
        ))
        .await
        .unwrap();

    let (status, body) = read_response(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.anagram_groups,
        Some(groups(&[
            &["listen", "enlist", "inlets", "silent"],
            &["cat", "tac"],
            &["nag a ram", "anagram"],
        ]))
    );
    assert_eq!(body.error, None);
}

#[tokio::test]
async fn test_no_anagrams_is_empty_list() {
    let response = app()
        .oneshot(json_request(r#"{"inputType": "inline_text", "inputData": "hello,world"}"#))
        .await
        .unwrap();

    let (status, body) = read_response(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.anagram_groups, Some(Vec::new()));
}

#[tokio::test]
async fn test_invalid_input_type() {
    let response = app()
        .oneshot(json_request(
            r#"{"inputType": "invalid", "inputData": "listen,enlist", "algorithm": "sort_and_group"}"#,
        ))
        .await
        .unwrap();

    let (status, body) = read_response(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.anagram_groups, None);
    assert_eq!(
        body.error.as_deref(),
        Some("unknown input type `invalid`. supported types: inline_text, remote_url, uploaded_file")
    );
}

#[tokio::test]
async fn test_invalid_algorithm() {
    let response = app()
        .oneshot(json_request(
            r#"{"inputType": "inline_text", "inputData": "listen,enlist", "algorithm": "invalid"}"#,
        ))
        .await
        .unwrap();

    let (status, body) = read_response(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.error.unwrap().starts_with("unknown algorithm `invalid`"));
}

#[tokio::test]
async fn test_single_word_is_rejected() {
    let response = app()
        .oneshot(json_request(r#"{"inputType": "inline_text", "inputData": "invalidData"}"#))
        .await
        .unwrap();

    let (status, body) = read_response(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.error.as_deref(),
        Some("input must contain at least two comma-separated words")
    );
}

#[tokio::test]
async fn test_malformed_json() {
    let response = app().oneshot(json_request(r#"{"inputType": "#)).await.unwrap();

    let (status, body) = read_response(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.error.unwrap().starts_with("invalid request format"));
}

#[tokio::test]
async fn test_unsupported_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/anagram")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("cat,tac"))
        .unwrap();

    let (status, body) = read_response(app().oneshot(request).await.unwrap()).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body.error.unwrap().contains("text/plain"));
}

#[tokio::test]
async fn test_content_type_is_case_insensitive() {
    let request = Request::builder()
        .method("POST")
        .uri("/anagram")
        .header(header::CONTENT_TYPE, "Application/JSON; charset=utf-8")
        .body(Body::from(r#"{"inputType": "inline_text", "inputData": "cat,tac"}"#))
        .unwrap();

    let (status, body) = read_response(app().oneshot(request).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.anagram_groups, Some(groups(&[&["cat", "tac"]])));
}

#[tokio::test]
async fn test_json_lookalike_content_type_is_unsupported() {
    let request = Request::builder()
        .method("POST")
        .uri("/anagram")
        .header(header::CONTENT_TYPE, "application/jsonx")
        .body(Body::from(r#"{"inputType": "inline_text", "inputData": "cat,tac"}"#))
        .unwrap();

    let (status, body) = read_response(app().oneshot(request).await.unwrap()).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body.error.unwrap().contains("application/jsonx"));
}

#[tokio::test]
async fn test_uploaded_file_via_json_is_rejected() {
    let response = app()
        .oneshot(json_request(r#"{"inputType": "uploaded_file", "inputData": "cat,tac"}"#))
        .await
        .unwrap();

    let (status, body) = read_response(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.error.as_deref(),
        Some("input type `uploaded_file` expects a file upload")
    );
}

#[tokio::test]
async fn test_file_upload() {
    let request = multipart_request(
        Some("listen\nenlist\ninlets\ncat\nsilent\ntac\nnag a ram\nanagram"),
        Some("uploaded_file"),
        Some("sort_and_group"),
    );

    let (status, body) = read_response(app().oneshot(request).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.anagram_groups,
        Some(groups(&[
            &["listen", "enlist", "inlets", "silent"],
            &["cat", "tac"],
            &["nag a ram", "anagram"],
        ]))
    );
}

#[tokio::test]
async fn test_file_upload_defaults_tags() {
    let request = multipart_request(Some("Stop\r\npots\r\nopts\r\n"), None, None);

    let (status, body) = read_response(app().oneshot(request).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.anagram_groups, Some(groups(&[&["Stop", "pots", "opts"]])));
}

#[tokio::test]
async fn test_empty_file_upload() {
    let request = multipart_request(Some(""), Some("uploaded_file"), None);

    let (status, body) = read_response(app().oneshot(request).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.anagram_groups, Some(Vec::new()));
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let request = multipart_request(None, Some("uploaded_file"), Some("sort_and_group"));

    let (status, body) = read_response(app().oneshot(request).await.unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.error.unwrap().contains("`file`"));
}

#[tokio::test]
async fn test_upload_with_text_origin_is_rejected() {
    let request = multipart_request(Some("cat\ntac"), Some("inline_text"), None);

    let (status, body) = read_response(app().oneshot(request).await.unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.error.as_deref(),
        Some("input type `inline_text` expects comma-separated text")
    );
}

#[tokio::test]
async fn test_invalid_remote_url() {
    let response = app()
        .oneshot(json_request(r#"{"inputType": "remote_url", "inputData": "file:///etc/passwd"}"#))
        .await
        .unwrap();

    let (status, body) = read_response(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.error.unwrap().contains("unsupported scheme `file`"));
}

#[tokio::test]
async fn test_body_over_limit() {
    let mut config = AppConfig::default();
    config.limits.max_body_size = 64;
    let app = test_server(config).router();

    let words = vec!["tac"; 100].join(",");
    let body = format!(r#"{{"inputType": "inline_text", "inputData": "{}"}}"#, words);

    let (status, body) = read_response(app.oneshot(json_request(&body)).await.unwrap()).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body.anagram_groups, None);
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let response = app()
        .oneshot(json_request(r#"{"inputType": "inline_text", "inputData": "cat,tac"}"#))
        .await
        .unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header")
        .to_str()
        .unwrap();
    let request_id = uuid::Uuid::parse_str(request_id).unwrap();
    assert_eq!(request_id.get_version_num(), 4);
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
}
