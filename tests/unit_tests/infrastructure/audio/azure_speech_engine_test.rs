use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use bytes::Bytes;

use speech_bot::application::ports::{TranscriptionEngine, TranscriptionError};
use speech_bot::infrastructure::audio::AzureSpeechEngine;

use crate::helpers::start_mock_server;

const RECOGNITION_PATH: &str = "/speech/recognition/conversation/cognitiveservices/v1";

#[derive(Clone, Default)]
struct Captured {
    requests: Arc<Mutex<Vec<(HeaderMap, Option<String>, Bytes)>>>,
}

fn mock_speech_app(status: u16, body: &'static str, captured: Captured) -> Router {
    Router::new()
        .route(
            RECOGNITION_PATH,
            post(
                move |State(captured): State<Captured>,
                      RawQuery(query): RawQuery,
                      headers: HeaderMap,
                      audio: Bytes| async move {
                    captured.requests.lock().unwrap().push((headers, query, audio));
                    (StatusCode::from_u16(status).unwrap(), body).into_response()
                },
            ),
        )
        .with_state(captured)
}

#[tokio::test]
async fn given_successful_recognition_when_transcribing_then_returns_display_text() {
    let captured = Captured::default();
    let body = r#"{"RecognitionStatus":"Success","DisplayText":"Hello world.","Offset":0,"Duration":1}"#;
    let (base_url, shutdown_tx) = start_mock_server(mock_speech_app(200, body, captured.clone())).await;

    let engine = AzureSpeechEngine::new(reqwest::Client::new(), &base_url, "speech-key", "en-US");
    let result = engine.transcribe(b"RIFF fake wav").await;

    assert_eq!(result.unwrap(), "Hello world.");

    let requests = captured.requests.lock().unwrap();
    let (headers, query, audio) = &requests[0];
    assert_eq!(headers["ocp-apim-subscription-key"], "speech-key");
    assert!(
        headers["content-type"]
            .to_str()
            .unwrap()
            .starts_with("audio/wav")
    );
    assert!(query.as_deref().unwrap().contains("language=en-US"));
    assert_eq!(audio.as_ref(), b"RIFF fake wav");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_no_match_when_transcribing_then_returns_empty_string() {
    let body = r#"{"RecognitionStatus":"NoMatch"}"#;
    let (base_url, shutdown_tx) =
        start_mock_server(mock_speech_app(200, body, Captured::default())).await;

    let engine = AzureSpeechEngine::new(reqwest::Client::new(), &base_url, "speech-key", "en-US");
    let result = engine.transcribe(b"silence").await;

    assert_eq!(result.unwrap(), "");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_recognition_error_status_when_transcribing_then_returns_recognition_failed() {
    let body = r#"{"RecognitionStatus":"Error"}"#;
    let (base_url, shutdown_tx) =
        start_mock_server(mock_speech_app(200, body, Captured::default())).await;

    let engine = AzureSpeechEngine::new(reqwest::Client::new(), &base_url, "speech-key", "en-US");
    let result = engine.transcribe(b"noise").await;

    assert!(matches!(result, Err(TranscriptionError::RecognitionFailed(status)) if status == "Error"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unauthorized_response_when_transcribing_then_returns_api_error() {
    let (base_url, shutdown_tx) =
        start_mock_server(mock_speech_app(401, "denied", Captured::default())).await;

    let engine = AzureSpeechEngine::new(reqwest::Client::new(), &base_url, "wrong-key", "en-US");
    let result = engine.transcribe(b"audio").await;

    assert!(matches!(result, Err(TranscriptionError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_malformed_body_when_transcribing_then_returns_invalid_response() {
    let (base_url, shutdown_tx) =
        start_mock_server(mock_speech_app(200, "not json", Captured::default())).await;

    let engine = AzureSpeechEngine::new(reqwest::Client::new(), &base_url, "speech-key", "en-US");
    let result = engine.transcribe(b"audio").await;

    assert!(matches!(result, Err(TranscriptionError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}
