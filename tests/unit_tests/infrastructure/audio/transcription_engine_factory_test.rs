use speech_bot::application::ports::TranscriptionError;
use speech_bot::infrastructure::audio::{TranscriptionEngineFactory, TranscriptionProvider};

#[test]
fn given_complete_azure_settings_when_creating_engine_then_succeeds() {
    let result = TranscriptionEngineFactory::create(
        TranscriptionProvider::Azure,
        reqwest::Client::new(),
        "https://westus.stt.speech.microsoft.com",
        "key",
        "en-US",
        "unused",
    );

    assert!(result.is_ok());
}

#[test]
fn given_missing_subscription_key_when_creating_engine_then_reports_misconfiguration() {
    let result = TranscriptionEngineFactory::create(
        TranscriptionProvider::Whisper,
        reqwest::Client::new(),
        "https://api.openai.com/v1",
        "  ",
        "en-US",
        "whisper-1",
    );

    assert!(matches!(result, Err(TranscriptionError::Misconfigured(_))));
}

#[test]
fn given_missing_endpoint_when_creating_engine_then_reports_misconfiguration() {
    let result = TranscriptionEngineFactory::create(
        TranscriptionProvider::Azure,
        reqwest::Client::new(),
        "",
        "key",
        "en-US",
        "unused",
    );

    assert!(matches!(result, Err(TranscriptionError::Misconfigured(_))));
}

#[test]
fn given_provider_names_when_deserialized_then_map_to_variants() {
    let azure: TranscriptionProvider = serde_json::from_str(r#""azure""#).unwrap();
    let whisper: TranscriptionProvider = serde_json::from_str(r#""whisper""#).unwrap();

    assert_eq!(azure, TranscriptionProvider::Azure);
    assert_eq!(whisper, TranscriptionProvider::Whisper);
}
