use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

use super::azure_speech_engine::AzureSpeechEngine;
use super::whisper_api_engine::WhisperApiEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProvider {
    Azure,
    Whisper,
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        provider: TranscriptionProvider,
        client: reqwest::Client,
        endpoint: &str,
        subscription_key: &str,
        language: &str,
        model: &str,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        if endpoint.trim().is_empty() {
            return Err(TranscriptionError::Misconfigured(
                "speech endpoint is required".to_string(),
            ));
        }
        if subscription_key.trim().is_empty() {
            return Err(TranscriptionError::Misconfigured(
                "speech subscription key is required".to_string(),
            ));
        }

        match provider {
            TranscriptionProvider::Azure => Ok(Arc::new(AzureSpeechEngine::new(
                client,
                endpoint,
                subscription_key,
                language,
            ))),
            TranscriptionProvider::Whisper => Ok(Arc::new(WhisperApiEngine::new(
                client,
                endpoint,
                subscription_key,
                model,
            ))),
        }
    }
}
