use async_trait::async_trait;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("recognition failed with status {0}")]
    RecognitionFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("engine misconfigured: {0}")]
    Misconfigured(String),
}
