mod azure_speech_engine;
mod transcription_engine_factory;
mod whisper_api_engine;

pub use azure_speech_engine::AzureSpeechEngine;
pub use transcription_engine_factory::{TranscriptionEngineFactory, TranscriptionProvider};
pub use whisper_api_engine::WhisperApiEngine;
