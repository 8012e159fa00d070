use std::fmt;

use super::text_stats::TextStats;

pub const GREETING_TEXT: &str = "Hi! I am SpeechToText Bot. I can understand the content of any audio and convert it to text. Try sending me a wav file.";
pub const NO_AUDIO_TEXT: &str =
    "Did you upload an audio file? I'm more of an audible person. Try sending me a wav file";
pub const APOLOGY_TEXT: &str = "Oops! Something went wrong. Try again later.";

/// Text sent back to the conversation an activity came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyMessage(String);

impl ReplyMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn greeting() -> Self {
        Self::new(GREETING_TEXT)
    }

    pub fn no_audio() -> Self {
        Self::new(NO_AUDIO_TEXT)
    }

    pub fn apology() -> Self {
        Self::new(APOLOGY_TEXT)
    }

    /// Echoes a transcription, followed by its statistics unless it is empty.
    pub fn transcription(text: &str) -> Self {
        if text.is_empty() {
            return Self::new("You said : .");
        }

        Self(format!(
            "You said : {}.\n\n{}",
            text,
            TextStats::analyze(text)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ReplyMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
