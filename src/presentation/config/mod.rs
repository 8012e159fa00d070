mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AttachmentSettings, BotSettings, HttpSettings, KnowledgeBaseSettings, LoggingSettings,
    ServerSettings, Settings, SpeechSettings,
};
