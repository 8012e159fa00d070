use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use crate::infrastructure::audio::TranscriptionProvider;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub bot: BotSettings,
    pub speech: SpeechSettings,
    pub knowledge_base: KnowledgeBaseSettings,
    pub attachments: AttachmentSettings,
    pub http: HttpSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.{environment}` (optional) under `APP_`-prefixed
    /// environment variables, e.g. `APP_KNOWLEDGE_BASE__SUBSCRIPTION_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3978)?
            .set_default("bot.app_id", "")?
            .set_default("bot.app_password", "")?
            .set_default(
                "bot.token_endpoint",
                "https://login.microsoftonline.com/botframework.com/oauth2/v2.0/token",
            )?
            .set_default("bot.oauth_scope", "https://api.botframework.com/.default")?
            .set_default("speech.provider", "azure")?
            .set_default("speech.endpoint", "")?
            .set_default("speech.subscription_key", "")?
            .set_default("speech.language", "en-US")?
            .set_default("speech.model", "whisper-1")?
            .set_default("knowledge_base.endpoint", "")?
            .set_default("knowledge_base.knowledgebase_id", "")?
            .set_default("knowledge_base.subscription_key", "")?
            .set_default("knowledge_base.top", 1)?
            .set_default("attachments.trusted_domains", vec!["skype.com"])?
            .set_default("attachments.trusted_schemes", vec!["https"])?
            .set_default("http.request_timeout_secs", 30)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str().to_lowercase()))
                    .required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("attachments.trusted_domains")
                    .with_list_parse_key("attachments.trusted_schemes")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Bot identity used for outbound connector calls. An empty `app_id` runs
/// the bot without credentials, as the local emulator expects.
#[derive(Debug, Clone, Deserialize)]
pub struct BotSettings {
    pub app_id: String,
    pub app_password: String,
    pub token_endpoint: String,
    pub oauth_scope: String,
}

impl BotSettings {
    pub fn has_credentials(&self) -> bool {
        !self.app_id.trim().is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    pub provider: TranscriptionProvider,
    pub endpoint: String,
    pub subscription_key: String,
    pub language: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeBaseSettings {
    pub endpoint: String,
    pub knowledgebase_id: String,
    pub subscription_key: String,
    pub top: u32,
    #[serde(default)]
    pub min_score: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentSettings {
    pub trusted_domains: Vec<String>,
    pub trusted_schemes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}
