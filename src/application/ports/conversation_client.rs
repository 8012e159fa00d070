use async_trait::async_trait;

use crate::domain::{Activity, ReplyMessage};

use super::TokenError;

/// Outbound half of the connector: posts replies into a conversation.
#[async_trait]
pub trait ConversationClient: Send + Sync {
    async fn reply_to(&self, activity: &Activity, reply: &ReplyMessage) -> Result<(), ReplyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    #[error("activity has no reply address: {0}")]
    MissingAddress(&'static str),
    #[error("bearer token unavailable: {0}")]
    Token(#[from] TokenError),
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("connector returned status {0}")]
    UnexpectedStatus(u16),
}
