use async_trait::async_trait;

/// Source of the bot's own bearer token.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Result<String, TokenError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token request failed: {0}")]
    RequestFailed(String),
    #[error("token endpoint rejected credentials: status {0}")]
    Rejected(u16),
    #[error("invalid token response: {0}")]
    InvalidResponse(String),
}
