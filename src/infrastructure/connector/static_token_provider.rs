use async_trait::async_trait;

use crate::application::ports::{TokenError, TokenProvider};

/// Fixed token; an empty one means the channel runs without bot credentials
/// (local emulator).
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn anonymous() -> Self {
        Self::new(String::new())
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Result<String, TokenError> {
        Ok(self.token.clone())
    }
}
