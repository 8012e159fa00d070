use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{TokenError, TokenProvider};

/// Requests the bot's access token with an OAuth2 client-credentials grant.
///
/// Tokens are not cached; every call performs a fresh grant.
pub struct ClientCredentialsTokenProvider {
    client: reqwest::Client,
    token_endpoint: String,
    app_id: String,
    app_password: String,
    scope: String,
}

impl ClientCredentialsTokenProvider {
    pub fn new(
        client: reqwest::Client,
        token_endpoint: &str,
        app_id: &str,
        app_password: &str,
        scope: &str,
    ) -> Self {
        Self {
            client,
            token_endpoint: token_endpoint.to_string(),
            app_id: app_id.to_string(),
            app_password: app_password.to_string(),
            scope: scope.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[async_trait]
impl TokenProvider for ClientCredentialsTokenProvider {
    async fn token(&self) -> Result<String, TokenError> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.app_id.as_str()),
            ("client_secret", self.app_password.as_str()),
            ("scope", self.scope.as_str()),
        ];

        let response = self
            .client
            .post(&self.token_endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| TokenError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TokenError::Rejected(response.status().as_u16()));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| TokenError::InvalidResponse(e.to_string()))?;

        Ok(token.access_token)
    }
}
