use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::ACCEPT;
use url::Url;

use crate::application::ports::{AttachmentFetcher, TokenProvider, TransferError};
use crate::domain::AttachmentDescriptor;

pub struct HttpAttachmentFetcher {
    client: reqwest::Client,
    token_provider: Arc<dyn TokenProvider>,
}

impl HttpAttachmentFetcher {
    pub fn new(client: reqwest::Client, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            client,
            token_provider,
        }
    }
}

#[async_trait]
impl AttachmentFetcher for HttpAttachmentFetcher {
    async fn fetch(&self, descriptor: &AttachmentDescriptor) -> Result<Bytes, TransferError> {
        let url = Url::parse(&descriptor.content_url)
            .map_err(|e| TransferError::InvalidUrl(format!("{}: {}", descriptor.content_url, e)))?;

        let mut request = self.client.get(url.clone());

        // Some channels only serve uploads to callers holding the bot's token.
        if descriptor.requires_bearer_auth {
            let token = self.token_provider.token().await?;
            if !token.is_empty() {
                request = request.bearer_auth(token);
            }
            request = request.header(ACCEPT, "application/octet-stream");
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransferError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TransferError::UnexpectedStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TransferError::RequestFailed(format!("body: {}", e)))?;

        tracing::debug!(
            bytes = body.len(),
            host = url.host_str().unwrap_or_default(),
            "Attachment downloaded"
        );

        Ok(body)
    }
}
