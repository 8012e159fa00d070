use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::AttachmentDescriptor;

use super::TokenError;

#[async_trait]
pub trait AttachmentFetcher: Send + Sync {
    async fn fetch(&self, descriptor: &AttachmentDescriptor) -> Result<Bytes, TransferError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("invalid attachment url: {0}")]
    InvalidUrl(String),
    #[error("bearer token unavailable: {0}")]
    Token(#[from] TokenError),
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}
