use async_trait::async_trait;

use crate::domain::AnswerResult;

#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Best answer for `question`, or `None` when the service found nothing.
    async fn query(&self, question: &str) -> Result<Option<AnswerResult>, QueryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
