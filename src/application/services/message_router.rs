use std::sync::Arc;

use crate::application::ports::{
    AttachmentFetcher, KnowledgeBase, QueryError, TranscriptionEngine, TranscriptionError,
    TransferError,
};
use crate::domain::{
    Activity, AnswerPolicy, Attachment, AttachmentDescriptor, ReplyMessage, TrustedHostPolicy,
    is_audio_content_type,
};

/// Decides how a message activity is answered and produces the reply text.
pub struct MessageRouter {
    attachment_fetcher: Arc<dyn AttachmentFetcher>,
    transcription_engine: Arc<dyn TranscriptionEngine>,
    knowledge_base: Arc<dyn KnowledgeBase>,
    host_policy: TrustedHostPolicy,
    answer_policy: AnswerPolicy,
}

impl MessageRouter {
    pub fn new(
        attachment_fetcher: Arc<dyn AttachmentFetcher>,
        transcription_engine: Arc<dyn TranscriptionEngine>,
        knowledge_base: Arc<dyn KnowledgeBase>,
        host_policy: TrustedHostPolicy,
        answer_policy: AnswerPolicy,
    ) -> Self {
        Self {
            attachment_fetcher,
            transcription_engine,
            knowledge_base,
            host_policy,
            answer_policy,
        }
    }

    /// Always yields a reply; failures collapse into the apology text.
    pub async fn route(&self, activity: &Activity) -> ReplyMessage {
        match self.try_route(activity).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, stage = e.stage(), "Message handling failed");
                ReplyMessage::apology()
            }
        }
    }

    async fn try_route(&self, activity: &Activity) -> Result<ReplyMessage, RouteError> {
        let audio = activity
            .attachments
            .iter()
            .find(|attachment| is_audio_content_type(&attachment.content_type));

        if let Some(attachment) = audio {
            return self.transcribe_attachment(attachment).await;
        }

        if let Some(question) = activity.question_text() {
            return self.answer_question(question).await;
        }

        Ok(ReplyMessage::no_audio())
    }

    async fn transcribe_attachment(
        &self,
        attachment: &Attachment,
    ) -> Result<ReplyMessage, RouteError> {
        let descriptor = AttachmentDescriptor::from_attachment(attachment, &self.host_policy)
            .ok_or_else(|| TransferError::InvalidUrl("attachment has no content url".into()))?;

        tracing::debug!(
            content_type = %descriptor.declared_content_type,
            authenticated = descriptor.requires_bearer_auth,
            "Fetching audio attachment"
        );

        let audio = self.attachment_fetcher.fetch(&descriptor).await?;
        let text = self.transcription_engine.transcribe(&audio).await?;

        tracing::info!(
            audio_bytes = audio.len(),
            chars = text.chars().count(),
            "Audio attachment transcribed"
        );

        Ok(ReplyMessage::transcription(&text))
    }

    async fn answer_question(&self, question: &str) -> Result<ReplyMessage, RouteError> {
        tracing::debug!(chars = question.chars().count(), "Querying knowledge base");

        let answer = self.knowledge_base.query(question).await?;

        match answer {
            Some(answer) if self.answer_policy.accepts(&answer) => {
                tracing::info!(score = answer.score, "Knowledge base answered");
                Ok(ReplyMessage::new(answer.answer_text))
            }
            Some(answer) => {
                tracing::info!(score = answer.score, "Knowledge base answer rejected");
                Ok(ReplyMessage::no_audio())
            }
            None => {
                tracing::info!("Knowledge base returned no answers");
                Ok(ReplyMessage::no_audio())
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("transfer: {0}")]
    Transfer(#[from] TransferError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("query: {0}")]
    Query(#[from] QueryError),
}

impl RouteError {
    pub fn stage(&self) -> &'static str {
        match self {
            RouteError::Transfer(_) => "attachment_fetch",
            RouteError::Transcription(_) => "transcription",
            RouteError::Query(_) => "knowledge_base",
        }
    }
}
