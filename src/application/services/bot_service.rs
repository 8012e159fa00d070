use std::sync::Arc;

use crate::application::ports::{ConversationClient, ReplyError};
use crate::domain::{Activity, ActivityKind, ReplyMessage};

use super::{MessageRouter, SystemEventHandler};

pub struct BotService {
    message_router: MessageRouter,
    system_event_handler: SystemEventHandler,
    conversation_client: Arc<dyn ConversationClient>,
}

impl BotService {
    pub fn new(
        message_router: MessageRouter,
        system_event_handler: SystemEventHandler,
        conversation_client: Arc<dyn ConversationClient>,
    ) -> Self {
        Self {
            message_router,
            system_event_handler,
            conversation_client,
        }
    }

    /// Handles one inbound activity and returns the reply that was produced.
    ///
    /// Delivery failures on the message path are logged and swallowed; on the
    /// system path they propagate.
    #[tracing::instrument(
        skip(self, activity),
        fields(kind = activity.kind.as_str(), conversation_id = %activity.conversation.id)
    )]
    pub async fn handle_activity(
        &self,
        activity: &Activity,
    ) -> Result<Option<ReplyMessage>, BotError> {
        if activity.kind == ActivityKind::Message {
            let reply = self.message_router.route(activity).await;

            if let Err(e) = self.conversation_client.reply_to(activity, &reply).await {
                tracing::error!(error = %e, "Failed to deliver reply");
            }

            return Ok(Some(reply));
        }

        let Some(reply) = self.system_event_handler.handle(activity) else {
            return Ok(None);
        };

        self.conversation_client.reply_to(activity, &reply).await?;

        Ok(Some(reply))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("reply: {0}")]
    Reply(#[from] ReplyError),
}
