use crate::domain::{Activity, ActivityKind, ReplyMessage};

/// Handles lifecycle activities; only a bot join produces a reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEventHandler;

impl SystemEventHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, activity: &Activity) -> Option<ReplyMessage> {
        match &activity.kind {
            ActivityKind::ConversationUpdate if activity.adds_recipient() => {
                tracing::info!(
                    conversation_id = %activity.conversation.id,
                    "Bot added to conversation"
                );
                Some(ReplyMessage::greeting())
            }
            ActivityKind::ConversationUpdate => None,
            // User data is never stored, so there is nothing to delete.
            ActivityKind::DeleteUserData
            | ActivityKind::ContactRelationUpdate
            | ActivityKind::Typing
            | ActivityKind::Ping => {
                tracing::debug!(kind = activity.kind.as_str(), "System activity acknowledged");
                None
            }
            ActivityKind::Message => None,
            ActivityKind::Other(kind) => {
                tracing::debug!(kind = %kind, "Ignoring unknown activity");
                None
            }
        }
    }
}
