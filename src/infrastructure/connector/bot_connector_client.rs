use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::application::ports::{ConversationClient, ReplyError, TokenProvider};
use crate::domain::{Activity, ChannelAccount, ConversationAccount, ReplyMessage};

/// Posts reply activities to the connector REST API at the activity's `serviceUrl`.
pub struct BotConnectorClient {
    client: reqwest::Client,
    token_provider: Arc<dyn TokenProvider>,
}

impl BotConnectorClient {
    pub fn new(client: reqwest::Client, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            client,
            token_provider,
        }
    }

    fn reply_url(activity: &Activity) -> Result<Url, ReplyError> {
        if activity.conversation.id.is_empty() {
            return Err(ReplyError::MissingAddress("conversation.id"));
        }

        let base = activity.service_url.trim_end_matches('/');
        let mut url = Url::parse(base).map_err(|_| ReplyError::MissingAddress("serviceUrl"))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ReplyError::MissingAddress("serviceUrl"))?;
            segments
                .pop_if_empty()
                .extend(["v3", "conversations", activity.conversation.id.as_str(), "activities"]);
            if let Some(id) = activity.id.as_deref().filter(|id| !id.is_empty()) {
                segments.push(id);
            }
        }

        Ok(url)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyActivity<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    from: &'a ChannelAccount,
    recipient: &'a ChannelAccount,
    conversation: &'a ConversationAccount,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to_id: Option<&'a str>,
    text: &'a str,
}

#[async_trait]
impl ConversationClient for BotConnectorClient {
    async fn reply_to(&self, activity: &Activity, reply: &ReplyMessage) -> Result<(), ReplyError> {
        let url = Self::reply_url(activity)?;

        let body = ReplyActivity {
            kind: "message",
            from: &activity.recipient,
            recipient: &activity.from,
            conversation: &activity.conversation,
            reply_to_id: activity.id.as_deref(),
            text: reply.as_str(),
        };

        let mut request = self.client.post(url).json(&body);

        let token = self.token_provider.token().await?;
        if !token.is_empty() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ReplyError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ReplyError::UnexpectedStatus(response.status().as_u16()));
        }

        tracing::debug!(conversation_id = %activity.conversation.id, "Reply delivered");

        Ok(())
    }
}
