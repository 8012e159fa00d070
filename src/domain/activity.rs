use serde::{Deserialize, Deserializer, Serialize};

/// Inbound connector activity, deserialized from the webhook body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub from: ChannelAccount,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipient: ChannelAccount,
    #[serde(default, deserialize_with = "null_as_default")]
    pub conversation: ConversationAccount,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<Attachment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub members_added: Vec<ChannelAccount>,
}

impl Activity {
    /// Free text of the activity, as sent, when it carries anything besides
    /// whitespace.
    pub fn question_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    /// True when the bot itself is among the members added to the conversation.
    pub fn adds_recipient(&self) -> bool {
        self.members_added
            .iter()
            .any(|member| member.id == self.recipient.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityKind {
    Message,
    ConversationUpdate,
    DeleteUserData,
    ContactRelationUpdate,
    Typing,
    Ping,
    Other(String),
}

impl ActivityKind {
    pub fn as_str(&self) -> &str {
        match self {
            ActivityKind::Message => "message",
            ActivityKind::ConversationUpdate => "conversationUpdate",
            ActivityKind::DeleteUserData => "deleteUserData",
            ActivityKind::ContactRelationUpdate => "contactRelationUpdate",
            ActivityKind::Typing => "typing",
            ActivityKind::Ping => "ping",
            ActivityKind::Other(kind) => kind,
        }
    }
}

impl From<String> for ActivityKind {
    fn from(kind: String) -> Self {
        match kind.to_lowercase().as_str() {
            "message" => Self::Message,
            "conversationupdate" => Self::ConversationUpdate,
            "deleteuserdata" => Self::DeleteUserData,
            "contactrelationupdate" => Self::ContactRelationUpdate,
            "typing" => Self::Typing,
            "ping" => Self::Ping,
            _ => Self::Other(kind),
        }
    }
}

impl<'de> Deserialize<'de> for ActivityKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::from)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelAccount {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationAccount {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_type: String,
    #[serde(default)]
    pub content_url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Connector payloads send `null` for absent lists and accounts.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
