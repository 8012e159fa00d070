mod activity;
mod answer;
mod attachment;
mod reply;
mod text_stats;

pub use activity::{Activity, ActivityKind, Attachment, ChannelAccount, ConversationAccount};
pub use answer::{AnswerPolicy, AnswerResult};
pub use attachment::{AttachmentDescriptor, TrustedHostPolicy, is_audio_content_type};
pub use reply::{APOLOGY_TEXT, GREETING_TEXT, NO_AUDIO_TEXT, ReplyMessage};
pub use text_stats::TextStats;
