mod attachment_fetcher;
mod conversation_client;
mod knowledge_base;
mod token_provider;
mod transcription_engine;

pub use attachment_fetcher::{AttachmentFetcher, TransferError};
pub use conversation_client::{ConversationClient, ReplyError};
pub use knowledge_base::{KnowledgeBase, QueryError};
pub use token_provider::{TokenError, TokenProvider};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
