mod bot_service;
mod message_router;
mod system_event_handler;

pub use bot_service::{BotError, BotService};
pub use message_router::{MessageRouter, RouteError};
pub use system_event_handler::SystemEventHandler;
