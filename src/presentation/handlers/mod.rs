mod health;
mod messages;

pub use health::health_handler;
pub use messages::messages_handler;
