use std::sync::Arc;

use crate::application::services::BotService;

#[derive(Clone)]
pub struct AppState {
    pub bot_service: Arc<BotService>,
}

impl AppState {
    pub fn new(bot_service: Arc<BotService>) -> Self {
        Self { bot_service }
    }
}
