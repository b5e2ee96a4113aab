use std::sync::Arc;

use menubot_core::application::MenuBotService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<MenuBotService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MenuBotService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
