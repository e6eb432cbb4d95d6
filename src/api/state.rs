use std::sync::Arc;

use crate::{config::Settings, integrations::ChatService, store::StoreContext};

#[derive(Clone)]
pub struct AppState {
    pub stores: Arc<StoreContext>,
    pub chat: Arc<ChatService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(stores: Arc<StoreContext>, chat: Arc<ChatService>, settings: Arc<Settings>) -> Self {
        Self {
            stores,
            chat,
            settings,
        }
    }
}
