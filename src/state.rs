use crate::interaction::Interaction;
use crate::storage::LogStore;

#[derive(Clone)]
pub struct AppState {
    pub store: LogStore,
    pub interaction: Interaction,
    pub page_endpoint: String,
}

impl AppState {
    pub fn new(store: LogStore, interaction: Interaction, page_endpoint: impl Into<String>) -> Self {
        Self {
            store,
            interaction,
            page_endpoint: page_endpoint.into(),
        }
    }
}
