//! Application state shared across handlers

use std::sync::Arc;

use fleet_common::{AppConfig, RecordStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: RecordStore, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
