use anyhow::Context;
use std::sync::Arc;
use tracing::info;

use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::events::adapters::outbound::event_store_sqlite::SqliteEventStore;
use crate::modules::events::core::ports::EventStore;
use crate::shared::infrastructure::sqlite::connection::{ConnectionConfig, new_file};
use crate::shell::config::{StorageBackend, StorageSettings};

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new(events: Arc<dyn EventStore>) -> Self {
        Self { events }
    }
}

/// Build the configured event store. Called once at startup.
pub fn open_event_store(storage: &StorageSettings) -> anyhow::Result<Arc<dyn EventStore>> {
    match storage.backend {
        StorageBackend::Memory => {
            info!("using in-memory event store");
            Ok(Arc::new(InMemoryEventStore::new()))
        }
        StorageBackend::Sqlite => {
            let config = ConnectionConfig {
                pool_size: storage.pool_size,
                ..ConnectionConfig::default()
            };
            let pool = new_file(&storage.path, &config)
                .with_context(|| format!("opening sqlite database at {}", storage.path))?;
            let store = SqliteEventStore::new(pool).context("preparing event store schema")?;
            info!(path = %storage.path, pool_size = storage.pool_size, "using sqlite event store");
            Ok(Arc::new(store))
        }
    }
}
