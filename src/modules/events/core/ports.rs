// Ports define what the events core needs from storage, without implementing it.
//
// Purpose
// - Describe the event store as an async trait so handlers never depend on a backend.
//
// Boundaries
// - No concrete input or output here. Adapters implement EventStore in adapters::outbound.
//
// Testing guidance
// - Use the in memory adapter for handler tests. Its offline toggle simulates backend failures.

use crate::modules::events::core::event::{Event, EventDetails};
use crate::modules::events::core::query::EventQuery;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("event {0} does not exist")]
    NotFound(String),

    #[error("backend error: {0}")]
    Access(String),
}

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Event>, StoreError>;

    async fn get_by_filter(&self, query: &EventQuery) -> Result<Vec<Event>, StoreError>;

    /// Persist a new event and return the uuid assigned to it.
    async fn create(&self, details: EventDetails) -> Result<String, StoreError>;

    async fn get_by_uuid(&self, uuid: &str) -> Result<Event, StoreError>;

    /// Overwrite title, description and interval of an existing event.
    async fn update(&self, uuid: &str, details: EventDetails) -> Result<(), StoreError>;

    async fn delete(&self, uuid: &str) -> Result<(), StoreError>;
}
