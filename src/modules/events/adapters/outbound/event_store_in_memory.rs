// In memory implementation of the EventStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep events in insertion order and assign sequential ids.
// - Apply the same window, ordering and limit rules as the SQL adapter.

use crate::modules::events::core::event::{Event, EventDetails};
use crate::modules::events::core::ports::{EventStore, StoreError};
use crate::modules::events::core::query::EventQuery;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Rows {
    last_id: i64,
    events: Vec<Event>,
}

#[derive(Default)]
pub struct InMemoryEventStore {
    rows: RwLock<Rows>,
    is_offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Access("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn get_all(&self) -> Result<Vec<Event>, StoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.events.clone())
    }

    async fn get_by_filter(&self, query: &EventQuery) -> Result<Vec<Event>, StoreError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;

        let mut items: Vec<Event> = guard
            .events
            .iter()
            .filter(|event| query.window.matches(event))
            .cloned()
            .collect();

        items.sort_by(|a, b| query.compare(a, b));
        if query.limit > 0 {
            items.truncate(query.limit as usize);
        }
        Ok(items)
    }

    async fn create(&self, details: EventDetails) -> Result<String, StoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        guard.last_id += 1;
        let uuid = Uuid::new_v4().to_string();
        let event = Event {
            id: guard.last_id,
            uuid: uuid.clone(),
            title: details.title,
            description: details.description,
            date_from: details.date_from,
            date_to: details.date_to,
            created_at: Utc::now(),
        };
        guard.events.push(event);
        Ok(uuid)
    }

    async fn get_by_uuid(&self, uuid: &str) -> Result<Event, StoreError> {
        self.ensure_online()?;
        self.rows
            .read()
            .await
            .events
            .iter()
            .find(|event| event.uuid == uuid)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(uuid.to_string()))
    }

    async fn update(&self, uuid: &str, details: EventDetails) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let event = guard
            .events
            .iter_mut()
            .find(|event| event.uuid == uuid)
            .ok_or_else(|| StoreError::NotFound(uuid.to_string()))?;
        event.title = details.title;
        event.description = details.description;
        event.date_from = details.date_from;
        event.date_to = details.date_to;
        Ok(())
    }

    async fn delete(&self, uuid: &str) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let before = guard.events.len();
        guard.events.retain(|event| event.uuid != uuid);
        if guard.events.len() == before {
            return Err(StoreError::NotFound(uuid.to_string()));
        }
        Ok(())
    }
}
