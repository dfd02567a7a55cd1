use chrono::{DateTime, SecondsFormat, Utc};

use crate::modules::events::application::query_translator::{ValidationError, parse_datetime};
use crate::modules::events::core::event::{Event, EventDetails};

fn rfc3339(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "Event")]
pub struct GqlEvent {
    pub id: i64,
    pub uuid: String,
    pub title: String,
    pub description: String,
    pub date_from: String,
    pub date_to: String,
    pub created_at: String,
}

impl From<Event> for GqlEvent {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            uuid: event.uuid,
            title: event.title,
            description: event.description,
            date_from: rfc3339(event.date_from),
            date_to: rfc3339(event.date_to),
            created_at: rfc3339(event.created_at),
        }
    }
}

/// Details from mutation arguments. Instants are RFC 3339 strings with any offset.
pub fn event_details(
    title: String,
    description: Option<String>,
    date_from: &str,
    date_to: &str,
) -> Result<EventDetails, ValidationError> {
    Ok(EventDetails {
        title,
        description: description.unwrap_or_default(),
        date_from: parse_datetime("date_from", date_from)?,
        date_to: parse_datetime("date_to", date_to)?,
    })
}
