// SQLite implementation of the EventStore port.
//
// Purpose
// - Durable event storage behind a pooled connection.
//
// Responsibilities
// - Bind every filter bound and the limit as statement parameters.
// - Take sort column and keyword only from SortField::column and SortOrder::keyword.
// - Report zero affected rows on update or delete as NotFound.
//
// Storage
// - Instants are stored as epoch microseconds, sub-microsecond precision is dropped.
// - Statements run on the blocking pool, one statement per operation.

use crate::modules::events::core::event::{Event, EventDetails};
use crate::modules::events::core::ports::{EventStore, StoreError};
use crate::modules::events::core::query::{EventQuery, SortField, TimeWindow};
use crate::shared::infrastructure::sqlite::connection::ConnectionPool;
use crate::shared::infrastructure::sqlite::migrations::run_migrations;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};
use tracing::debug;
use uuid::Uuid;

const SELECT_EVENTS: &str =
    "SELECT id, uuid, title, description, date_from, date_to, created_at FROM events";

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Access(err.to_string())
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(err: r2d2::Error) -> Self {
        StoreError::Access(err.to_string())
    }
}

pub struct SqliteEventStore {
    pool: ConnectionPool,
}

impl SqliteEventStore {
    /// Wrap a pool, applying pending schema migrations first.
    pub fn new(pool: ConnectionPool) -> Result<Self, StoreError> {
        let conn = pool.get()?;
        let applied = run_migrations(&conn)?;
        debug!(applied, "event store schema ready");
        drop(conn);
        Ok(Self { pool })
    }

    async fn with_connection<T, F>(&self, operation: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            operation(&conn)
        })
        .await
        .map_err(|err| StoreError::Access(err.to_string()))?
    }
}

fn instant(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let micros: i64 = row.get(idx)?;
    DateTime::from_timestamp_micros(micros)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, micros))
}

fn event_from_row(row: &Row<'_>) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get(0)?,
        uuid: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        date_from: instant(row, 4)?,
        date_to: instant(row, 5)?,
        created_at: instant(row, 6)?,
    })
}

/// Statement text and positional parameters for a filtered listing.
///
/// One fixed WHERE shape per window case. The limit is always bound, with -1
/// standing for "no limit".
fn filter_statement(query: &EventQuery) -> (String, Vec<i64>) {
    let (condition, mut values) = match query.window {
        TimeWindow::Between { start, end } => (
            " WHERE date_from < ?1 AND date_to > ?2",
            vec![end.timestamp_micros(), start.timestamp_micros()],
        ),
        TimeWindow::After { start } => (" WHERE date_to > ?1", vec![start.timestamp_micros()]),
        TimeWindow::Before { end } => (" WHERE date_from < ?1", vec![end.timestamp_micros()]),
        TimeWindow::Unbounded => ("", Vec::new()),
    };

    let mut ordering = format!(
        "{} {}",
        query.sort_field.column(),
        query.sort_order.keyword()
    );
    if query.sort_field != SortField::Id {
        ordering.push_str(", id ASC");
    }

    values.push(if query.limit == 0 {
        -1
    } else {
        i64::from(query.limit)
    });
    let sql = format!(
        "{SELECT_EVENTS}{condition} ORDER BY {ordering} LIMIT ?{}",
        values.len()
    );
    (sql, values)
}

#[async_trait::async_trait]
impl EventStore for SqliteEventStore {
    async fn get_all(&self) -> Result<Vec<Event>, StoreError> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_EVENTS} ORDER BY id ASC"))?;
            let events = stmt
                .query_map([], event_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(events)
        })
        .await
    }

    async fn get_by_filter(&self, query: &EventQuery) -> Result<Vec<Event>, StoreError> {
        let (sql, values) = filter_statement(query);
        self.with_connection(move |conn| {
            let mut stmt = conn.prepare(&sql)?;
            let events = stmt
                .query_map(params_from_iter(values.iter()), event_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(events)
        })
        .await
    }

    async fn create(&self, details: EventDetails) -> Result<String, StoreError> {
        self.with_connection(move |conn| {
            let uuid = Uuid::new_v4().to_string();
            conn.execute(
                "INSERT INTO events (uuid, title, description, date_from, date_to, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    uuid,
                    details.title,
                    details.description,
                    details.date_from.timestamp_micros(),
                    details.date_to.timestamp_micros(),
                    Utc::now().timestamp_micros(),
                ],
            )?;
            Ok(uuid)
        })
        .await
    }

    async fn get_by_uuid(&self, uuid: &str) -> Result<Event, StoreError> {
        let uuid = uuid.to_string();
        self.with_connection(move |conn| {
            let event = conn
                .query_row(
                    &format!("{SELECT_EVENTS} WHERE uuid = ?1"),
                    params![uuid],
                    event_from_row,
                )
                .optional()?;
            event.ok_or(StoreError::NotFound(uuid))
        })
        .await
    }

    async fn update(&self, uuid: &str, details: EventDetails) -> Result<(), StoreError> {
        let uuid = uuid.to_string();
        self.with_connection(move |conn| {
            let changed = conn.execute(
                "UPDATE events
                 SET title = ?1, description = ?2, date_from = ?3, date_to = ?4
                 WHERE uuid = ?5",
                params![
                    details.title,
                    details.description,
                    details.date_from.timestamp_micros(),
                    details.date_to.timestamp_micros(),
                    uuid,
                ],
            )?;
            if changed == 0 {
                return Err(StoreError::NotFound(uuid));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, uuid: &str) -> Result<(), StoreError> {
        let uuid = uuid.to_string();
        self.with_connection(move |conn| {
            let changed = conn.execute("DELETE FROM events WHERE uuid = ?1", params![uuid])?;
            if changed == 0 {
                return Err(StoreError::NotFound(uuid));
            }
            Ok(())
        })
        .await
    }
}
