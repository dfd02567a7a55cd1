//! Schema migrations, embedded at compile time and applied in version order.
//!
//! `schema_version` records applied versions, so running the migrator twice
//! is a no-op. Each migration runs in its own transaction.

use rusqlite::{Connection, params};
use tracing::{debug, info};

struct Migration {
    version: u32,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    description: "events table with interval index",
    sql: include_str!("v001_events.sql"),
}];

/// Apply every pending migration and return how many ran.
pub fn run_migrations(conn: &Connection) -> rusqlite::Result<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
             version INTEGER PRIMARY KEY,
             description TEXT NOT NULL,
             applied_at TEXT NOT NULL DEFAULT (datetime('now'))
         );",
    )?;
    let current: u32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;

    let mut applied = 0;
    for migration in MIGRATIONS {
        if migration.version <= current {
            debug!(version = migration.version, "migration already applied, skipping");
            continue;
        }
        info!(
            version = migration.version,
            description = migration.description,
            "applying migration"
        );
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(migration.sql)?;
        tx.execute(
            "INSERT INTO schema_version (version, description) VALUES (?1, ?2)",
            params![migration.version, migration.description],
        )?;
        tx.commit()?;
        applied += 1;
    }
    Ok(applied)
}
