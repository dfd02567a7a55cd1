//! `SQLite` connection pool shared by every SQL-backed adapter.
//!
//! Built once in the composition root and handed to adapters, never reached
//! through a global. Each pooled connection gets the same pragmas on acquire.

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::time::Duration;

pub type ConnectionPool = Pool<SqliteConnectionManager>;

#[derive(Clone, Debug)]
pub struct ConnectionConfig {
    /// Maximum pool size (default: 8).
    pub pool_size: u32,
    /// Busy timeout in milliseconds (default: 5000).
    pub busy_timeout_ms: u32,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            pool_size: 8,
            busy_timeout_ms: 5_000,
        }
    }
}

#[derive(Debug)]
struct PragmaCustomizer {
    busy_timeout_ms: u32,
}

impl r2d2::CustomizeConnection<Connection, rusqlite::Error> for PragmaCustomizer {
    fn on_acquire(&self, conn: &mut Connection) -> Result<(), rusqlite::Error> {
        conn.execute_batch(&format!(
            "PRAGMA journal_mode = WAL;\
             PRAGMA busy_timeout = {};\
             PRAGMA synchronous = NORMAL;",
            self.busy_timeout_ms
        ))
    }
}

/// File-backed pool.
pub fn new_file(path: &str, config: &ConnectionConfig) -> Result<ConnectionPool, r2d2::Error> {
    Pool::builder()
        .max_size(config.pool_size)
        .connection_timeout(Duration::from_secs(5))
        .connection_customizer(Box::new(PragmaCustomizer {
            busy_timeout_ms: config.busy_timeout_ms,
        }))
        .build(SqliteConnectionManager::file(path))
}

/// In-memory pool for tests and throwaway runs.
///
/// Every `SQLite` in-memory connection is its own database, so the pool holds
/// exactly one connection.
pub fn new_in_memory() -> Result<ConnectionPool, r2d2::Error> {
    Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connection_timeout(Duration::from_secs(5))
        .connection_customizer(Box::new(PragmaCustomizer {
            busy_timeout_ms: ConnectionConfig::default().busy_timeout_ms,
        }))
        .build(SqliteConnectionManager::memory())
}
