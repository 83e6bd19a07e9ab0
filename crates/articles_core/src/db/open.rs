//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Resolve the configured url into a file or in-memory database.
//! - Configure connection pragmas required by core behavior.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON`.
//! - Credentials are never written to logs.

use super::{DbError, DbResult};
use crate::config::StoreConfig;
use log::{error, info};
use rusqlite::Connection;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const MEMORY_URLS: &[&str] = &[":memory:", "sqlite::memory:", "sqlite://:memory:"];
const URL_PREFIXES: &[&str] = &["sqlite://", "sqlite:"];
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database selected by a store url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbTarget {
    Memory,
    File(PathBuf),
}

impl DbTarget {
    /// Parses a store url.
    ///
    /// Accepts `:memory:` forms, `sqlite://<path>`, `sqlite:<path>` and bare paths.
    pub fn parse(url: &str) -> DbResult<Self> {
        let trimmed = url.trim();
        if MEMORY_URLS.contains(&trimmed) {
            return Ok(Self::Memory);
        }

        let path = URL_PREFIXES
            .iter()
            .find_map(|prefix| trimmed.strip_prefix(prefix))
            .unwrap_or(trimmed);
        if path.is_empty() {
            return Err(DbError::InvalidUrl(url.to_string()));
        }

        Ok(Self::File(PathBuf::from(path)))
    }

    fn mode(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::File(_) => "file",
        }
    }
}

/// Opens the database named by `config.url` and configures the connection.
///
/// SQLite has no authentication layer; `username` is only reported as the
/// connecting principal.
///
/// # Side effects
/// - Creates the database file when it does not exist yet.
/// - Emits `db_open` logging events with duration and status.
pub fn open_connection(config: &StoreConfig) -> DbResult<Connection> {
    let started_at = Instant::now();
    let target = DbTarget::parse(&config.url)?;
    let mode = target.mode();
    info!(
        "event=db_open module=db status=start mode={} principal={}",
        mode, config.username
    );

    let opened = match &target {
        DbTarget::Memory => Connection::open_in_memory(),
        DbTarget::File(path) => Connection::open(path),
    };

    match opened.and_then(|conn| configure(&conn).map(|()| conn)) {
        Ok(conn) => {
            info!(
                "event=db_open module=db status=ok mode={} duration_ms={}",
                mode,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_open_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}

fn configure(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)
}
