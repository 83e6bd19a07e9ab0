//! Dictionary schema and seed execution.
//!
//! # Responsibility
//! - Execute the schema script against an open connection.
//! - Seed the `dictionary` relation when it holds no rows.
//!
//! # Invariants
//! - Scripts run as given, so they may carry their own `BEGIN`/`COMMIT`.
//! - Seeding never runs against a non-empty relation.
//! - A failed seed leaves the relation empty and the connection in autocommit mode.

use super::{BootstrapScripts, DbError, DbResult};
use log::warn;
use rusqlite::Connection;

/// Executes the schema script.
pub fn apply_schema(conn: &Connection, scripts: &BootstrapScripts) -> DbResult<()> {
    let outcome = conn
        .execute_batch(&scripts.schema_sql)
        .map_err(DbError::from)
        .and_then(|()| ensure_autocommit(conn));
    if outcome.is_err() {
        rollback_open_transaction(conn);
    }
    outcome
}

/// Executes the seed script when `dictionary` is empty.
///
/// Returns `true` when the seed script ran. On failure, rows the script
/// managed to insert are removed again.
pub fn seed_if_empty(conn: &Connection, scripts: &BootstrapScripts) -> DbResult<bool> {
    if dictionary_row_count(conn)? > 0 {
        return Ok(false);
    }

    let outcome = conn
        .execute_batch(&scripts.seed_sql)
        .map_err(DbError::from)
        .and_then(|()| ensure_autocommit(conn));
    if let Err(err) = outcome {
        discard_partial_seed(conn);
        return Err(err);
    }

    Ok(true)
}

/// Counts rows in the `dictionary` relation.
pub fn dictionary_row_count(conn: &Connection) -> DbResult<usize> {
    let count = conn.query_row("SELECT COUNT(*) FROM dictionary;", [], |row| {
        row.get::<_, i64>(0)
    })?;
    Ok(count.max(0) as usize)
}

fn ensure_autocommit(conn: &Connection) -> DbResult<()> {
    if conn.is_autocommit() {
        Ok(())
    } else {
        Err(DbError::UnterminatedTransaction)
    }
}

fn rollback_open_transaction(conn: &Connection) {
    if conn.is_autocommit() {
        return;
    }
    if let Err(err) = conn.execute_batch("ROLLBACK;") {
        warn!(
            "event=db_bootstrap module=db status=error action=rollback error={}",
            err
        );
    }
}

fn discard_partial_seed(conn: &Connection) {
    rollback_open_transaction(conn);
    if let Err(err) = conn.execute("DELETE FROM dictionary;", []) {
        warn!(
            "event=db_bootstrap module=db status=error action=discard_seed error={}",
            err
        );
    }
}
