//! Word repository contract and SQLite-backed word store.
//!
//! # Responsibility
//! - Own the dictionary connection from bootstrap until close.
//! - Provide insert and full-read access over the `dictionary` relation.
//!
//! # Invariants
//! - A `WordStore` value exists only after connect, schema and seed all succeed.
//! - `find_all` yields rows in insertion (`id`) order.
//! - After `close`, every operation fails with `StoreError::Closed`.

use crate::config::StoreConfig;
use crate::db::{
    apply_schema, dictionary_row_count, open_connection, seed_if_empty, BootstrapScripts, DbError,
};
use crate::model::word::{Word, WordId, WordValidationError};
use log::{debug, error, info, warn};
use rusqlite::{Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const INSERT_WORD_SQL: &str = "INSERT INTO dictionary (word) VALUES (?1) RETURNING id;";
const SELECT_WORDS_SQL: &str = "SELECT id, word FROM dictionary ORDER BY id ASC;";

pub type StoreResult<T> = Result<T, StoreError>;

/// Bootstrap step that failed while opening a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStage {
    Connect,
    Schema,
    Seed,
}

impl BootstrapStage {
    fn as_str(self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Schema => "schema",
            Self::Seed => "seed",
        }
    }
}

impl Display for BootstrapStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Word store error for bootstrap, persistence and lifecycle failures.
#[derive(Debug)]
pub enum StoreError {
    /// Store construction failed; no usable store exists.
    Bootstrap {
        stage: BootstrapStage,
        source: DbError,
    },
    /// Read or write failed on an open store.
    Storage(DbError),
    /// Caller-supplied word violates a precondition.
    InvalidInput(WordValidationError),
    /// Persisted row cannot be represented as a `Word`.
    InvalidData(String),
    /// Operation attempted after `close`.
    Closed,
}

impl StoreError {
    fn bootstrap(stage: BootstrapStage, source: DbError) -> Self {
        Self::Bootstrap { stage, source }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bootstrap { stage, source } => {
                write!(f, "word store bootstrap failed at {stage}: {source}")
            }
            Self::Storage(err) => write!(f, "{err}"),
            Self::InvalidInput(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted word data: {message}"),
            Self::Closed => write!(f, "word store is closed"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Bootstrap { source, .. } => Some(source),
            Self::Storage(err) => Some(err),
            Self::InvalidInput(err) => Some(err),
            Self::InvalidData(_) | Self::Closed => None,
        }
    }
}

impl From<WordValidationError> for StoreError {
    fn from(value: WordValidationError) -> Self {
        Self::InvalidInput(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Storage(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(DbError::Sqlite(value))
    }
}

/// Repository interface for dictionary words.
pub trait WordRepository {
    /// Inserts one word and returns it with the store-assigned id.
    fn save(&self, word: Word) -> StoreResult<Word>;
    /// Reads every dictionary row.
    fn find_all(&self) -> StoreResult<Vec<Word>>;
}

impl<R: WordRepository + ?Sized> WordRepository for &R {
    fn save(&self, word: Word) -> StoreResult<Word> {
        (**self).save(word)
    }

    fn find_all(&self) -> StoreResult<Vec<Word>> {
        (**self).find_all()
    }
}

/// SQLite-backed word store owning its connection.
///
/// Not `Sync`: callers sharing a store across threads must serialize access.
pub struct WordStore {
    conn: Option<Connection>,
}

impl WordStore {
    /// Connects, ensures the schema exists and seeds an empty dictionary.
    ///
    /// # Errors
    /// - Returns `StoreError::Bootstrap` naming the failed stage. Scripts run
    ///   as given; a failed seed leaves no rows behind.
    ///
    /// # Side effects
    /// - Emits `store_bootstrap` logging events with duration and status.
    pub fn open(config: &StoreConfig, scripts: &BootstrapScripts) -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=store_bootstrap module=store status=start");

        match bootstrap(config, scripts) {
            Ok((conn, seeded)) => {
                info!(
                    "event=store_bootstrap module=store status=ok seeded={} duration_ms={}",
                    seeded,
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn: Some(conn) })
            }
            Err(err) => {
                let stage = match &err {
                    StoreError::Bootstrap { stage, .. } => stage.as_str(),
                    _ => "unknown",
                };
                error!(
                    "event=store_bootstrap module=store status=error stage={} duration_ms={} error={}",
                    stage,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Counts dictionary rows.
    pub fn count(&self) -> StoreResult<usize> {
        let conn = self.connection()?;
        Ok(dictionary_row_count(conn)?)
    }

    /// Returns whether the connection has been released.
    pub fn is_closed(&self) -> bool {
        self.conn.is_none()
    }

    /// Releases the connection.
    ///
    /// Calling `close` on an already closed store is a no-op. The store is
    /// closed afterwards even when SQLite reports a close failure.
    pub fn close(&mut self) -> StoreResult<()> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };

        match conn.close() {
            Ok(()) => {
                info!("event=store_close module=store status=ok trigger=explicit");
                Ok(())
            }
            Err((_conn, err)) => {
                error!(
                    "event=store_close module=store status=error trigger=explicit error={}",
                    err
                );
                Err(err.into())
            }
        }
    }

    fn connection(&self) -> StoreResult<&Connection> {
        self.conn.as_ref().ok_or(StoreError::Closed)
    }
}

impl WordRepository for WordStore {
    fn save(&self, word: Word) -> StoreResult<Word> {
        let conn = self.connection()?;
        word.validate_new()?;

        let id = conn
            .query_row(INSERT_WORD_SQL, [word.value.as_str()], |row| {
                row.get::<_, WordId>(0)
            })
            .map_err(|err| {
                error!("event=word_save module=store status=error error={}", err);
                StoreError::from(err)
            })?;

        debug!("event=word_save module=store status=ok id={}", id);
        Ok(Word {
            id: Some(id),
            ..word
        })
    }

    fn find_all(&self) -> StoreResult<Vec<Word>> {
        let conn = self.connection()?;
        let words = query_all_words(conn).inspect_err(|err| {
            error!("event=word_find_all module=store status=error error={}", err);
        })?;

        debug!(
            "event=word_find_all module=store status=ok count={}",
            words.len()
        );
        Ok(words)
    }
}

impl Drop for WordStore {
    fn drop(&mut self) {
        let Some(conn) = self.conn.take() else {
            return;
        };

        match conn.close() {
            Ok(()) => debug!("event=store_close module=store status=ok trigger=drop"),
            Err((_conn, err)) => warn!(
                "event=store_close module=store status=error trigger=drop error={}",
                err
            ),
        }
    }
}

fn bootstrap(
    config: &StoreConfig,
    scripts: &BootstrapScripts,
) -> StoreResult<(Connection, bool)> {
    let conn = open_connection(config)
        .map_err(|err| StoreError::bootstrap(BootstrapStage::Connect, err))?;

    apply_schema(&conn, scripts)
        .map_err(|err| StoreError::bootstrap(BootstrapStage::Schema, err))?;
    let seeded = seed_if_empty(&conn, scripts)
        .map_err(|err| StoreError::bootstrap(BootstrapStage::Seed, err))?;

    Ok((conn, seeded))
}

fn query_all_words(conn: &Connection) -> StoreResult<Vec<Word>> {
    let mut stmt = conn.prepare(SELECT_WORDS_SQL)?;
    let mut rows = stmt.query([])?;
    let mut words = Vec::new();

    while let Some(row) = rows.next()? {
        words.push(parse_word_row(row)?);
    }

    Ok(words)
}

fn parse_word_row(row: &Row<'_>) -> StoreResult<Word> {
    let id: WordId = row.get("id")?;
    let value = row.get::<_, Option<String>>("word")?.ok_or_else(|| {
        StoreError::InvalidData(format!("NULL value in dictionary.word for id {id}"))
    })?;

    let word = Word::with_id(id, value);
    word.validate_value().map_err(|err| {
        StoreError::InvalidData(format!("{err} in dictionary.word for id {id}"))
    })?;
    Ok(word)
}
