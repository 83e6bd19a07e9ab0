//! SQLite connection and dictionary bootstrap entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections from store configuration.
//! - Carry the schema/seed scripts and apply them to a fresh connection.
//!
//! # Invariants
//! - Core code must not read/write dictionary rows before schema bootstrap succeeds.
//! - Seed rows are inserted at most once per database.
//! - Bootstrap never leaves a script-opened transaction pending.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod bootstrap;
mod open;
mod scripts;

pub use bootstrap::{apply_schema, dictionary_row_count, seed_if_empty};
pub use open::{open_connection, DbTarget};
pub use scripts::{BootstrapScripts, SCHEMA_FILE_NAME, SEED_FILE_NAME};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    InvalidUrl(String),
    /// A script opened a transaction without ending it.
    UnterminatedTransaction,
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::InvalidUrl(url) => write!(f, "invalid database url `{url}`"),
            Self::UnterminatedTransaction => {
                write!(f, "script left a transaction open without COMMIT")
            }
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::InvalidUrl(_) | Self::UnterminatedTransaction => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
