//! Schema and seed script assets.
//!
//! # Responsibility
//! - Hold the DDL and seed DML text handed to store bootstrap.
//! - Provide bundled defaults and directory loading for deployments.
//!
//! # Invariants
//! - The schema script is expected to be idempotent (`CREATE TABLE IF NOT EXISTS`).
//! - Scripts are plain text; no templating is applied.

use super::{DbError, DbResult};
use std::path::Path;

/// File name of the schema script inside a scripts directory.
pub const SCHEMA_FILE_NAME: &str = "dictionary.sql";
/// File name of the seed script inside a scripts directory.
pub const SEED_FILE_NAME: &str = "words.sql";

const BUNDLED_SCHEMA_SQL: &str = include_str!("sql/dictionary.sql");
const BUNDLED_SEED_SQL: &str = include_str!("sql/words.sql");

/// Text assets executed while a store bootstraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapScripts {
    /// DDL creating the `dictionary` relation.
    pub schema_sql: String,
    /// DML inserting the initial dictionary rows.
    pub seed_sql: String,
}

impl BootstrapScripts {
    pub fn new(schema_sql: impl Into<String>, seed_sql: impl Into<String>) -> Self {
        Self {
            schema_sql: schema_sql.into(),
            seed_sql: seed_sql.into(),
        }
    }

    /// Scripts compiled into this binary.
    pub fn bundled() -> Self {
        Self::new(BUNDLED_SCHEMA_SQL, BUNDLED_SEED_SQL)
    }

    /// Reads `dictionary.sql` and `words.sql` from `dir`.
    ///
    /// # Errors
    /// - Returns `DbError::Io` naming the first file that cannot be read.
    pub fn load_dir(dir: impl AsRef<Path>) -> DbResult<Self> {
        let dir = dir.as_ref();
        let schema_sql = read_script(&dir.join(SCHEMA_FILE_NAME))?;
        let seed_sql = read_script(&dir.join(SEED_FILE_NAME))?;
        Ok(Self {
            schema_sql,
            seed_sql,
        })
    }
}

fn read_script(path: &Path) -> DbResult<String> {
    std::fs::read_to_string(path).map_err(|source| DbError::Io {
        path: path.to_path_buf(),
        source,
    })
}
