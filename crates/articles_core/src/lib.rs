//! Core domain logic for dictionary-backed article generation.
//! This crate owns word persistence and the generation strategies built on it.

pub mod config;
pub mod db;
pub mod generator;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, ConfigResult, StoreConfig};
pub use db::{BootstrapScripts, DbError, DbResult};
pub use generator::{ArticleGenerator, GenerateError, GenerateResult, JoinArticleGenerator};
pub use logging::{default_log_level, init_logging, logging_status, LogSink};
pub use model::article::Article;
pub use model::word::{Word, WordId, WordValidationError};
pub use repo::word_repo::{BootstrapStage, StoreError, StoreResult, WordRepository, WordStore};
pub use service::article_service::{ArticleService, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
