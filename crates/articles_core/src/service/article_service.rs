//! Article use-case service.
//!
//! # Responsibility
//! - Wire word retrieval into article generation as one use case.
//! - Delegate persistence and generation to injected implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic and strategy-agnostic.

use crate::generator::{ArticleGenerator, GenerateError};
use crate::model::article::Article;
use crate::model::word::Word;
use crate::repo::word_repo::{StoreError, WordRepository};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
    Store(StoreError),
    Generate(GenerateError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Generate(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Generate(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<GenerateError> for ServiceError {
    fn from(value: GenerateError) -> Self {
        Self::Generate(value)
    }
}

/// Use-case service producing articles from the stored dictionary.
pub struct ArticleService<R: WordRepository, G: ArticleGenerator> {
    repo: R,
    generator: G,
}

impl<R: WordRepository, G: ArticleGenerator> ArticleService<R, G> {
    pub fn new(repo: R, generator: G) -> Self {
        Self { repo, generator }
    }

    /// Adds one word to the dictionary and returns it with its id.
    pub fn add_word(&self, value: impl Into<String>) -> ServiceResult<Word> {
        Ok(self.repo.save(Word::new(value))?)
    }

    /// Reads the whole dictionary and generates one article from it.
    pub fn generate_article(&self) -> ServiceResult<Article> {
        let words = self.repo.find_all()?;
        let article = self.generator.generate(&words)?;
        info!(
            "event=article_generate module=service status=ok words={} chars={}",
            words.len(),
            article.content.chars().count()
        );
        Ok(article)
    }

    /// Returns the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Consumes the service and returns the repository, e.g. to close it.
    pub fn into_repo(self) -> R {
        self.repo
    }
}
