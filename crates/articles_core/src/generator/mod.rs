//! Article generation strategies.
//!
//! # Responsibility
//! - Define the single-operation contract for turning words into an article.
//! - Host concrete strategies independent from word storage.
//!
//! # Invariants
//! - Generators are pure: same input, same article, no side effects.
//! - Empty words are rejected, never rendered as missing text.

use crate::model::article::Article;
use crate::model::word::{Word, WordValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod join;

pub use join::JoinArticleGenerator;

pub type GenerateResult<T> = Result<T, GenerateError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Word at `index` of the input violates a precondition.
    InvalidInput {
        index: usize,
        source: WordValidationError,
    },
}

impl Display for GenerateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { index, source } => {
                write!(f, "invalid word at position {index}: {source}")
            }
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput { source, .. } => Some(source),
        }
    }
}

/// Produces one article from an ordered word sequence.
pub trait ArticleGenerator {
    fn generate(&self, words: &[Word]) -> GenerateResult<Article>;
}

impl<G: ArticleGenerator + ?Sized> ArticleGenerator for &G {
    fn generate(&self, words: &[Word]) -> GenerateResult<Article> {
        (**self).generate(words)
    }
}

impl<G: ArticleGenerator + ?Sized> ArticleGenerator for Box<G> {
    fn generate(&self, words: &[Word]) -> GenerateResult<Article> {
        (**self).generate(words)
    }
}
