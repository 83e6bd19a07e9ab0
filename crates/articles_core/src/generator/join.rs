//! Separator-joined article generation.

use super::{ArticleGenerator, GenerateError, GenerateResult};
use crate::model::article::Article;
use crate::model::word::Word;

const DEFAULT_SEPARATOR: &str = " ";

/// Concatenates word values in input order, separated by `separator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinArticleGenerator {
    separator: String,
}

impl JoinArticleGenerator {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for JoinArticleGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl ArticleGenerator for JoinArticleGenerator {
    fn generate(&self, words: &[Word]) -> GenerateResult<Article> {
        let mut content = String::new();

        for (index, word) in words.iter().enumerate() {
            word.validate_value()
                .map_err(|source| GenerateError::InvalidInput { index, source })?;
            if index > 0 {
                content.push_str(&self.separator);
            }
            content.push_str(&word.value);
        }

        Ok(Article::new(content))
    }
}
