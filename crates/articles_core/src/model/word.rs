//! Dictionary word model.
//!
//! # Responsibility
//! - Define the canonical dictionary entry read from and written to storage.
//! - Provide precondition checks used before persistence and generation.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one on insert.
//! - `value` must not be empty; whitespace is ordinary text.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned identity of a dictionary row.
pub type WordId = i64;

/// Precondition violations for word values and identities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordValidationError {
    /// Value is empty, the form an absent value takes.
    EmptyValue,
    /// Word was already persisted and cannot be inserted again.
    AlreadyPersisted { id: WordId },
}

impl Display for WordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyValue => write!(f, "word value must not be empty"),
            Self::AlreadyPersisted { id } => {
                write!(f, "word already has store-assigned id {id}")
            }
        }
    }
}

impl Error for WordValidationError {}

/// One entry of the `dictionary` relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    /// Store-assigned identity; `None` before the first save.
    pub id: Option<WordId>,
    /// Word text, stored in `dictionary.word`.
    #[serde(rename = "word")]
    pub value: String,
}

impl Word {
    /// Creates an unsaved word.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: None,
            value: value.into(),
        }
    }

    /// Creates a word copy for an existing row.
    pub fn with_id(id: WordId, value: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            value: value.into(),
        }
    }

    /// Returns whether the store has assigned an identity.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks that the value is usable as article text.
    pub fn validate_value(&self) -> Result<(), WordValidationError> {
        if self.value.is_empty() {
            return Err(WordValidationError::EmptyValue);
        }
        Ok(())
    }

    /// Checks the insert preconditions: usable value and no identity yet.
    pub fn validate_new(&self) -> Result<(), WordValidationError> {
        if let Some(id) = self.id {
            return Err(WordValidationError::AlreadyPersisted { id });
        }
        self.validate_value()
    }
}
