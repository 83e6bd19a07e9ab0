//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for dictionary words.
//! - Isolate SQLite bootstrap and query details from generation use-cases.
//!
//! # Invariants
//! - Repository writes must enforce `Word::validate_new()` before persistence.
//! - Read paths reject invalid persisted rows instead of masking them.

pub mod word_repo;
