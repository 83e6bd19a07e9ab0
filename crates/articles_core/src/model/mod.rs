//! Domain model for dictionary words and generated articles.
//!
//! # Responsibility
//! - Define the records exchanged between the word store and generators.
//! - Own precondition checks shared by write and generation paths.
//!
//! # Invariants
//! - A persisted `Word` always carries a store-assigned `WordId`.
//! - An `Article` is derived output and is never persisted by core.

pub mod article;
pub mod word;
