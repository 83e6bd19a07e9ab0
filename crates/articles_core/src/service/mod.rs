//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and generator calls into use-case level APIs.
//! - Keep entry points decoupled from storage details.

pub mod article_service;
