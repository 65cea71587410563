//! Error types for the Portage domain.
//!
//! Uses `thiserror` for ergonomic error definitions. Prompt enrichment
//! itself never fails on missing data; the only failure surface is the
//! knowledge model, which gets its own error type.

use std::path::PathBuf;
use thiserror::Error;

/// The top-level error type for Portage operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Knowledge model errors ---
    #[error("Knowledge model error: {0}")]
    Knowledge(#[from] KnowledgeError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- I/O ---
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by a [`KnowledgeModel`](crate::knowledge::KnowledgeModel)
/// implementation. Enrichment propagates these unchanged.
#[derive(Debug, Clone, Error)]
pub enum KnowledgeError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Failed to load index at {path}: {reason}")]
    IndexLoad { path: PathBuf, reason: String },
}
