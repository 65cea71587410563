//! # Portage Core
//!
//! Domain types, the knowledge-model capability trait, and error
//! definitions shared by every Portage crate.
//!
//! ## Design Philosophy
//!
//! The knowledge model is defined as a trait here. Implementations live in
//! `portage-knowledge` (and in test helpers), so the enrichment engine can
//! be exercised against fixed fixtures and the dependency graph points
//! inward on core.

pub mod context;
pub mod entity;
pub mod error;
pub mod knowledge;
pub mod path;

// Re-export key types at crate root for ergonomics
pub use context::MigrationContext;
pub use entity::CodeEntity;
pub use error::{Error, KnowledgeError, Result};
pub use knowledge::KnowledgeModel;
