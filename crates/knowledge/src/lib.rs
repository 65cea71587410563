//! Knowledge model implementations for Portage.

pub mod file_loader;
pub mod index;
pub mod noop;
pub mod words;

pub use index::{IndexLimits, ProjectIndex};
pub use noop::NoopKnowledge;
