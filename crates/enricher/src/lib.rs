//! Prompt enrichment engine for Portage.
//!
//! Turns a base instruction into a context-rich prompt for a code
//! migration assistant. The pipeline is synchronous and stateless apart
//! from its handle to a [`KnowledgeModel`](portage_core::KnowledgeModel):
//!
//! | Prompt | Sections (in order, each optional unless noted) |
//! |--------|--------------------------------------------------|
//! | Migration | base · project context · recommendations · similar components · pattern guidance · constraints (always) |
//! | Refactor | base · issues detected · suggested solutions |
//! | Test | base · component under test · props · coverage checklist |
//!
//! Static data lives in [`patterns`], [`issues`] and [`constraints`];
//! [`paths`] holds the pure path helpers used for the similar-components
//! section.

pub mod assembly;
pub mod constraints;
pub mod enricher;
pub mod issues;
pub mod paths;
pub mod patterns;
pub mod token;

#[cfg(test)]
mod test_helpers;

pub use assembly::{EnrichedPrompt, SectionStats};
pub use enricher::{PromptEnricher, TEST_CHECKLIST};
