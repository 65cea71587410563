//! Knowledge model trait — project-aware lookup over a code-entity index.
//!
//! The enricher consumes exactly four read operations. Calls are
//! synchronous and read-only; implementations that are shared across
//! threads must make concurrent reads safe themselves.

use crate::context::MigrationContext;
use crate::entity::CodeEntity;
use crate::error::KnowledgeError;

/// The capability the prompt enricher depends on.
///
/// Implementations: `ProjectIndex` (in-memory index), `NoopKnowledge`
/// (answers nothing), plus fixture stubs in tests.
pub trait KnowledgeModel: Send + Sync {
    /// The model name (e.g., "project_index", "none").
    fn name(&self) -> &str;

    /// Free-form context relevant to `file_path` and its imports.
    /// An empty string means nothing relevant is known.
    fn relevant_context(
        &self,
        file_path: &str,
        dependencies: &[String],
    ) -> Result<String, KnowledgeError>;

    /// Migration recommendations derived from the whole context, in
    /// priority order.
    fn recommendations(&self, context: &MigrationContext) -> Result<Vec<String>, KnowledgeError>;

    /// Components similar to `base_name`; order is significant.
    fn find_similar_components(&self, base_name: &str) -> Result<Vec<CodeEntity>, KnowledgeError>;

    /// Free-text entity search, best match first.
    fn search(&self, query: &str) -> Result<Vec<CodeEntity>, KnowledgeError>;
}
