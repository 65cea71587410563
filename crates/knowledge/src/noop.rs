//! No-op knowledge model — enrichment without any project index.

use portage_core::context::MigrationContext;
use portage_core::entity::CodeEntity;
use portage_core::error::KnowledgeError;
use portage_core::knowledge::KnowledgeModel;

/// A knowledge model that knows nothing. Every enrichment degrades to the
/// base prompt plus the static sections.
pub struct NoopKnowledge;

impl KnowledgeModel for NoopKnowledge {
    fn name(&self) -> &str { "none" }

    fn relevant_context(&self, _file_path: &str, _dependencies: &[String]) -> Result<String, KnowledgeError> {
        Ok(String::new())
    }

    fn recommendations(&self, _context: &MigrationContext) -> Result<Vec<String>, KnowledgeError> {
        Ok(Vec::new())
    }

    fn find_similar_components(&self, _base_name: &str) -> Result<Vec<CodeEntity>, KnowledgeError> {
        Ok(Vec::new())
    }

    fn search(&self, _query: &str) -> Result<Vec<CodeEntity>, KnowledgeError> {
        Ok(Vec::new())
    }
}
