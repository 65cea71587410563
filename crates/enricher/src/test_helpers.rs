//! Shared test helpers for enrichment tests.

use portage_core::context::MigrationContext;
use portage_core::entity::CodeEntity;
use portage_core::error::KnowledgeError;
use portage_core::knowledge::KnowledgeModel;
use std::sync::Mutex;

/// A knowledge model that answers every query with fixed fixtures and
/// records the arguments it was called with.
#[derive(Default)]
pub struct StubKnowledge {
    pub context: String,
    pub recommendations: Vec<String>,
    pub similar: Vec<CodeEntity>,
    pub search_results: Vec<CodeEntity>,
    pub calls: Mutex<Vec<String>>,
}

impl StubKnowledge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(mut self, context: &str) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_recommendations(mut self, recs: &[&str]) -> Self {
        self.recommendations = recs.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_similar(mut self, similar: Vec<CodeEntity>) -> Self {
        self.similar = similar;
        self
    }

    pub fn with_search_results(mut self, results: Vec<CodeEntity>) -> Self {
        self.search_results = results;
        self
    }

    /// Recorded calls, formatted as `method(arg)`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl KnowledgeModel for StubKnowledge {
    fn name(&self) -> &str {
        "stub"
    }

    fn relevant_context(&self, file_path: &str, dependencies: &[String]) -> Result<String, KnowledgeError> {
        self.record(format!("relevant_context({file_path}, [{}])", dependencies.join(", ")));
        Ok(self.context.clone())
    }

    fn recommendations(&self, context: &MigrationContext) -> Result<Vec<String>, KnowledgeError> {
        self.record(format!("recommendations({})", context.file_path));
        Ok(self.recommendations.clone())
    }

    fn find_similar_components(&self, base_name: &str) -> Result<Vec<CodeEntity>, KnowledgeError> {
        self.record(format!("find_similar_components({base_name})"));
        Ok(self.similar.clone())
    }

    fn search(&self, query: &str) -> Result<Vec<CodeEntity>, KnowledgeError> {
        self.record(format!("search({query})"));
        Ok(self.search_results.clone())
    }
}

/// A knowledge model whose every query fails.
pub struct FailingKnowledge;

impl KnowledgeModel for FailingKnowledge {
    fn name(&self) -> &str {
        "failing"
    }

    fn relevant_context(&self, _file_path: &str, _dependencies: &[String]) -> Result<String, KnowledgeError> {
        Err(KnowledgeError::QueryFailed("context unavailable".into()))
    }

    fn recommendations(&self, _context: &MigrationContext) -> Result<Vec<String>, KnowledgeError> {
        Err(KnowledgeError::QueryFailed("recommendations unavailable".into()))
    }

    fn find_similar_components(&self, _base_name: &str) -> Result<Vec<CodeEntity>, KnowledgeError> {
        Err(KnowledgeError::QueryFailed("similarity unavailable".into()))
    }

    fn search(&self, _query: &str) -> Result<Vec<CodeEntity>, KnowledgeError> {
        Err(KnowledgeError::Storage("index offline".into()))
    }
}
