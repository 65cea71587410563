//! In-memory project index — the production knowledge model.
//!
//! Entities are held in a `Vec` behind a `RwLock`, so any number of
//! enrichment calls may read concurrently while `insert` stays available
//! for incremental indexing.

use crate::words::{camel_words, import_stem, same_directory, same_file};
use portage_core::context::MigrationContext;
use portage_core::entity::CodeEntity;
use portage_core::error::KnowledgeError;
use portage_core::knowledge::KnowledgeModel;
use portage_core::path::file_stem;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard};

/// Result caps for index queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexLimits {
    pub search: usize,
    pub similar: usize,
}

impl Default for IndexLimits {
    fn default() -> Self {
        Self {
            search: 10,
            similar: 5,
        }
    }
}

/// An entity index answering knowledge-model queries from memory.
pub struct ProjectIndex {
    entities: Arc<RwLock<Vec<CodeEntity>>>,
    limits: IndexLimits,
}

impl ProjectIndex {
    pub fn new(entities: Vec<CodeEntity>, limits: IndexLimits) -> Self {
        Self {
            entities: Arc::new(RwLock::new(entities)),
            limits,
        }
    }

    /// Add an entity to the index.
    pub fn insert(&self, entity: CodeEntity) -> Result<(), KnowledgeError> {
        self.entities
            .write()
            .map_err(|_| KnowledgeError::Storage("index lock poisoned".into()))?
            .push(entity);
        Ok(())
    }

    pub fn len(&self) -> Result<usize, KnowledgeError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, KnowledgeError> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<CodeEntity>>, KnowledgeError> {
        self.entities
            .read()
            .map_err(|_| KnowledgeError::Storage("index lock poisoned".into()))
    }

    /// Resolve an import specifier to an indexed entity by name or file stem.
    fn resolve_import<'a>(entities: &'a [CodeEntity], dependency: &str) -> Option<&'a CodeEntity> {
        let stem = import_stem(dependency);
        if stem.is_empty() {
            return None;
        }
        entities
            .iter()
            .find(|e| e.name == stem || file_stem(&e.file_path) == stem)
    }
}

impl Default for ProjectIndex {
    fn default() -> Self {
        Self::new(Vec::new(), IndexLimits::default())
    }
}

/// Keyword relevance of an entity for a lowercase query.
fn search_score(entity: &CodeEntity, query_lower: &str) -> f32 {
    let name = entity.name.to_lowercase();
    let mut score = if name == query_lower {
        3.0
    } else if name.starts_with(query_lower) {
        2.0
    } else if name.contains(query_lower) {
        1.0
    } else {
        0.0
    };
    if entity
        .description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(query_lower))
    {
        score += 0.5;
    }
    if entity.file_path.to_lowercase().contains(query_lower) {
        score += 0.25;
    }
    score
}

/// Shared camel-case words, plus one when either name contains the other.
fn similarity(candidate: &str, target_words: &[String], target_lower: &str) -> usize {
    let shared = camel_words(candidate)
        .iter()
        .filter(|w| target_words.contains(w))
        .count();
    let candidate_lower = candidate.to_lowercase();
    let nested =
        candidate_lower.contains(target_lower) || target_lower.contains(candidate_lower.as_str());
    shared + usize::from(nested)
}

impl KnowledgeModel for ProjectIndex {
    fn name(&self) -> &str {
        "project_index"
    }

    fn relevant_context(
        &self,
        file_path: &str,
        dependencies: &[String],
    ) -> Result<String, KnowledgeError> {
        let entities = self.read()?;
        let mut lines = Vec::new();

        for dependency in dependencies {
            if let Some(entity) = Self::resolve_import(&entities, dependency) {
                let mut line = format!("- {} ({}) via '{}'", entity.name, entity.kind, dependency);
                if let Some(description) = &entity.description {
                    line.push_str(": ");
                    line.push_str(description);
                }
                lines.push(line);
            }
        }

        let neighbours: Vec<&str> = entities
            .iter()
            .filter(|e| same_directory(&e.file_path, file_path) && !same_file(&e.file_path, file_path))
            .map(|e| e.name.as_str())
            .collect();
        if !neighbours.is_empty() {
            lines.push(format!("Also in this directory: {}", neighbours.join(", ")));
        }

        Ok(lines.join("\n"))
    }

    fn recommendations(&self, context: &MigrationContext) -> Result<Vec<String>, KnowledgeError> {
        let entities = self.read()?;
        let mut recs = Vec::new();

        // One line per hook even when it is imported under several specifiers.
        let mut hooks_seen = HashSet::new();
        for dependency in &context.dependencies {
            if let Some(hook) = Self::resolve_import(&entities, dependency)
                .filter(|e| e.kind == "hook" && hooks_seen.insert(e.name.as_str()))
            {
                recs.push(format!(
                    "Reuse the existing hook {} from {}",
                    hook.name, hook.file_path
                ));
            }
        }

        if context.is_component {
            let typed = entities
                .iter()
                .filter(|e| e.kind == "component" && e.has_props())
                .count();
            if typed > 0 {
                recs.push(format!(
                    "Declare a typed props interface, as {typed} existing components do"
                ));
            }
        }

        if context.source_code.contains("class ") && context.source_code.contains("extends") {
            recs.push("Convert the class to a function component with hooks".into());
        }

        if context.has_pattern("fetch")
            && let Some(service) = entities.iter().find(|e| e.kind == "service")
        {
            recs.push(format!(
                "Route data access through {} instead of calling fetch directly",
                service.name
            ));
        }

        Ok(recs)
    }

    fn find_similar_components(&self, base_name: &str) -> Result<Vec<CodeEntity>, KnowledgeError> {
        if base_name.is_empty() {
            return Ok(Vec::new());
        }
        let entities = self.read()?;
        let target_words = camel_words(base_name);
        let target_lower = base_name.to_lowercase();

        let mut scored: Vec<(usize, &CodeEntity)> = entities
            .iter()
            .filter(|e| e.kind == "component" && e.name != base_name)
            .map(|e| (similarity(&e.name, &target_words, &target_lower), e))
            .filter(|(score, _)| *score > 0)
            .collect();

        // Stable sort keeps index order among equal scores.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(scored
            .into_iter()
            .take(self.limits.similar)
            .map(|(_, e)| e.clone())
            .collect())
    }

    fn search(&self, query: &str) -> Result<Vec<CodeEntity>, KnowledgeError> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Ok(Vec::new());
        }
        let entities = self.read()?;

        let mut results: Vec<(f32, &CodeEntity)> = entities
            .iter()
            .map(|e| (search_score(e, &query_lower), e))
            .filter(|(score, _)| *score > 0.0)
            .collect();

        results.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        Ok(results
            .into_iter()
            .take(self.limits.search)
            .map(|(_, e)| e.clone())
            .collect())
    }
}
