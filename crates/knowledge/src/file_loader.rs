//! JSON-lines index loading.
//!
//! Each non-blank line of the index file is a JSON-encoded `CodeEntity`:
//!
//! ```text
//! {"name":"Button","filePath":"/app/src/Button.tsx","type":"component","props":{"label":"string"}}
//! {"name":"useAuth","filePath":"/app/src/hooks/useAuth.ts","type":"hook"}
//! ```
//!
//! The file is produced by an external indexer and is only read here.

use crate::index::{IndexLimits, ProjectIndex};
use portage_core::entity::CodeEntity;
use portage_core::error::KnowledgeError;
use std::path::Path;
use tracing::{info, warn};

impl ProjectIndex {
    /// Load an index from a JSONL file. Corrupt lines are skipped with a
    /// warning; an unreadable file is an error.
    pub fn load_jsonl(path: &Path, limits: IndexLimits) -> Result<Self, KnowledgeError> {
        let content = std::fs::read_to_string(path).map_err(|e| KnowledgeError::IndexLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let entities = parse_jsonl(&content);
        info!(path = %path.display(), count = entities.len(), "Project index loaded");
        Ok(Self::new(entities, limits))
    }
}

/// Parse JSONL content into entities, skipping blank and corrupt lines.
pub fn parse_jsonl(content: &str) -> Vec<CodeEntity> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(idx, line)| match serde_json::from_str::<CodeEntity>(line) {
            Ok(entity) => Some(entity),
            Err(e) => {
                warn!(line = idx + 1, error = %e, "Skipping corrupted index entry");
                None
            }
        })
        .collect()
}
