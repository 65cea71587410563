//! Per-file migration context handed to the prompt enricher.

use crate::path;
use serde::{Deserialize, Serialize};

/// Metadata extracted from a single source file that is about to be
/// migrated. Immutable for the duration of an enrichment call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationContext {
    /// Basename of `file_path`.
    pub file_name: String,

    /// Absolute or project-relative path of the file.
    pub file_path: String,

    /// Full file text.
    #[serde(default)]
    pub source_code: String,

    /// Import identifiers, in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    /// Pattern identifiers reported by the analyzer (e.g. "auth", "fetch").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detected_patterns: Vec<String>,

    /// Whether the file defines a UI component.
    #[serde(default)]
    pub is_component: bool,
}

impl MigrationContext {
    /// Create a context for `file_path`, deriving `file_name` from it so the
    /// two always agree.
    pub fn new(file_path: impl Into<String>, source_code: impl Into<String>) -> Self {
        let file_path = file_path.into();
        let file_name = path::file_name(&file_path).to_string();
        Self {
            file_name,
            file_path,
            source_code: source_code.into(),
            ..Self::default()
        }
    }

    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn with_patterns(mut self, patterns: Vec<String>) -> Self {
        self.detected_patterns = patterns;
        self
    }

    pub fn component(mut self, is_component: bool) -> Self {
        self.is_component = is_component;
        self
    }

    /// Whether `detected_patterns` contains `pattern` (exact match).
    pub fn has_pattern(&self, pattern: &str) -> bool {
        self.detected_patterns.iter().any(|p| p == pattern)
    }
}
