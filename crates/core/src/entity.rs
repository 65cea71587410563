//! Read-only view of an entity indexed by the knowledge model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named code entity (component, hook, service, ...) known to the
/// knowledge model. Owned by the model; enrichment never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeEntity {
    pub name: String,

    /// Location of the entity, usually absolute.
    pub file_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Declared entity type, e.g. "component", "hook", "service".
    #[serde(rename = "type")]
    pub kind: String,

    /// Prop name → type string, for components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<BTreeMap<String, String>>,
}

impl CodeEntity {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_path: file_path.into(),
            description: None,
            kind: kind.into(),
            props: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_prop(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.props
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), ty.into());
        self
    }

    /// True when the entity declares at least one prop.
    pub fn has_props(&self) -> bool {
        self.props.as_ref().is_some_and(|p| !p.is_empty())
    }
}
