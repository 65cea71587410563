//! Subcommand implementations and the helpers they share.

pub mod config_cmd;
pub mod init;
pub mod migrate;
pub mod patterns;
pub mod refactor;
pub mod test_gen;

use portage_config::AppConfig;
use portage_core::error::{KnowledgeError, Result};
use portage_core::knowledge::KnowledgeModel;
use portage_enricher::{EnrichedPrompt, PromptEnricher};
use portage_knowledge::{IndexLimits, NoopKnowledge, ProjectIndex};
use std::path::Path;
use std::sync::Arc;

/// Build the enricher over the configured index, or over no index at all.
///
/// `--index` wins over `index_path` from config (which already carries the
/// `PORTAGE_INDEX` override).
pub fn build_enricher(
    config: &AppConfig,
    index_override: Option<&Path>,
) -> std::result::Result<PromptEnricher, KnowledgeError> {
    let knowledge: Arc<dyn KnowledgeModel> =
        match index_override.or(config.index_path.as_deref()) {
            Some(path) => Arc::new(ProjectIndex::load_jsonl(
                path,
                IndexLimits {
                    search: config.knowledge.search_limit,
                    similar: config.knowledge.similar_limit,
                },
            )?),
            None => {
                tracing::info!("No index configured, enriching without project knowledge");
                Arc::new(NoopKnowledge)
            }
        };
    Ok(PromptEnricher::new(knowledge))
}

/// Print the prompt text, or the whole report as JSON.
pub fn emit(prompt: &EnrichedPrompt, report: bool) -> Result<()> {
    if report {
        println!("{}", serde_json::to_string_pretty(prompt)?);
    } else {
        println!("{}", prompt.text);
    }
    Ok(())
}
