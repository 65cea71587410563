//! `portage test` — Enriched test-generation prompt for a component.

use portage_config::AppConfig;
use portage_core::error::Result;
use std::path::Path;

pub fn run(
    config: &AppConfig,
    index: Option<&Path>,
    component_path: &str,
    base: Option<String>,
    report: bool,
) -> Result<()> {
    let enricher = super::build_enricher(config, index)?;
    let base = base.as_deref().unwrap_or(&config.prompts.test);
    let prompt = enricher.enrich_test_prompt_detailed(base, component_path)?;
    if !prompt.has_section("component") {
        tracing::warn!(component = %component_path, "Component not found in index, using base prompt only");
    }
    super::emit(&prompt, report)
}
