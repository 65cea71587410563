//! `portage refactor` — Enriched refactor prompt from detected issues.

use portage_config::AppConfig;
use portage_core::error::Result;
use std::path::Path;

pub fn run(
    config: &AppConfig,
    index: Option<&Path>,
    file: &Path,
    issues: &[String],
    base: Option<String>,
    report: bool,
) -> Result<()> {
    let enricher = super::build_enricher(config, index)?;
    let base = base.as_deref().unwrap_or(&config.prompts.refactor);
    let prompt =
        enricher.enrich_refactor_prompt_detailed(base, &file.to_string_lossy(), issues)?;
    super::emit(&prompt, report)
}
