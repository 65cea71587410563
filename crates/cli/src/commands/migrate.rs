//! `portage migrate` — Enriched migration prompt for one file.

use portage_config::AppConfig;
use portage_core::context::MigrationContext;
use portage_core::error::{Error, Result};
use std::path::{Path, PathBuf};

pub struct MigrateArgs {
    pub file: PathBuf,
    pub base: Option<String>,
    pub deps: Vec<String>,
    pub patterns: Vec<String>,
    pub component: bool,
}

pub fn run(
    config: &AppConfig,
    index: Option<&Path>,
    args: MigrateArgs,
    report: bool,
) -> Result<()> {
    let source = std::fs::read_to_string(&args.file).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("failed to read {}: {e}", args.file.display()),
        ))
    })?;

    // Lexical; nothing is resolved on disk.
    let file = std::path::absolute(&args.file)?;
    let context = MigrationContext::new(file.to_string_lossy(), source)
        .with_dependencies(args.deps)
        .with_patterns(args.patterns)
        .component(args.component);

    let root = std::env::current_dir()?;
    let enricher =
        super::build_enricher(config, index)?.with_project_root(root.to_string_lossy());
    let base = args.base.as_deref().unwrap_or(&config.prompts.migration);
    let prompt = enricher.enrich_prompt_detailed(base, &context)?;
    super::emit(&prompt, report)
}
