//! Portage CLI — the main entry point.
//!
//! Commands:
//! - `migrate`  — Enriched prompt for migrating one file
//! - `refactor` — Enriched prompt listing detected issues and fixes
//! - `test`     — Enriched prompt for generating a component's tests
//! - `patterns` — List the pattern guide table
//! - `init`     — Write a default configuration file
//! - `config`   — Print the effective configuration

use clap::{Parser, Subcommand};
use portage_config::{AppConfig, LoggingConfig};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "portage",
    about = "Portage — enriched prompts for code migration assistants",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON-lines entity index (overrides config and PORTAGE_INDEX)
    #[arg(long, global = true, value_name = "PATH")]
    index: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a migration prompt for a source file
    Migrate {
        /// File to migrate
        file: PathBuf,

        /// Base instruction (defaults to prompts.migration)
        #[arg(short, long)]
        base: Option<String>,

        /// Import identifier of the file (repeatable)
        #[arg(short = 'd', long = "dep")]
        deps: Vec<String>,

        /// Detected pattern identifier (repeatable or comma-separated)
        #[arg(short = 'p', long = "pattern", value_delimiter = ',')]
        patterns: Vec<String>,

        /// The file defines a UI component
        #[arg(short, long)]
        component: bool,

        /// Print the prompt and section report as JSON
        #[arg(long)]
        report: bool,
    },

    /// Build a refactor prompt from detected issues
    Refactor {
        /// File being refactored
        file: PathBuf,

        /// Issue description (repeatable)
        #[arg(short, long = "issue", required = true)]
        issues: Vec<String>,

        /// Base instruction (defaults to prompts.refactor)
        #[arg(short, long)]
        base: Option<String>,

        /// Print the prompt and section report as JSON
        #[arg(long)]
        report: bool,
    },

    /// Build a test-generation prompt for a component
    Test {
        /// Path of the component under test
        component_path: String,

        /// Base instruction (defaults to prompts.test)
        #[arg(short, long)]
        base: Option<String>,

        /// Print the prompt and section report as JSON
        #[arg(long)]
        report: bool,
    },

    /// List known patterns and their guidance
    Patterns,

    /// Write a default config file
    Init,

    /// Print the effective configuration
    Config,
}

fn init_tracing(verbose: bool, logging: &LoggingConfig) {
    let filter = if verbose { "debug" } else { logging.level.as_str() };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr);

    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    init_tracing(cli.verbose, &config.logging);

    let index = cli.index.as_deref();
    match cli.command {
        Commands::Migrate {
            file,
            base,
            deps,
            patterns,
            component,
            report,
        } => commands::migrate::run(
            &config,
            index,
            commands::migrate::MigrateArgs {
                file,
                base,
                deps,
                patterns,
                component,
            },
            report,
        )?,
        Commands::Refactor {
            file,
            issues,
            base,
            report,
        } => commands::refactor::run(&config, index, &file, &issues, base, report)?,
        Commands::Test {
            component_path,
            base,
            report,
        } => commands::test_gen::run(&config, index, &component_path, base, report)?,
        Commands::Patterns => commands::patterns::run(),
        Commands::Init => commands::init::run()?,
        Commands::Config => commands::config_cmd::show(&config)?,
    }

    Ok(())
}
