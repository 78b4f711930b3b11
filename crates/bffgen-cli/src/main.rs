//! bffgen CLI
//!
//! Thin wrapper over `bffgen-core`: generate marked blocks, inspect marker
//! structure, diff and merge generated files.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use bffgen_core::{GeneratorConfig, Marker};
use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::debug!("verbose mode enabled");

    let config = resolve_config(&cli)?;

    match cli.command {
        Some(cmd) => execute_command(cmd, config),
        None => {
            println!(
                "{} regeneration-safe code generation",
                "bffgen".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "bffgen --help".cyan());
            Ok(())
        }
    }
}

/// Load `--config` if given, then apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::new(),
    };

    if let Some(id) = &cli.marker_id {
        config = config.with_marker(Marker::scoped(id));
    }
    if let Some(dir) = &cli.backup_dir {
        config = config.with_backup_dir(dir.clone());
    }
    if cli.dry_run {
        config = config.with_dry_run(true);
    }
    if cli.check {
        config = config.with_check_mode(true);
    }
    if cli.verbose {
        config = config.with_verbose(true);
    }

    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

fn execute_command(cmd: Commands, config: GeneratorConfig) -> Result<()> {
    match cmd {
        Commands::Generate {
            target,
            content,
            json,
        } => commands::run_generate(config, &target, &content, json),
        Commands::Validate { file } => commands::run_validate(config, &file),
        Commands::Summary { file } => commands::run_summary(config, &file),
        Commands::Diff { old, new, json } => commands::run_diff(&config, &old, &new, json),
        Commands::Merge {
            base,
            local,
            remote,
            resolutions,
            output,
            json,
        } => commands::run_merge(
            &commands::MergeInputs {
                base: &base,
                local: &local,
                remote: &remote,
            },
            &resolutions,
            output.as_deref(),
            json,
        ),
        Commands::CleanupBackups => commands::run_cleanup_backups(config),
    }
}
