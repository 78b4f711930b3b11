//! Generate command implementation

use std::path::Path;

use colored::Colorize;

use bffgen_core::{FileReport, Generator, GeneratorConfig, RunMode};

use super::read_content_arg;
use crate::error::Result;

/// Run the generate command
///
/// Folds the content into the target's marked block and reports what
/// happened according to the run mode.
pub fn run_generate(config: GeneratorConfig, target: &Path, content: &str, json: bool) -> Result<()> {
    let body = read_content_arg(content)?;
    let verbose = config.verbose;
    let generator = Generator::new(config);

    let report = generator.generate_file(target, &body)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, verbose);
    }

    Ok(())
}

fn print_report(report: &FileReport, verbose: bool) {
    let path = report.path.display().to_string();

    match report.mode {
        RunMode::Check => println!("{} {}", "Check".blue().bold(), path.cyan()),
        RunMode::DryRun => println!("{} {}", "Dry run".blue().bold(), path.cyan()),
        RunMode::Write => {}
    }

    if !report.diff.has_changes {
        println!("{} No changes needed", "OK".green().bold());
        return;
    }

    match report.mode {
        RunMode::Check => {
            println!("{} {}", "Changes detected:".yellow().bold(), report.diff.summary);
            println!("{}", report.diff.format());
        }
        RunMode::DryRun => {
            println!("{} {}", "Would update:".yellow().bold(), report.diff.summary);
            if verbose {
                println!("{}", report.diff.format());
            }
        }
        RunMode::Write => {
            println!(
                "{} {} ({})",
                "Updated".green().bold(),
                path.cyan(),
                report.diff.summary
            );
            if let Some(backup) = &report.backup {
                println!("   {} backup at {}", "+".green(), backup.display());
            }
        }
    }
}
