//! Validate and summary command implementations

use std::path::Path;

use colored::Colorize;

use bffgen_core::{Generator, GeneratorConfig};

use crate::error::Result;

/// Run the validate command
pub fn run_validate(config: GeneratorConfig, file: &Path) -> Result<()> {
    Generator::new(config).validate_file(file)?;
    println!(
        "{} {} has well-formed markers",
        "OK".green().bold(),
        file.display().to_string().cyan()
    );
    Ok(())
}

/// Run the summary command
pub fn run_summary(config: GeneratorConfig, file: &Path) -> Result<()> {
    let sections = Generator::new(config).file_summary(file)?;

    if sections.is_empty() {
        println!("No marked sections in {}", file.display().to_string().cyan());
        return Ok(());
    }

    println!(
        "{} {}",
        "Sections".blue().bold(),
        file.display().to_string().cyan()
    );
    for line in sections {
        println!("   {} {}", "-".dimmed(), line);
    }
    Ok(())
}
