//! Cleanup-backups command implementation

use colored::Colorize;

use bffgen_core::{Generator, GeneratorConfig};

use crate::error::{CliError, Result};

/// Run the cleanup-backups command
pub fn run_cleanup_backups(config: GeneratorConfig) -> Result<()> {
    let Some(dir) = config.backup_dir.clone() else {
        return Err(CliError::user(
            "no backup directory configured (use --backup-dir or set backup_dir in --config)",
        ));
    };

    if Generator::new(config).cleanup_backups()? {
        println!(
            "{} removed {}",
            "OK".green().bold(),
            dir.display().to_string().cyan()
        );
    } else {
        println!("Nothing to remove at {}", dir.display().to_string().cyan());
    }
    Ok(())
}
