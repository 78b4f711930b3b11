//! Diff command implementation

use std::path::Path;

use bffgen_content::compute_diff_with;
use bffgen_core::GeneratorConfig;

use super::read_input;
use crate::error::Result;

/// Run the diff command
///
/// Uses the configured diff strategy, so a config file can opt into the
/// aligned diff.
pub fn run_diff(config: &GeneratorConfig, old: &Path, new: &Path, json: bool) -> Result<()> {
    let old_content = read_input(old)?;
    let new_content = read_input(new)?;

    let diff = compute_diff_with(&old_content, &new_content, config.diff_strategy);

    if json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
    } else {
        println!("{}", diff.format());
    }

    Ok(())
}
