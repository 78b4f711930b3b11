//! Merge command implementation

use std::path::Path;

use colored::Colorize;

use bffgen_content::ThreeWayMerge;
use bffgen_fs::{NormalizedPath, io};

use super::read_input;
use crate::error::Result;

/// Paths of the three merge inputs.
#[derive(Debug, Clone, Copy)]
pub struct MergeInputs<'a> {
    pub base: &'a Path,
    pub local: &'a Path,
    pub remote: &'a Path,
}

/// Run the merge command
///
/// Conflicts are reported on stderr; the merged content (remote lines at
/// unresolved conflicts) goes to `output` or stdout.
pub fn run_merge(
    inputs: &MergeInputs<'_>,
    resolutions: &[(usize, String)],
    output: Option<&Path>,
    json: bool,
) -> Result<()> {
    let base = read_input(inputs.base)?;
    let local = read_input(inputs.local)?;
    let remote = read_input(inputs.remote)?;

    let mut result = ThreeWayMerge::new(&base, &local, &remote).merge();
    for (line, text) in resolutions {
        result.resolve_conflict(*line, text.clone())?;
    }
    let merged = result.apply_resolutions();

    if json {
        let mut report = serde_json::to_value(&result)?;
        report["content"] = serde_json::Value::String(merged.clone());
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if result.has_conflicts {
        let unresolved = result.unresolved().count();
        eprintln!("{}", result.format_conflicts());
        if unresolved > 0 {
            eprintln!(
                "{} {} unresolved, remote lines kept",
                "WARN".yellow().bold(),
                unresolved
            );
        }
    }

    match output {
        Some(path) => {
            io::write_text(&NormalizedPath::new(path), &merged)?;
            if !json {
                eprintln!(
                    "{} wrote {} ({})",
                    "OK".green().bold(),
                    path.display().to_string().cyan(),
                    result.summary
                );
            }
        }
        None if !json => print!("{merged}"),
        None => {}
    }

    Ok(())
}
