//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// bffgen - regeneration-safe code generation
#[derive(Parser, Debug)]
#[command(name = "bffgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load generator settings from a TOML or JSON file
    #[arg(short, long, global = true, env = "BFFGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use `// bffgen:begin:<ID>` / `// bffgen:end:<ID>` markers
    #[arg(long, global = true, value_name = "ID")]
    pub marker_id: Option<String>,

    /// Report what would change without writing
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Report the full diff without writing (wins over --dry-run)
    #[arg(long, global = true)]
    pub check: bool,

    /// Back up prior content into this directory before each write
    #[arg(long, global = true, value_name = "DIR")]
    pub backup_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate or update the marked block in a file
    ///
    /// Examples:
    ///   bffgen generate main.go routes.txt
    ///   render-routes | bffgen generate main.go -
    ///   bffgen --check generate main.go routes.txt
    Generate {
        /// File to create or update
        target: PathBuf,

        /// File holding the new block body, or `-` for stdin
        content: String,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that a file's markers are well formed
    Validate {
        /// File to check
        file: PathBuf,
    },

    /// List the marked sections in a file
    Summary {
        /// File to inspect
        file: PathBuf,
    },

    /// Show line changes between two files
    Diff {
        old: PathBuf,
        new: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Three-way merge a user-edited file with fresh output
    Merge {
        /// Content as originally generated
        base: PathBuf,
        /// Content as edited by the user
        local: PathBuf,
        /// Content as generated now
        remote: PathBuf,

        /// Resolve the conflict at LINE with TEXT (repeatable)
        #[arg(long = "resolve", value_name = "LINE=TEXT", value_parser = parse_resolution)]
        resolutions: Vec<(usize, String)>,

        /// Write the merged content here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Delete the backup directory
    CleanupBackups,
}

fn parse_resolution(raw: &str) -> Result<(usize, String), String> {
    let (line, text) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected LINE=TEXT, got '{raw}'"))?;
    let line = line
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid line number '{line}': {e}"))?;
    Ok((line, text.to_string()))
}
