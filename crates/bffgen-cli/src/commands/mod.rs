//! Command implementations for bffgen-cli

pub mod cleanup;
pub mod diff;
pub mod generate;
pub mod inspect;
pub mod merge;

use std::io::Read;
use std::path::Path;

use bffgen_fs::{NormalizedPath, io};

use crate::error::Result;

pub use cleanup::run_cleanup_backups;
pub use diff::run_diff;
pub use generate::run_generate;
pub use inspect::{run_summary, run_validate};
pub use merge::{MergeInputs, run_merge};

/// Read a text input file.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    Ok(io::read_text(&NormalizedPath::new(path))?)
}

/// Read a content argument: `-` means stdin, anything else is a file path.
pub(crate) fn read_content_arg(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        read_input(Path::new(arg))
    }
}
