//! Regeneration-safe file generation for bffgen
//!
//! Sits above the content crates and below the CLI:
//!
//! ```text
//!                  bffgen-cli
//!                      |
//!                 bffgen-core
//!                      |
//!     +----------------+----------------+
//!     |                |                |
//! bffgen-fs      bffgen-blocks    bffgen-content
//! ```
//!
//! A [`Generator`] re-runs generation against a file that may already carry
//! hand-written edits. Only the first region fenced by the configured marker
//! is rewritten; everything outside it is preserved byte for byte.
//!
//! # Example
//!
//! ```no_run
//! use bffgen_core::{Generator, GeneratorConfig};
//!
//! fn example() -> bffgen_core::Result<()> {
//!     let generator = Generator::new(GeneratorConfig::default().with_backup_dir(".bffgen/backups"));
//!     let report = generator.generate_file("internal/routes/routes.go", "r.Get(\"/health\", health)")?;
//!     println!("{}", report.diff.summary);
//!     Ok(())
//! }
//! ```

pub mod backup;
pub mod config;
pub mod error;
pub mod generator;

pub use backup::BackupStore;
pub use config::{BackupNaming, GeneratorConfig, RunMode};
pub use error::{Error, FileFailure, Result};
pub use generator::{FileReport, Generator, Update, UpdateStrategy};

pub use bffgen_blocks::{Marker, Section};
pub use bffgen_content::{DiffResult, DiffStrategy, MergeResult, ThreeWayMerge};
