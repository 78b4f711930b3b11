//! Filesystem layer for bffgen regeneration
//!
//! Provides path normalization, crash-safe writes and format-agnostic
//! configuration loading. Every I/O failure is reported with the path and
//! the operation that failed.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, IoOp, Result};
pub use path::NormalizedPath;
