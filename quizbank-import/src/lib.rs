//! Import question files into the deduplicated store.
//!
//! This crate owns the ETL loop: loading files, resolving categories,
//! inserting with duplicate detection, and accumulating statistics across a
//! batch, with a dry-run mode that counts would-be outcomes without writing.

pub mod import;
pub mod progress;

pub use import::{FileOutcome, ImportError, ImportStats, import_files, import_set};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
