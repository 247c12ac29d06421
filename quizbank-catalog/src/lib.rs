//! Trivia data model types, category taxonomy, and content fingerprinting.
//!
//! This crate defines the unified question record shared by the file-loading
//! and database paths, plus the alias-based category normalizer, without any
//! database dependencies. Consumers can use these types directly for
//! serialization, display, or passing to `quizbank-db` for persistence.

pub mod fingerprint;
pub mod taxonomy;
pub mod types;

pub use fingerprint::fingerprint;
pub use taxonomy::{Taxonomy, UNKNOWN_ICON};
pub use types::{Choice, Difficulty, ProfiledQuestion};
