//! Wire formats for trivia question files.
//!
//! Two interchangeable JSON shapes are supported: the "game data" envelope
//! (object with id, generation timestamp, and a challenge array) and the
//! "raw" flat array of question records. Loading auto-detects the shape and
//! converts either into the unified [`ProfiledQuestion`] record; exporting
//! reconstructs either shape from unified records.
//!
//! [`ProfiledQuestion`]: quizbank_catalog::ProfiledQuestion

pub mod error;
pub mod export;
pub mod gamedata;
pub mod loader;
pub mod raw;

pub use error::FormatError;
pub use export::{to_gamedata, to_raw};
pub use gamedata::{Challenge, GameDataFile};
pub use loader::{LoadedSet, SourceFormat, load_bytes, load_file};
pub use raw::{RawChoice, RawQuestion};
