//! Format detection and file loading.

use std::path::Path;

use quizbank_catalog::ProfiledQuestion;

use crate::error::FormatError;
use crate::gamedata::GameDataFile;
use crate::raw::RawQuestion;

/// Which input shape a payload decoded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    GameData,
    Raw,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GameData => "gameData",
            Self::Raw => "raw",
        }
    }
}

/// A decoded input file, already converted to unified records.
#[derive(Debug, Clone)]
pub struct LoadedSet {
    pub questions: Vec<ProfiledQuestion>,
    pub format: SourceFormat,
    /// Envelope generation timestamp; only the game-data shape carries one.
    pub generated: Option<i64>,
    pub byte_len: usize,
}

/// Decode a byte buffer, auto-detecting the shape.
///
/// The game-data envelope is tried first, then the raw array. A payload
/// matching neither is an [`FormatError::UnrecognizedFormat`]. Pure
/// transformation, no side effects.
pub fn load_bytes(bytes: &[u8]) -> Result<LoadedSet, FormatError> {
    if let Ok(envelope) = serde_json::from_slice::<GameDataFile>(bytes) {
        return Ok(LoadedSet {
            questions: envelope.challenges.iter().map(|c| c.to_profiled()).collect(),
            format: SourceFormat::GameData,
            generated: Some(envelope.generated),
            byte_len: bytes.len(),
        });
    }

    if let Ok(records) = serde_json::from_slice::<Vec<RawQuestion>>(bytes) {
        return Ok(LoadedSet {
            questions: records.iter().map(|r| r.to_profiled()).collect(),
            format: SourceFormat::Raw,
            generated: None,
            byte_len: bytes.len(),
        });
    }

    Err(FormatError::UnrecognizedFormat)
}

/// Load and decode a question file from disk.
pub fn load_file(path: &Path) -> Result<LoadedSet, FormatError> {
    if !path.exists() {
        return Err(FormatError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path)?;
    load_bytes(&bytes)
}
