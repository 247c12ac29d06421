use std::path::PathBuf;

/// Errors that can occur while loading or serializing question files.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload decoded as neither the game-data envelope nor a raw array.
    #[error("Unrecognized format: not a game-data envelope or a raw question array")]
    UnrecognizedFormat,

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
