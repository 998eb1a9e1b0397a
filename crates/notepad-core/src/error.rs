//! Error types for notepad-core

use thiserror::Error;

/// Result type alias using notepad-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in notepad-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Unlock attempted with an empty or whitespace-only secret
    #[error("Key is required.")]
    EmptySecret,

    /// Open or save attempted while the key gate is locked
    #[error("Re-authenticate to continue.")]
    Locked,

    /// Note not found
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    /// Id prefix matched more than one note
    #[error("{0}")]
    AmbiguousNoteId(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error should raise the unlock dialog.
    #[must_use]
    pub const fn prompts_unlock(&self) -> bool {
        matches!(self, Self::Locked)
    }
}
