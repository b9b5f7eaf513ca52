//! Error types for the Jornada engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the strict engine APIs.
///
/// Gameplay shortfalls (no medkit, not enough credits) are not errors; they
/// come back as ordinary outcome values.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Reading or writing the save file failed.
    #[error("save file I/O: {0}")]
    Io(#[from] std::io::Error),

    /// The save file is not valid JSON for any known schema.
    #[error("malformed save file: {0}")]
    Json(#[from] serde_json::Error),

    /// The save file declares a schema version newer than this build.
    #[error("unsupported save version {found} (newest known: {supported})")]
    UnsupportedVersion {
        /// Version found in the file.
        found: u32,
        /// Newest version this build understands.
        supported: u32,
    },

    /// A role name did not match any role definition.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// An item id did not match any item definition.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// A roster index was out of bounds.
    #[error("no character at position {0}")]
    NoSuchCharacter(usize),

    /// A character name was empty after trimming.
    #[error("character name cannot be empty")]
    EmptyName,
}
