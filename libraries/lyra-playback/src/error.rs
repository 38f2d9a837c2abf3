//! Error types for the playback core

use thiserror::Error;

/// Player errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Equalizer config queried before any session reached Playing
    #[error("Equalizer config not available before playback has started")]
    NotReady,

    /// Command requires a live playback session
    #[error("No active playback session")]
    NoSession,

    /// Engine rejected or failed a command
    ///
    /// The payload is the engine's own diagnostic. It is opaque and
    /// platform-specific; log it, never parse it.
    #[error("Engine error: {0}")]
    Engine(String),

    /// The player task has shut down
    #[error("Player has shut down")]
    Closed,
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
