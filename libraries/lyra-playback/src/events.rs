//! Engine lifecycle events and caller-facing notifications
//!
//! Engine adapters push [`EngineEvent`]s into the player's event queue; the
//! player task is the only consumer and the only place state is mutated.
//! Callers observe the outcome through the two notification channels.
//!
//! The serde names match the wire protocol (`onStart`, `onCurrentPosition`,
//! ...), so the enum doubles as the codec for transports that carry events
//! as tagged JSON. An unrecognized event name fails deserialization, which
//! is the intended handling of a protocol violation.

use crate::types::PlayerState;
use serde::{Deserialize, Serialize};

/// Lifecycle event pushed by an engine adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum EngineEvent {
    /// Playback started (or resumed); total duration is now known
    #[serde(rename = "onStart")]
    Start {
        /// Total source duration in milliseconds
        #[serde(rename = "durationMillis")]
        duration_millis: u64,
    },

    /// Engine-side position report
    ///
    /// Forwarded to the position channel only while the player is Playing.
    #[serde(rename = "onCurrentPosition")]
    CurrentPosition {
        /// Current position in milliseconds
        milliseconds: u64,
    },

    /// Playback paused
    #[serde(rename = "onPause")]
    Pause,

    /// Playback stopped and the engine resource was released
    #[serde(rename = "onStop")]
    Stop,

    /// The source played to its natural end
    #[serde(rename = "onComplete")]
    Complete,

    /// Engine-reported failure (load failure or runtime fault)
    #[serde(rename = "onError")]
    Error {
        /// Opaque, platform-specific diagnostic; for logging only
        diagnostic: String,
    },
}

/// Item delivered on the state notification channel
///
/// An error item does not terminate the channel; subscribers keep receiving
/// subsequent state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateNotification {
    /// The externally visible state changed
    Changed(PlayerState),

    /// The engine reported an error; state was forced to Stopped
    EngineError {
        /// Opaque diagnostic, not guaranteed parseable
        diagnostic: String,
    },
}
