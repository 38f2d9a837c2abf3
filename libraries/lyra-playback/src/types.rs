//! Core types for the playback core

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Externally visible playback state
///
/// Exactly one authoritative value exists at any time, owned by the player
/// task. Every transition is driven by exactly one engine lifecycle event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// No session, or the session was stopped
    #[default]
    Stopped,

    /// Engine is actively rendering audio
    Playing,

    /// Paused mid-session; the session stays alive
    Paused,

    /// The source played to its natural end
    Completed,
}

/// One named equalizer preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EqualizerPreset {
    /// Preset index as reported by the engine
    pub index: i32,

    /// Human-readable preset name
    pub name: String,
}

/// One equalizer frequency band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EqualizerBand {
    /// Band index as reported by the engine
    pub index: i32,

    /// Center frequency in millihertz
    pub center_frequency: i32,

    /// Lower edge of the band in millihertz
    pub lower_frequency: i32,

    /// Upper edge of the band in millihertz
    pub upper_frequency: i32,
}

/// Immutable equalizer snapshot queried from the engine
///
/// Captured when a session first reaches [`PlayerState::Playing`]; the last
/// snapshot persists until the next capture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EqualizerConfig {
    /// Number of presets the engine offers
    #[serde(rename = "numOfPresets")]
    pub num_presets: i32,

    /// Minimum band level in millibels
    #[serde(rename = "minEQLevel")]
    pub min_level: i32,

    /// Maximum band level in millibels
    #[serde(rename = "maxEQLevel")]
    pub max_level: i32,

    /// Ordered preset list
    pub presets: Vec<EqualizerPreset>,

    /// Ordered band list
    pub bands: Vec<EqualizerBand>,
}

/// Configuration for the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Interval between position samples while Playing (default: 200ms)
    pub position_interval: Duration,

    /// Command queue depth (default: 32)
    pub command_capacity: usize,

    /// Notification channel buffer per subscriber (default: 100)
    pub notification_capacity: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            position_interval: Duration::from_millis(200),
            command_capacity: 32,
            notification_capacity: 100,
        }
    }
}
