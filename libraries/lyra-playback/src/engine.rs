//! Engine adapter seam
//!
//! The concrete decoding/rendering engine lives behind [`PlayerEngine`].
//! Commands go in through the trait; lifecycle truth comes back out through
//! the event queue created by [`engine_event_channel`]. Adapters must never
//! touch player state directly — pushing events is their only side channel.

use crate::error::Result;
use crate::events::EngineEvent;
use crate::types::EqualizerConfig;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::mpsc;

/// Sending half of the engine event queue, held by the engine adapter
pub type EngineEventSender = mpsc::UnboundedSender<EngineEvent>;

/// Receiving half of the engine event queue, consumed by the player task
pub type EngineEventReceiver = mpsc::UnboundedReceiver<EngineEvent>;

/// Create the event queue connecting an engine adapter to a player
pub fn engine_event_channel() -> (EngineEventSender, EngineEventReceiver) {
    mpsc::unbounded_channel()
}

/// One native playback resource
///
/// All operations complete on *acceptance*: a returned `Ok(())` means the
/// engine took the request, not that the requested effect has happened.
/// Actual outcomes arrive as [`EngineEvent`]s, typically from the engine's
/// own callback thread.
#[async_trait]
pub trait PlayerEngine: Send + Sync {
    /// Bind a new source and request playback
    ///
    /// Success is signalled later by [`EngineEvent::Start`]; an unreachable
    /// or invalid source is signalled by [`EngineEvent::Error`].
    async fn load(&self, url: &str, is_local: bool) -> Result<()>;

    /// Resume the currently loaded source
    async fn resume(&self) -> Result<()>;

    /// Request pause; a no-op if not currently playing
    async fn pause(&self) -> Result<()>;

    /// Request stop and release of the native resource
    async fn stop(&self) -> Result<()>;

    /// Request a jump to the given position
    async fn seek(&self, position: Duration) -> Result<()>;

    /// Mute or unmute the output; legal in any state
    async fn set_muted(&self, muted: bool) -> Result<()>;

    /// Query the equalizer snapshot for the current session
    async fn equalizer_config(&self) -> Result<EqualizerConfig>;

    /// Whether the engine is actively rendering right now
    async fn is_playing(&self) -> bool;

    /// Sample the current play position in milliseconds
    async fn position_ms(&self) -> Result<u64>;
}
