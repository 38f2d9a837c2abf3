//! Lyra Player - Playback Core
//!
//! Remote-controllable audio playback for Lyra Player.
//!
//! This crate provides:
//! - Imperative playback commands (play, pause, stop, seek, mute)
//! - A lifecycle state machine (Stopped/Playing/Paused/Completed)
//! - Periodic position polling while playing
//! - Broadcast notification channels for state changes and positions
//! - Equalizer configuration snapshots
//!
//! # Architecture
//!
//! `lyra-playback` is completely engine-agnostic: the concrete decoder and
//! renderer sit behind the [`PlayerEngine`] trait and may run anywhere
//! (another thread, a platform media service, a remote process). The
//! boundary is deliberately asymmetric:
//!
//! - Commands are fire-and-forget: a call completes once the engine has
//!   *accepted* the request, not once the effect has happened.
//! - Truth about what actually happened arrives as [`EngineEvent`]s pushed
//!   into the player's event queue, usually from the engine's own callback
//!   context, and is republished on the notification channels.
//!
//! One spawned task owns all mutable state (current [`PlayerState`], the
//! playback session, the position poller), so concurrent commands and
//! engine callbacks are serialized rather than interleaved.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use async_trait::async_trait;
//! use lyra_playback::{
//!     engine_event_channel, EngineEvent, EqualizerConfig, Player, PlayerConfig, PlayerEngine,
//!     Result,
//! };
//!
//! /// An engine that accepts everything and renders nothing.
//! struct SilentEngine;
//!
//! #[async_trait]
//! impl PlayerEngine for SilentEngine {
//!     async fn load(&self, _url: &str, _is_local: bool) -> Result<()> {
//!         Ok(())
//!     }
//!     async fn resume(&self) -> Result<()> {
//!         Ok(())
//!     }
//!     async fn pause(&self) -> Result<()> {
//!         Ok(())
//!     }
//!     async fn stop(&self) -> Result<()> {
//!         Ok(())
//!     }
//!     async fn seek(&self, _position: Duration) -> Result<()> {
//!         Ok(())
//!     }
//!     async fn set_muted(&self, _muted: bool) -> Result<()> {
//!         Ok(())
//!     }
//!     async fn equalizer_config(&self) -> Result<EqualizerConfig> {
//!         Ok(EqualizerConfig::default())
//!     }
//!     async fn is_playing(&self) -> bool {
//!         false
//!     }
//!     async fn position_ms(&self) -> Result<u64> {
//!         Ok(0)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let (events_tx, events_rx) = engine_event_channel();
//!     let player = Player::spawn(Arc::new(SilentEngine), events_rx, PlayerConfig::default());
//!
//!     let mut states = player.subscribe_state_changes();
//!     player.play("https://example.com/a.mp3", false).await?;
//!
//!     // A real engine adapter pushes this from its callback context
//!     events_tx
//!         .send(EngineEvent::Start {
//!             duration_millis: 5000,
//!         })
//!         .ok();
//!
//!     let notification = states.recv().await;
//!     println!("observed: {notification:?}");
//!     Ok(())
//! }
//! ```

mod bus;
mod engine;
mod error;
mod events;
mod machine;
mod player;
mod poller;
pub mod types;

// Public exports
pub use engine::{engine_event_channel, EngineEventReceiver, EngineEventSender, PlayerEngine};
pub use error::{PlayerError, Result};
pub use events::{EngineEvent, StateNotification};
pub use player::Player;
pub use types::{EqualizerBand, EqualizerConfig, EqualizerPreset, PlayerConfig, PlayerState};
