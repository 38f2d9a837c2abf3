//! Player - command routing and session orchestration
//!
//! A [`Player`] is a cheap cloneable handle to one player task. The task is
//! the single serialization point for all mutable state: it consumes caller
//! commands and engine lifecycle events from two queues, drives the state
//! machine, manages the playback session and position poller, and publishes
//! notifications. Engine callbacks and poller ticks never interleave a
//! read-modify-write of player state.
//!
//! Commands complete once the engine has *accepted* them. Observing what
//! actually happened requires subscribing to the notification channels.

use crate::bus::NotificationBus;
use crate::engine::{EngineEventReceiver, PlayerEngine};
use crate::error::{PlayerError, Result};
use crate::events::{EngineEvent, StateNotification};
use crate::machine::StateMachine;
use crate::poller::PositionPoller;
use crate::types::{EqualizerConfig, PlayerConfig, PlayerState};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, oneshot, RwLock};
use tracing::{debug, warn};

type Reply<T> = oneshot::Sender<Result<T>>;

/// Commands sent to the player task
enum Command {
    Play {
        url: String,
        is_local: bool,
        reply: Reply<()>,
    },
    Pause {
        reply: Reply<()>,
    },
    Stop {
        reply: Reply<()>,
    },
    Seek {
        position: Duration,
        reply: Reply<()>,
    },
    SetMuted {
        muted: bool,
        reply: Reply<()>,
    },
    EqualizerConfig {
        reply: Reply<EqualizerConfig>,
    },
}

/// One loaded source, from `play()` until stop/complete/error
struct PlaybackSession {
    url: String,
    equalizer_captured: bool,
}

/// Snapshot written only by the player task, readable by any handle
struct Shared {
    state: RwLock<PlayerState>,
    duration_ms: AtomicU64,
}

/// Handle to a running player
///
/// Clones share the same player task. Dropping every handle shuts the task
/// down once the engine event queue closes as well.
#[derive(Clone)]
pub struct Player {
    commands: mpsc::Sender<Command>,
    shared: Arc<Shared>,
    bus: NotificationBus,
}

impl Player {
    /// Spawn a player task driving the given engine
    ///
    /// `events` is the receiving half of the queue created with
    /// [`crate::engine_event_channel`]; the engine adapter holds the sender.
    pub fn spawn(
        engine: Arc<dyn PlayerEngine>,
        events: EngineEventReceiver,
        config: PlayerConfig,
    ) -> Self {
        let (commands_tx, commands_rx) = mpsc::channel(config.command_capacity);
        let shared = Arc::new(Shared {
            state: RwLock::new(PlayerState::Stopped),
            duration_ms: AtomicU64::new(0),
        });
        let bus = NotificationBus::new(config.notification_capacity);

        let task = PlayerTask {
            engine,
            events,
            commands: commands_rx,
            machine: StateMachine::new(),
            session: None,
            equalizer: None,
            poller: PositionPoller::new(),
            bus: bus.clone(),
            shared: shared.clone(),
            position_interval: config.position_interval,
        };
        tokio::spawn(task.run());

        Self {
            commands: commands_tx,
            shared,
            bus,
        }
    }

    // ===== Commands =====

    /// Load a source and request playback, or resume the current session
    ///
    /// Completes on acceptance; it is NOT synchronized with the
    /// `Playing` notification. Subscribe to observe the actual start.
    pub async fn play(&self, url: impl Into<String>, is_local: bool) -> Result<()> {
        let url = url.into();
        self.send(|reply| Command::Play {
            url,
            is_local,
            reply,
        })
        .await
    }

    /// Request pause
    ///
    /// Fails with [`PlayerError::NoSession`] if no session is live; callers
    /// must have observed Playing or Paused since the last stop.
    pub async fn pause(&self) -> Result<()> {
        self.send(|reply| Command::Pause { reply }).await
    }

    /// Request stop and resource release; idempotent if already stopped
    pub async fn stop(&self) -> Result<()> {
        self.send(|reply| Command::Stop { reply }).await
    }

    /// Request a position jump; requires a live session
    pub async fn seek(&self, position: Duration) -> Result<()> {
        self.send(|reply| Command::Seek { position, reply }).await
    }

    /// Mute or unmute the output; legal in any state
    pub async fn set_muted(&self, muted: bool) -> Result<()> {
        self.send(|reply| Command::SetMuted { muted, reply }).await
    }

    /// Last captured equalizer snapshot
    ///
    /// Fails with [`PlayerError::NotReady`] until some session has reached
    /// Playing.
    pub async fn equalizer_config(&self) -> Result<EqualizerConfig> {
        self.send(|reply| Command::EqualizerConfig { reply }).await
    }

    // ===== Read surface =====

    /// Current externally visible state
    pub async fn state(&self) -> PlayerState {
        *self.shared.state.read().await
    }

    /// Total duration of the current source in milliseconds, 0 until known
    pub fn duration_ms(&self) -> u64 {
        self.shared.duration_ms.load(Ordering::Relaxed)
    }

    // ===== Subscriptions =====

    /// Subscribe to state change notifications (no replay of history)
    pub fn subscribe_state_changes(&self) -> broadcast::Receiver<StateNotification> {
        self.bus.subscribe_state()
    }

    /// Subscribe to position updates in milliseconds (no replay of history)
    pub fn subscribe_position_updates(&self) -> broadcast::Receiver<u64> {
        self.bus.subscribe_position()
    }

    async fn send<T>(&self, make: impl FnOnce(Reply<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(make(reply_tx))
            .await
            .map_err(|_| PlayerError::Closed)?;
        reply_rx.await.map_err(|_| PlayerError::Closed)?
    }
}

/// The player task; owns all mutable playback state
struct PlayerTask {
    engine: Arc<dyn PlayerEngine>,
    events: EngineEventReceiver,
    commands: mpsc::Receiver<Command>,
    machine: StateMachine,
    session: Option<PlaybackSession>,
    equalizer: Option<EqualizerConfig>,
    poller: PositionPoller,
    bus: NotificationBus,
    shared: Arc<Shared>,
    position_interval: Duration,
}

impl PlayerTask {
    async fn run(mut self) {
        debug!("player task started");
        loop {
            tokio::select! {
                Some(command) = self.commands.recv() => self.handle_command(command).await,
                Some(event) = self.events.recv() => self.handle_event(event).await,
                else => break,
            }
        }
        self.poller.stop();
        debug!("player task stopped");
    }

    async fn handle_command(&mut self, command: Command) {
        match command {
            Command::Play {
                url,
                is_local,
                reply,
            } => {
                let _ = reply.send(self.play(url, is_local).await);
            }
            Command::Pause { reply } => {
                let _ = reply.send(self.pause().await);
            }
            Command::Stop { reply } => {
                let _ = reply.send(self.stop().await);
            }
            Command::Seek { position, reply } => {
                let _ = reply.send(self.seek(position).await);
            }
            Command::SetMuted { muted, reply } => {
                let _ = reply.send(self.engine.set_muted(muted).await);
            }
            Command::EqualizerConfig { reply } => {
                let _ = reply.send(self.equalizer.clone().ok_or(PlayerError::NotReady));
            }
        }
    }

    async fn play(&mut self, url: String, is_local: bool) -> Result<()> {
        if self.session.is_some() {
            // Play with no URL change means resume
            debug!("session active, requesting resume");
            return self.engine.resume().await;
        }

        debug!(%url, is_local, "loading new source");
        self.engine.load(&url, is_local).await?;
        self.shared.duration_ms.store(0, Ordering::Relaxed);
        self.session = Some(PlaybackSession {
            url,
            equalizer_captured: false,
        });
        Ok(())
    }

    async fn pause(&mut self) -> Result<()> {
        if self.session.is_none() {
            return Err(PlayerError::NoSession);
        }
        self.engine.pause().await
    }

    async fn stop(&mut self) -> Result<()> {
        // The session is released at acceptance time, so a second stop
        // finds nothing and never reaches the engine.
        match self.session.take() {
            Some(session) => {
                debug!(url = %session.url, "stopping session");
                self.engine.stop().await
            }
            None => Ok(()),
        }
    }

    async fn seek(&mut self, position: Duration) -> Result<()> {
        if self.session.is_none() {
            return Err(PlayerError::NoSession);
        }
        self.engine.seek(position).await
    }

    async fn handle_event(&mut self, event: EngineEvent) {
        // Engine-side position reports pass straight through, gated on the
        // current state so no position is ever published outside Playing.
        if let EngineEvent::CurrentPosition { milliseconds } = event {
            if self.machine.current() == PlayerState::Playing {
                self.bus.publish_position(milliseconds);
            }
            return;
        }

        if let EngineEvent::Error { ref diagnostic } = event {
            // Diagnostics are opaque; surface them, never interpret them.
            warn!(%diagnostic, "engine reported error");
            self.bus.publish_state(StateNotification::EngineError {
                diagnostic: diagnostic.clone(),
            });
        }

        if let EngineEvent::Start { duration_millis } = event {
            self.shared
                .duration_ms
                .store(duration_millis, Ordering::Relaxed);
            self.capture_equalizer().await;
        }

        let Some(next) = self.machine.apply(&event) else {
            // An error that arrives while already stopped still releases
            // whatever session is left (e.g. a load that never started).
            if matches!(event, EngineEvent::Error { .. }) {
                self.release_session();
            }
            return;
        };

        match next {
            PlayerState::Playing => {
                self.poller.start(
                    self.engine.clone(),
                    self.bus.clone(),
                    self.position_interval,
                );
            }
            PlayerState::Paused | PlayerState::Stopped | PlayerState::Completed => {
                self.poller.stop();
            }
        }

        if matches!(
            event,
            EngineEvent::Stop | EngineEvent::Complete | EngineEvent::Error { .. }
        ) {
            self.release_session();
        }

        *self.shared.state.write().await = next;
        self.bus.publish_state(StateNotification::Changed(next));
        debug!(state = ?next, "player state changed");
    }

    /// Capture the equalizer snapshot on a session's first start
    async fn capture_equalizer(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.equalizer_captured {
            return;
        }
        match self.engine.equalizer_config().await {
            Ok(config) => {
                session.equalizer_captured = true;
                self.equalizer = Some(config);
            }
            Err(err) => warn!("failed to capture equalizer config: {err}"),
        }
    }

    fn release_session(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(url = %session.url, "session released");
        }
    }
}
