//! Position poller
//!
//! A repeating sampler that runs only while the player is Playing. Each tick
//! it asks the engine for the current position and publishes it on the
//! position channel. The previous task is always aborted before a new one is
//! armed, so at most one poller exists at any time.

use crate::bus::NotificationBus;
use crate::engine::PlayerEngine;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

pub(crate) struct PositionPoller {
    handle: Option<JoinHandle<()>>,
}

impl PositionPoller {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Arm the poller, cancelling any previous instance first
    pub fn start(
        &mut self,
        engine: Arc<dyn PlayerEngine>,
        bus: NotificationBus,
        interval: Duration,
    ) {
        self.stop();
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;

                // Covers stops that happened without the expected callback
                if !engine.is_playing().await {
                    debug!("engine no longer playing, position poller exiting");
                    break;
                }

                match engine.position_ms().await {
                    Ok(milliseconds) => bus.publish_position(milliseconds),
                    Err(err) => {
                        debug!("position sample failed, position poller exiting: {err}");
                        break;
                    }
                }
            }
        }));
    }

    /// Cancel the poller; safe to call when it is not running
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for PositionPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
