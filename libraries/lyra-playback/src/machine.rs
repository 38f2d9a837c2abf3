//! Playback state machine
//!
//! The authoritative mapping from engine lifecycle events to the externally
//! visible [`PlayerState`]. Pure and synchronous; the player task owns the
//! single instance and drives all side effects from the transitions it
//! reports.
//!
//! Transition table:
//!
//! | Current          | Event    | Next      |
//! |------------------|----------|-----------|
//! | any              | Start    | Playing   |
//! | Playing          | Pause    | Paused    |
//! | Playing/Paused   | Stop     | Stopped   |
//! | Playing          | Complete | Completed |
//! | any              | Error    | Stopped   |
//!
//! Duplicate events (a second Stop while already stopped, a second Start
//! while already playing) are deduplicated: `apply` reports a transition
//! only when the state actually changes. Events outside the table are
//! ignored with a warning.

use crate::events::EngineEvent;
use crate::types::PlayerState;
use tracing::warn;

pub(crate) struct StateMachine {
    current: PlayerState,
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            current: PlayerState::Stopped,
        }
    }

    pub fn current(&self) -> PlayerState {
        self.current
    }

    /// Apply one engine event; returns the new state only on a genuine
    /// transition.
    pub fn apply(&mut self, event: &EngineEvent) -> Option<PlayerState> {
        use PlayerState::{Completed, Paused, Playing, Stopped};

        let next = match (self.current, event) {
            // Position reports are not lifecycle transitions
            (_, EngineEvent::CurrentPosition { .. }) => return None,

            (_, EngineEvent::Start { .. }) => Playing,
            (Playing, EngineEvent::Pause) => Paused,
            // Duplicate pause
            (Paused, EngineEvent::Pause) => return None,
            (Playing | Paused, EngineEvent::Stop) => Stopped,
            // Idempotent stop, or a stop that raced a completion
            (Stopped | Completed, EngineEvent::Stop) => return None,
            (Playing, EngineEvent::Complete) => Completed,
            (_, EngineEvent::Error { .. }) => Stopped,
            (state, event) => {
                warn!(?state, ?event, "ignoring engine event with no transition");
                return None;
            }
        };

        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }
}
