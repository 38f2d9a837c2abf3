//! Notification bus
//!
//! Two independent broadcast channels: state changes and position updates.
//! Any number of subscribers may join at any time; each sees only messages
//! published after it subscribed. Publishing with no subscribers is fine.

use crate::events::StateNotification;
use tokio::sync::broadcast;
use tracing::debug;

#[derive(Clone)]
pub(crate) struct NotificationBus {
    state_tx: broadcast::Sender<StateNotification>,
    position_tx: broadcast::Sender<u64>,
}

impl NotificationBus {
    pub fn new(capacity: usize) -> Self {
        let (state_tx, _) = broadcast::channel(capacity);
        let (position_tx, _) = broadcast::channel(capacity);
        Self {
            state_tx,
            position_tx,
        }
    }

    /// Publish a state notification, ignoring if no subscribers are connected
    pub fn publish_state(&self, notification: StateNotification) {
        if let Ok(count) = self.state_tx.send(notification) {
            debug!("state notification delivered to {count} subscribers");
        }
    }

    /// Publish a position sample in milliseconds
    pub fn publish_position(&self, milliseconds: u64) {
        let _ = self.position_tx.send(milliseconds);
    }

    pub fn subscribe_state(&self) -> broadcast::Receiver<StateNotification> {
        self.state_tx.subscribe()
    }

    pub fn subscribe_position(&self) -> broadcast::Receiver<u64> {
        self.position_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlayerState;

    #[tokio::test]
    async fn subscribers_receive_published_items() {
        let bus = NotificationBus::new(16);
        let mut state_rx = bus.subscribe_state();
        let mut position_rx = bus.subscribe_position();

        bus.publish_state(StateNotification::Changed(PlayerState::Playing));
        bus.publish_position(200);

        assert_eq!(
            state_rx.recv().await.unwrap(),
            StateNotification::Changed(PlayerState::Playing)
        );
        assert_eq!(position_rx.recv().await.unwrap(), 200);
    }

    #[tokio::test]
    async fn error_item_does_not_terminate_channel() {
        let bus = NotificationBus::new(16);
        let mut rx = bus.subscribe_state();

        bus.publish_state(StateNotification::EngineError {
            diagnostic: "codec fault".to_string(),
        });
        bus.publish_state(StateNotification::Changed(PlayerState::Stopped));

        assert!(matches!(
            rx.recv().await.unwrap(),
            StateNotification::EngineError { .. }
        ));
        assert_eq!(
            rx.recv().await.unwrap(),
            StateNotification::Changed(PlayerState::Stopped)
        );
    }

    #[tokio::test]
    async fn late_subscriber_sees_no_history() {
        let bus = NotificationBus::new(16);
        bus.publish_state(StateNotification::Changed(PlayerState::Playing));

        let mut rx = bus.subscribe_state();
        bus.publish_state(StateNotification::Changed(PlayerState::Paused));

        // Only the message published after subscribing arrives
        assert_eq!(
            rx.recv().await.unwrap(),
            StateNotification::Changed(PlayerState::Paused)
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_harmless() {
        let bus = NotificationBus::new(16);
        bus.publish_state(StateNotification::Changed(PlayerState::Playing));
        bus.publish_position(42);
    }
}
