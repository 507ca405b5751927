use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::ConversationId;
use crate::types::ThemeStyle;

/// Lifecycle events host applications can observe without holding the
/// individual services.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SdkEvent {
    RealtimeStarted(ConversationId),
    RealtimeStopped(ConversationId),
    ThemeChanged(ThemeStyle),
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<SdkEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SdkEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: SdkEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(SdkEvent::Shutdown);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, SdkEvent::Shutdown));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(SdkEvent::ThemeChanged(ThemeStyle::Dark));

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, SdkEvent::ThemeChanged(ThemeStyle::Dark)));
        assert!(matches!(e2, SdkEvent::ThemeChanged(ThemeStyle::Dark)));
    }

    #[tokio::test]
    async fn realtime_lifecycle_events() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let id = ConversationId::from("post-1");

        bus.publish(SdkEvent::RealtimeStarted(id.clone()));
        bus.publish(SdkEvent::RealtimeStopped(id.clone()));

        let e1 = rx.recv().await.unwrap();
        assert!(matches!(e1, SdkEvent::RealtimeStarted(ref c) if *c == id));

        let e2 = rx.recv().await.unwrap();
        assert!(matches!(e2, SdkEvent::RealtimeStopped(ref c) if *c == id));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        let count = bus.publish(SdkEvent::Shutdown);
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();

        let count = bus.publish(SdkEvent::Shutdown);
        assert_eq!(count, 2);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        let event: SdkEvent = serde_json::from_str(json).unwrap();
        assert!(matches!(event, SdkEvent::Unknown));
    }
}
