//! Wire types for the realtime endpoint.
//!
//! The server keys each data section by full conversation id, using
//! slash-style JSON keys (`conversation/count-messages`). Every section is
//! optional; a snapshot with no `data` still carries the scheduling fields.

use std::collections::HashMap;

use engage_common::ConversationId;
use serde::{Deserialize, Serialize};

/// One realtime poll response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeSnapshot {
    /// Server time of this response, epoch seconds.
    pub timestamp: i64,
    /// Server time at which the next poll should occur, epoch seconds.
    #[serde(rename = "nextFetch")]
    pub next_fetch: i64,
    #[serde(default)]
    pub data: Option<RealtimeData>,
}

impl RealtimeSnapshot {
    /// Seconds until the server wants the next poll. Non-positive means the
    /// server does not want another poll right now.
    pub fn next_fetch_offset(&self) -> i64 {
        self.next_fetch - self.timestamp
    }
}

/// Per-conversation counters carried in a snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RealtimeData {
    #[serde(rename = "conversation/count-messages", default)]
    count_messages: HashMap<String, Vec<MessageCounts>>,
    #[serde(rename = "conversation/typing-v2-count", default)]
    typing_counts: HashMap<String, Vec<HashMap<String, i64>>>,
    #[serde(rename = "online/users-count", default)]
    viewing_users: HashMap<String, Vec<ViewingUsersCount>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageCounts {
    #[serde(default)]
    pub comments: i64,
    #[serde(default)]
    pub replies: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewingUsersCount {
    #[serde(default)]
    pub count: i64,
}

impl RealtimeData {
    pub fn comment_count(&self, conversation: &ConversationId) -> Option<i64> {
        self.message_counts(conversation).map(|c| c.comments)
    }

    pub fn reply_count(&self, conversation: &ConversationId) -> Option<i64> {
        self.message_counts(conversation).map(|c| c.replies)
    }

    /// Comments plus replies for a conversation.
    pub fn total_count(&self, conversation: &ConversationId) -> Option<i64> {
        self.message_counts(conversation)
            .map(|c| c.comments + c.replies)
    }

    pub fn typing_count(&self, conversation: &ConversationId) -> Option<i64> {
        self.typing_counts
            .get(conversation.as_str())?
            .first()?
            .get("count")
            .copied()
    }

    pub fn viewing_users_count(&self, conversation: &ConversationId) -> Option<i64> {
        self.viewing_users
            .get(conversation.as_str())?
            .first()
            .map(|v| v.count)
    }

    fn message_counts(&self, conversation: &ConversationId) -> Option<&MessageCounts> {
        self.count_messages.get(conversation.as_str())?.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_decodes_scheduling_fields() {
        let json = r#"{"timestamp": 1700000000, "nextFetch": 1700000010}"#;
        let snapshot: RealtimeSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.timestamp, 1_700_000_000);
        assert_eq!(snapshot.next_fetch, 1_700_000_010);
        assert_eq!(snapshot.next_fetch_offset(), 10);
        assert!(snapshot.data.is_none());
    }

    #[test]
    fn offset_can_be_non_positive() {
        let snapshot = RealtimeSnapshot {
            timestamp: 100,
            next_fetch: 100,
            data: None,
        };
        assert_eq!(snapshot.next_fetch_offset(), 0);

        let snapshot = RealtimeSnapshot {
            timestamp: 100,
            next_fetch: 90,
            data: None,
        };
        assert_eq!(snapshot.next_fetch_offset(), -10);
    }

    #[test]
    fn slash_keyed_data_sections_decode() {
        let json = r#"{
            "timestamp": 1700000000,
            "nextFetch": 1700000005,
            "data": {
                "conversation/count-messages": {
                    "sp_post-1": [{"comments": 12, "replies": 3}]
                },
                "conversation/typing-v2-count": {
                    "sp_post-1": [{"count": 2}]
                },
                "online/users-count": {
                    "sp_post-1": [{"count": 41}]
                }
            }
        }"#;
        let snapshot: RealtimeSnapshot = serde_json::from_str(json).unwrap();
        let data = snapshot.data.unwrap();
        let id = ConversationId::from("sp_post-1");

        assert_eq!(data.comment_count(&id), Some(12));
        assert_eq!(data.reply_count(&id), Some(3));
        assert_eq!(data.total_count(&id), Some(15));
        assert_eq!(data.typing_count(&id), Some(2));
        assert_eq!(data.viewing_users_count(&id), Some(41));
    }

    #[test]
    fn missing_conversation_yields_none() {
        let snapshot: RealtimeSnapshot = serde_json::from_str(
            r#"{"timestamp": 1, "nextFetch": 2, "data": {}}"#,
        )
        .unwrap();
        let data = snapshot.data.unwrap();
        let id = ConversationId::from("nowhere");

        assert_eq!(data.total_count(&id), None);
        assert_eq!(data.typing_count(&id), None);
        assert_eq!(data.viewing_users_count(&id), None);
    }
}
