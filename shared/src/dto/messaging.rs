//! # Messaging Data Transfer Objects
//!
//! Direct messages between marketplace users, plus the grouping the inbox
//! view uses to show one row per counterpart.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Id;

/// Message for direct messaging
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: Id,
    pub sender_id: Id,
    #[serde(default)]
    pub sender_name: Option<String>,
    pub recipient_id: Id,
    #[serde(default)]
    pub recipient_name: Option<String>,
    #[serde(alias = "content", alias = "text")]
    pub body: String,
    pub sent_at: String,
    #[serde(default)]
    pub read: bool,
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Chronological order of two `sent_at` values.
///
/// Parsed instants compare by time, so offsets other than `Z` sort
/// correctly. Unparseable values sort before parseable ones and compare
/// as text among themselves.
pub fn compare_timestamps(a: &str, b: &str) -> Ordering {
    match (parse_timestamp(a), parse_timestamp(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

/// Send a direct message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendMessageRequest {
    pub recipient_id: Id,
    pub body: String,
}

/// One inbox row: the latest message exchanged with a counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSummary {
    pub counterpart_id: Id,
    pub counterpart_name: String,
    pub last_body: String,
    pub last_sent_at: String,
    pub unread: usize,
}

/// Group a flat message list into conversations for user `me`.
///
/// Conversations are ordered by their latest message, newest first.
/// `sent_at` values are compared with [`compare_timestamps`].
/// Unread counts only messages sent *to* `me`.
pub fn group_conversations(messages: &[Message], me: &Id) -> Vec<ConversationSummary> {
    let mut by_counterpart: HashMap<&Id, ConversationSummary> = HashMap::new();

    for message in messages {
        let incoming = &message.recipient_id == me;
        let (counterpart_id, counterpart_name) = if incoming {
            (&message.sender_id, message.sender_name.as_deref())
        } else {
            (&message.recipient_id, message.recipient_name.as_deref())
        };

        let entry = by_counterpart
            .entry(counterpart_id)
            .or_insert_with(|| ConversationSummary {
                counterpart_id: counterpart_id.clone(),
                counterpart_name: String::new(),
                last_body: String::new(),
                last_sent_at: String::new(),
                unread: 0,
            });

        if entry.counterpart_name.is_empty() {
            if let Some(name) = counterpart_name.filter(|n| !n.trim().is_empty()) {
                entry.counterpart_name = name.to_string();
            }
        }
        if compare_timestamps(&message.sent_at, &entry.last_sent_at) != Ordering::Less {
            entry.last_sent_at = message.sent_at.clone();
            entry.last_body = message.body.clone();
        }
        if incoming && !message.read {
            entry.unread += 1;
        }
    }

    let mut conversations: Vec<ConversationSummary> = by_counterpart
        .into_values()
        .map(|mut c| {
            if c.counterpart_name.is_empty() {
                c.counterpart_name = format!("User {}", c.counterpart_id);
            }
            c
        })
        .collect();
    conversations.sort_by(|a, b| {
        compare_timestamps(&b.last_sent_at, &a.last_sent_at)
            .then_with(|| a.counterpart_id.cmp(&b.counterpart_id))
    });
    conversations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: i64, from: i64, to: i64, body: &str, at: &str, read: bool) -> Message {
        Message {
            id: Id::from(id),
            sender_id: Id::from(from),
            sender_name: Some(format!("user-{from}")),
            recipient_id: Id::from(to),
            recipient_name: None,
            body: body.to_string(),
            sent_at: at.to_string(),
            read,
        }
    }

    #[test]
    fn test_group_conversations() {
        let me = Id::from(1);
        let messages = vec![
            message(1, 2, 1, "Maize ready?", "2026-05-01T08:00:00Z", true),
            message(2, 1, 2, "Yes, 40 bags", "2026-05-01T09:00:00Z", true),
            message(3, 3, 1, "Price per kg?", "2026-05-02T10:00:00Z", false),
            message(4, 3, 1, "Hello?", "2026-05-02T11:00:00Z", false),
        ];

        let conversations = group_conversations(&messages, &me);
        assert_eq!(conversations.len(), 2);

        assert_eq!(conversations[0].counterpart_id, Id::from(3));
        assert_eq!(conversations[0].last_body, "Hello?");
        assert_eq!(conversations[0].unread, 2);

        assert_eq!(conversations[1].counterpart_id, Id::from(2));
        assert_eq!(conversations[1].counterpart_name, "user-2");
        assert_eq!(conversations[1].last_body, "Yes, 40 bags");
        assert_eq!(conversations[1].unread, 0);
    }

    #[test]
    fn test_outgoing_only_conversation_gets_fallback_name() {
        let me = Id::from(1);
        let messages = vec![message(1, 1, 8, "Hi", "2026-05-01T08:00:00Z", false)];
        let conversations = group_conversations(&messages, &me);
        assert_eq!(conversations[0].counterpart_name, "User 8");
        assert_eq!(conversations[0].unread, 0);
    }

    #[test]
    fn test_timestamps_compare_across_offsets() {
        // 10:30+03:00 is 07:30Z, earlier than 08:00Z
        assert_eq!(
            compare_timestamps("2026-05-01T10:30:00+03:00", "2026-05-01T08:00:00Z"),
            Ordering::Less
        );
        assert_eq!(compare_timestamps("garbage", "2026-05-01T08:00:00Z"), Ordering::Less);
        assert_eq!(compare_timestamps("a", "b"), Ordering::Less);
    }

    #[test]
    fn test_latest_message_uses_instant_not_text() {
        let me = Id::from(1);
        let messages = vec![
            message(1, 2, 1, "earlier", "2026-05-01T10:30:00+03:00", true),
            message(2, 2, 1, "later", "2026-05-01T08:00:00Z", true),
        ];
        let conversations = group_conversations(&messages, &me);
        assert_eq!(conversations[0].last_body, "later");
    }

    #[test]
    fn test_message_accepts_content_alias() {
        let message: Message = serde_json::from_str(
            r#"{"id": 1, "sender_id": 2, "recipient_id": 3, "content": "hi", "sent_at": "2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(message.body, "hi");
        assert!(!message.read);
    }
}
