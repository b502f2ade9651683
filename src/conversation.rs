//! Conversation state for the assistant screen
//!
//! A `Conversation` is an append-only log of messages plus the counter that
//! keeps their ids unique. Submitting a draft appends exactly two messages:
//! the user's text followed by the canned assistant reply. Nothing is ever
//! edited or removed, and nothing survives the session.

use chrono::{DateTime, Utc};

/// Unique identifier for a message within one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(pub usize);

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Assistant,
}

/// One committed chat message. Immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub origin: Origin,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// The append-only message log
pub struct Conversation {
    messages: Vec<Message>,
    next_id: usize,
    /// Canned assistant reply, injected from configuration
    reply: String,
}

impl Conversation {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            next_id: 0,
            reply: reply.into(),
        }
    }

    fn next_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Submit a draft.
    ///
    /// A draft that is blank after trimming is a no-op and returns `None` -
    /// the caller must leave its draft buffer untouched in that case. A
    /// non-blank draft appends the user message (untrimmed, exactly as
    /// typed) followed by the assistant reply, and returns both ids; the
    /// caller then clears its draft buffer.
    pub fn submit(&mut self, draft: &str) -> Option<(MessageId, MessageId)> {
        if draft.trim().is_empty() {
            return None;
        }

        let user_id = self.next_id();
        self.messages.push(Message {
            id: user_id,
            origin: Origin::User,
            text: draft.to_string(),
            timestamp: Utc::now(),
        });

        let reply_id = self.next_id();
        self.messages.push(Message {
            id: reply_id,
            origin: Origin::Assistant,
            text: self.reply.clone(),
            timestamp: Utc::now(),
        });

        Some((user_id, reply_id))
    }

    /// All messages in insertion order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const REPLY: &str = "This is a sample output from the computer.";

    fn conversation() -> Conversation {
        Conversation::new(REPLY)
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut chat = conversation();
        assert_eq!(chat.submit(""), None);
        assert_eq!(chat.submit("   "), None);
        assert_eq!(chat.submit("\t\n"), None);
        assert!(chat.is_empty());
    }

    #[test]
    fn test_submit_appends_user_then_reply() {
        let mut chat = conversation();
        let (user_id, reply_id) = chat.submit("Hello").unwrap();

        let messages = chat.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].id, user_id);
        assert_eq!(messages[0].origin, Origin::User);
        assert_eq!(messages[0].text, "Hello");
        assert_eq!(messages[1].id, reply_id);
        assert_eq!(messages[1].origin, Origin::Assistant);
        assert_eq!(messages[1].text, REPLY);
    }

    #[test]
    fn test_submit_preserves_surrounding_whitespace() {
        let mut chat = conversation();
        chat.submit("  padded  ").unwrap();
        // The committed text is the draft exactly as typed
        assert_eq!(chat.messages()[0].text, "  padded  ");
    }

    #[test]
    fn test_repeated_submits_grow_monotonically() {
        let mut chat = conversation();
        chat.submit("same").unwrap();
        chat.submit("same").unwrap();
        // Identical drafts are not deduplicated
        assert_eq!(chat.messages().len(), 4);
    }

    #[test]
    fn test_ids_are_pairwise_distinct() {
        let mut chat = conversation();
        for i in 0..50 {
            chat.submit(&format!("message {i}")).unwrap();
        }
        let mut ids: Vec<_> = chat.messages().iter().map(|m| m.id).collect();
        let total = ids.len();
        ids.sort_by_key(|id| id.0);
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_prior_messages_are_never_altered() {
        let mut chat = conversation();
        chat.submit("first").unwrap();
        let before: Vec<Message> = chat.messages().to_vec();

        chat.submit("second").unwrap();
        chat.submit("   ");

        assert_eq!(&chat.messages()[..2], &before[..]);
    }

    #[test]
    fn test_submit_scenario() {
        let mut chat = conversation();

        chat.submit("Hello").unwrap();
        assert_eq!(chat.messages().len(), 2);

        assert_eq!(chat.submit(""), None);
        assert_eq!(chat.messages().len(), 2);

        assert_eq!(chat.submit("  "), None);
        assert_eq!(chat.messages().len(), 2);

        chat.submit("Hi").unwrap();
        let messages = chat.messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[2].origin, Origin::User);
        assert_eq!(messages[2].text, "Hi");
        assert_eq!(messages[3].origin, Origin::Assistant);
        assert_eq!(messages[3].text, REPLY);
    }
}
