//! Append-only conversation log.
//!
//! Messages are created once and never mutated or removed. Ids are assigned
//! as `len + 1` at append time; since nothing is ever deleted they stay
//! unique and strictly increasing within a conversation.

use chrono::{DateTime, Local};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// Typed by the user in the composer.
    User,
    /// Simulated reply from the mocked bot.
    Bot,
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Conversation-local id, strictly increasing in creation order.
    pub id: usize,
    /// Raw message text (stored untrimmed).
    pub text: String,
    /// Message author.
    pub sender: Sender,
    /// Attributed model name. Present only on bot messages.
    pub model_name: Option<String>,
    /// Local wall-clock time the message was appended.
    pub sent_at: DateTime<Local>,
}

/// Ordered, append-only sequence of messages.
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Create an empty conversation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a conversation pre-populated with the demo transcript shown
    /// on first launch.
    #[must_use]
    pub fn seeded() -> Self {
        let mut conversation = Self::new();
        conversation.push_bot("Hello! How can I help you today?", "Gemini Flash");
        conversation.push_user("Can you explain quantum computing?");
        conversation.push_bot(
            "Quantum computing is a type of computing that uses quantum \
             phenomena such as superposition and entanglement...",
            "Gemini Flash",
        );
        conversation
    }

    /// Append a user message, returning its assigned id.
    pub fn push_user(&mut self, text: impl Into<String>) -> usize {
        self.push(text.into(), Sender::User, None)
    }

    /// Append a bot message attributed to `model_name`, returning its id.
    pub fn push_bot(&mut self, text: impl Into<String>, model_name: impl Into<String>) -> usize {
        self.push(text.into(), Sender::Bot, Some(model_name.into()))
    }

    fn push(&mut self, text: String, sender: Sender, model_name: Option<String>) -> usize {
        let id = self.messages.len() + 1;
        self.messages.push(Message {
            id,
            text,
            sender,
            model_name,
            sent_at: Local::now(),
        });
        id
    }

    /// All messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages in the conversation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the conversation holds no messages.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_is_empty() {
        let conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert_eq!(conversation.len(), 0);
    }

    #[test]
    fn test_seeded_transcript() {
        let conversation = Conversation::seeded();
        assert_eq!(conversation.len(), 3);

        let messages = conversation.messages();
        assert_eq!(messages[0].sender, Sender::Bot);
        assert_eq!(messages[0].model_name.as_deref(), Some("Gemini Flash"));
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].model_name, None);
        assert_eq!(messages[2].sender, Sender::Bot);
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut conversation = Conversation::seeded();
        conversation.push_user("one");
        conversation.push_bot("two", "Grok AI");

        let ids: Vec<usize> = conversation.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_push_assigns_len_plus_one() {
        let mut conversation = Conversation::new();
        let id = conversation.push_user("hello");
        assert_eq!(id, 1);
        let id = conversation.push_bot("hi", "Phi 3.5");
        assert_eq!(id, 2);
    }

    #[test]
    fn test_user_text_stored_untrimmed() {
        let mut conversation = Conversation::new();
        conversation.push_user("  padded  ");
        assert_eq!(
            conversation.last().map(|m| m.text.as_str()),
            Some("  padded  ")
        );
    }
}
