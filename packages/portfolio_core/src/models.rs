//! Data models shared by the interactive widgets.
//!
//! Transcripts live in component state only; nothing here is persisted.

use uuid::Uuid;

/// Identifies which side of the conversation produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// The human typing into the widget.
    User,
    /// The canned-response assistant.
    Bot,
}

/// One entry in the chat transcript.
///
/// Messages are only ever appended; the transcript is cleared as a whole or
/// not at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    /// Display timestamp, already formatted for the UI (e.g. "14:05").
    pub timestamp: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::stamped(Sender::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::stamped(Sender::Bot, text)
    }

    fn stamped(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: chrono::Local::now().format("%H:%M").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_get_unique_ids() {
        let a = Message::user("one");
        let b = Message::user("one");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn constructors_tag_the_sender() {
        assert_eq!(Message::user("x").sender, Sender::User);
        assert_eq!(Message::bot("x").sender, Sender::Bot);
    }
}
