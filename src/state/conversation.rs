//! Append-only coach conversation

use chrono::Utc;

use crate::models::{ChatMessage, CoachReply, Role};

#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Conversation {
    /// Conversation holding only the coach's greeting
    pub fn with_welcome(welcome: CoachReply) -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        conversation.push(Role::Coach, welcome);
        conversation
    }

    pub fn push(&mut self, role: Role, reply: CoachReply) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            role,
            content: reply.content,
            timestamp: Utc::now(),
            suggestions: reply.suggestions,
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }

    pub fn push_user(&mut self, text: &str) -> ChatMessage {
        self.push(
            Role::User,
            CoachReply {
                content: text.to_string(),
                suggestions: Vec::new(),
            },
        )
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_from_welcome() {
        let mut conversation = Conversation::with_welcome(CoachReply {
            content: "hi".into(),
            suggestions: vec!["go".into()],
        });
        let user = conversation.push_user("plan my workout");

        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.messages()[0].role, Role::Coach);
        assert_eq!(user.id, 2);
        assert_eq!(user.role, Role::User);
        assert!(user.suggestions.is_empty());
    }
}
