//! Chat assistant: intent matching plus an explicit message history.

mod intent;

pub use intent::*;

use crate::lexicon::{Lexicon, WELCOME_MESSAGE};
use crate::models::{ChatMessage, ConditionInfo};

/// Chat history owned by the caller.
///
/// Each call takes the current history and returns the messages it appended;
/// nothing is kept in process-wide state.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Start a session with the welcome message.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::bot(WELCOME_MESSAGE)],
        }
    }

    /// Resume a session from stored messages.
    pub fn from_messages(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append the user's text and the assistant's reply.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn send_message(
        &mut self,
        lexicon: &Lexicon,
        text: &str,
        rng: &mut dyn RandomSource,
    ) -> Option<(ChatMessage, ChatMessage)> {
        if text.trim().is_empty() {
            return None;
        }

        let user = ChatMessage::user(text);
        let reply = IntentMatcher::new(lexicon).classify_and_respond(text, rng);
        let bot = ChatMessage::bot(reply);

        self.messages.push(user.clone());
        self.messages.push(bot.clone());
        Some((user, bot))
    }

    /// Append a condition lookup as a user query and an annotated reply.
    pub fn record_lookup(&mut self, query: &str, info: ConditionInfo) -> (ChatMessage, ChatMessage) {
        let user = ChatMessage::user(query);
        let bot = ChatMessage::bot(info.summary.clone()).with_medical_data(info);

        self.messages.push(user.clone());
        self.messages.push(bot.clone());
        (user, bot)
    }
}
