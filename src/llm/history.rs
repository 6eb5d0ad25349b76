//! Shared conversation memory for the direct completion endpoint

use std::collections::VecDeque;

use tokio::sync::Mutex;

use crate::llm::ChatMessage;

/// Number of past exchanges (user prompt + assistant reply) kept.
const MAX_EXCHANGES: usize = 5;

/// Process-wide bounded conversation history.
///
/// All completion requests share one memory, so follow-up prompts from any
/// client see the most recent exchanges. Older messages are dropped once
/// the window is full.
pub struct ConversationMemory {
    messages: Mutex<VecDeque<ChatMessage>>,
}

impl ConversationMemory {
    /// Create an empty conversation memory
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(VecDeque::new()),
        }
    }

    /// Record a message, evicting the oldest once the window is full.
    pub async fn remember(&self, message: ChatMessage) {
        let mut messages = self.messages.lock().await;
        messages.push_back(message);
        while messages.len() > MAX_EXCHANGES * 2 {
            messages.pop_front();
        }
    }

    /// Messages in the current window, oldest first.
    pub async fn recent(&self) -> Vec<ChatMessage> {
        self.messages.lock().await.iter().cloned().collect()
    }

    /// Number of messages currently held.
    pub async fn len(&self) -> usize {
        self.messages.lock().await.len()
    }

    /// Whether the memory holds no messages yet.
    pub async fn is_empty(&self) -> bool {
        self.messages.lock().await.is_empty()
    }
}

impl Default for ConversationMemory {
    fn default() -> Self {
        Self::new()
    }
}
