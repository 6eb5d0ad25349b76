//! Chat completion module
//!
//! OpenAI-compatible chat client plus the fixed prompt set, the shared
//! conversation memory backing the direct completion endpoint, and the
//! LLM-backed discussion categorizer.

pub mod categorize;
pub mod client;
pub mod history;
pub mod prompts;

pub use categorize::categorize_text;
pub use categorize::CATEGORIES;
pub use client::ChatClient;
pub use client::ChatMessage;
pub use client::ChatModel;
pub use client::ChatOptions;
pub use history::ConversationMemory;
