//! Bot abstraction for sending messages and cards.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram provides the Telegram implementation and tests
//! substitute a recording mock.

use crate::error::Result;
use crate::types::{Card, Chat};
use async_trait::async_trait;

/// Outbound side of a chat transport: plain text and structured [`Card`]s.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a card (title, body, optional image, optional link). The transport decides the layout.
    async fn send_card(&self, chat: &Chat, card: &Card) -> Result<()>;
}
