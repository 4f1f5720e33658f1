//! Drops messages written by the bot itself so its own replies never trigger commands.

use async_trait::async_trait;
use dbot_core::{BotIdentity, Handler, Message, Result};
use tracing::debug;

/// Stops the chain in before() when the sender is the bot's own account.
pub struct SelfMessageFilter {
    identity: BotIdentity,
}

impl SelfMessageFilter {
    pub fn new(identity: BotIdentity) -> Self {
        Self { identity }
    }
}

#[async_trait]
impl Handler for SelfMessageFilter {
    async fn before(&self, message: &Message) -> Result<bool> {
        if self.identity.is_self(message.user.id) {
            debug!(message_id = %message.id, "Ignoring own message");
            return Ok(false);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbot_core::{Chat, User};

    fn message_from(user_id: i64) -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: user_id,
                username: None,
                first_name: None,
                is_bot: false,
            },
            chat: Chat {
                id: 5,
                chat_type: "group".to_string(),
            },
            content: "$list".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_own_messages_are_dropped() {
        let identity = BotIdentity::new();
        let filter = SelfMessageFilter::new(identity.clone());

        // Identity unknown yet: nothing is filtered.
        assert!(filter.before(&message_from(42)).await.unwrap());

        identity.set(User {
            id: 42,
            username: Some("mushroom_bot".to_string()),
            first_name: None,
            is_bot: true,
        });
        assert!(!filter.before(&message_from(42)).await.unwrap());
        assert!(filter.before(&message_from(7)).await.unwrap());
    }
}
