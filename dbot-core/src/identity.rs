//! The bot's own account, learned from the transport at startup.

use std::sync::{Arc, RwLock};

use crate::types::User;

/// Shared slot for the bot's own user; empty until the transport has asked who it is.
#[derive(Debug, Clone, Default)]
pub struct BotIdentity {
    user: Arc<RwLock<Option<User>>>,
}

impl BotIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, user: User) {
        if let Ok(mut slot) = self.user.write() {
            *slot = Some(user);
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.read().ok()?.as_ref().map(|u| u.id)
    }

    /// True when `user_id` is the bot itself. Unknown identity never matches.
    pub fn is_self(&self, user_id: i64) -> bool {
        self.user_id() == Some(user_id)
    }
}
