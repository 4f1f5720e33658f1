//! Logs each message before handling and the chain's outcome afterwards.

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

/// Logs each message in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        debug!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            chat_type = %message.chat.chat_type,
            message_content = %message.content,
            "Handling message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let answered = *response == HandlerResponse::Stop;
        info!(
            message_id = %message.id,
            chat_id = message.chat.id,
            answered,
            "Processed message"
        );
        Ok(())
    }
}
