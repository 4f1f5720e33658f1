//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.
//! Calls get_me first so handlers can recognise the bot's own messages.

use anyhow::Result;
use dbot_core::{BotIdentity, ToCoreMessage, ToCoreUser};
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::{TelegramMessageWrapper, TelegramUserWrapper};

/// Starts the REPL with the given teloxide Bot and HandlerChain.
/// Fills `identity` from get_me before starting; each message is converted to core::Message and
/// passed to chain.handle in its own task, so a slow lookup never blocks the next message.
#[instrument(skip(bot, handler_chain, identity))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    identity: BotIdentity,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            let user = TelegramUserWrapper(&me.user).to_core();
            info!(
                bot_id = user.id,
                username = %user.username.as_deref().unwrap_or("unknown"),
                "{} is ready",
                user.username.as_deref().unwrap_or("bot")
            );
            identity.set(user);
        }
        Err(e) => warn!(error = %e, "get_me failed; own messages cannot be recognised"),
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            match msg.text() {
                Some(text) => {
                    info!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        message_content = %text,
                        "Received message"
                    );
                }
                None => {
                    info!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Received non-text message, skipped"
                    );
                    return respond(());
                }
            }

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
