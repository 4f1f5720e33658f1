//! Bot assembly and entry point: logging, config validation, handler chain, REPL.

use anyhow::Result;
use dbot_core::{init_tracing, Bot, BotIdentity};
use dbot_telegram::{run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use mushroom_wiki::{MushroomLookup, WikiClient};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::BotConfig;
use crate::handlers::{LoggingHandler, MushroomHandler, SelfMessageFilter};

/// Chain order: logging, self-message filter, mushroom commands.
pub fn build_handler_chain(
    lookup: Arc<MushroomLookup>,
    bot: Arc<dyn Bot>,
    identity: BotIdentity,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(SelfMessageFilter::new(identity)))
        .add_handler(Arc::new(MushroomHandler::new(lookup, bot)))
}

/// Main entry: validate config, init logging, load the table, build the chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    if let Some(dir) = Path::new(config.log_file()).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    init_tracing(Some(config.log_file()))?;

    let catalog = Arc::new(config.load_catalog()?);
    let lookup = Arc::new(MushroomLookup::new(catalog, WikiClient::new()?));

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let identity = BotIdentity::new();
    let handler_chain = build_handler_chain(lookup, bot, identity.clone());

    info!(handlers = handler_chain.len(), "Bot started successfully");

    run_repl(teloxide_bot, handler_chain, identity).await
}
