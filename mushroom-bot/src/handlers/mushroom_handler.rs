//! Command dispatcher: `$list` shows the known aliases, `$mushroom [name]` looks one up.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use mushroom_wiki::{list_card, lookup_card, MushroomLookup, RANDOM_HINT};
use tracing::{info, instrument};

use crate::command::Command;

/// Sent when a random lookup is asked for but the table has no entries.
const MSG_EMPTY_TABLE: &str = "No mushrooms are known yet.";

/// Answers mushroom commands and ends the chain; other messages pass through.
#[derive(Clone)]
pub struct MushroomHandler {
    lookup: Arc<MushroomLookup>,
    bot: Arc<dyn Bot>,
}

impl MushroomHandler {
    pub fn new(lookup: Arc<MushroomLookup>, bot: Arc<dyn Bot>) -> Self {
        Self { lookup, bot }
    }

    async fn show_list(&self, message: &Message) -> Result<()> {
        let card = list_card(self.lookup.catalog());
        self.bot.send_card(&message.chat, &card).await
    }

    async fn send_specific(&self, message: &Message, name: &str) -> Result<()> {
        let result = self.lookup.lookup(name).await;
        let card = lookup_card(name, &result);
        self.bot.send_card(&message.chat, &card).await
    }

    async fn send_random(&self, message: &Message) -> Result<()> {
        let Some((alias, result)) = self.lookup.lookup_random().await else {
            return self.bot.send_message(&message.chat, MSG_EMPTY_TABLE).await;
        };
        let card = lookup_card(&alias, &result);
        self.bot.send_card(&message.chat, &card).await?;
        self.bot.send_message(&message.chat, RANDOM_HINT).await
    }
}

#[async_trait]
impl Handler for MushroomHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = Command::parse(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };
        info!(user_id = message.user.id, command = ?command, "Mushroom command");

        match command {
            Command::List => self.show_list(message).await?,
            Command::Mushroom(Some(name)) => self.send_specific(message, &name).await?,
            Command::Mushroom(None) => self.send_random(message).await?,
        }

        Ok(HandlerResponse::Stop)
    }
}
