//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends messages via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Card, Chat, DbotError, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, InputFile, ParseMode},
};
use tracing::{debug, warn};

use crate::render::{render_card_html, CAPTION_LIMIT};

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    async fn send_html(&self, chat: &Chat, html: String) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), html)
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    /// Sends the photo, captioned with `caption` when given. Returns false when Telegram refused it.
    async fn send_photo(&self, chat: &Chat, url: reqwest::Url, caption: Option<&str>) -> bool {
        let mut request = self.bot.send_photo(ChatId(chat.id), InputFile::url(url));
        if let Some(caption) = caption {
            request = request
                .caption(caption.to_string())
                .parse_mode(ParseMode::Html);
        }
        match request.await {
            Ok(_) => true,
            Err(e) => {
                warn!(chat_id = chat.id, error = %e, "Photo send failed, falling back to text");
                false
            }
        }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_card(&self, chat: &Chat, card: &Card) -> Result<()> {
        let html = render_card_html(card);
        let image = card
            .image_url
            .as_deref()
            .and_then(|u| reqwest::Url::parse(u).ok());

        if let Some(url) = image {
            let fits = html.chars().count() <= CAPTION_LIMIT;
            debug!(chat_id = chat.id, image_url = %url, caption = fits, "Sending card photo");
            let sent = self
                .send_photo(chat, url, fits.then_some(html.as_str()))
                .await;
            if sent && fits {
                return Ok(());
            }
        }

        self.send_html(chat, html).await
    }
}
