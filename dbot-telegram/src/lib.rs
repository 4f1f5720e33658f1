//! # dbot-telegram
//!
//! Telegram transport layer: adapters, [`dbot_core::Bot`] implementation, minimal config, REPL runner.
//! Handles only Telegram connectivity, card rendering and handler-chain execution; no lookup logic.

mod adapters;
mod bot_adapter;
mod config;
mod render;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use render::{render_card_html, CAPTION_LIMIT};
pub use runner::run_repl;
