//! # dbot-core
//!
//! Core types and traits for the chat bot: [`Bot`], [`Handler`], message, user and [`Card`] types,
//! and tracing initialization. Transport-agnostic; used by dbot-telegram, handler-chain and mushroom-bot.

pub mod bot;
pub mod error;
pub mod identity;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, Result};
pub use identity::BotIdentity;
pub use logger::init_tracing;
pub use types::{Card, CardLink, Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
