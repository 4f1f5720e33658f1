//! # Mushroom bot application
//!
//! Wires the mushroom lookup pipeline into the handler chain and the Telegram transport.
//! Loads config from env, parses `$list` / `$mushroom` commands and runs the REPL.

pub mod cli;
pub mod command;
pub mod config;
pub mod handlers;
pub mod runner;

pub use cli::{Cli, Commands};
pub use command::Command;
pub use config::BotConfig;
pub use handlers::{LoggingHandler, MushroomHandler, SelfMessageFilter};
pub use runner::{build_handler_chain, run_bot};
