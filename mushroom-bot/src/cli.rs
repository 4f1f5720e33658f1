//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mushroom-bot")]
#[command(about = "Telegram bot that looks mushrooms up on Wikipedia", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Look one mushroom up on Wikipedia and print the card, without connecting to Telegram.
    Lookup {
        /// Free-text mushroom name, e.g. "hen of the woods".
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Print the list card for the configured mushroom table.
    List,
}
