//! mushroom-bot binary: run the Telegram bot, or look a mushroom up from the command line.

use anyhow::Result;
use clap::Parser;
use dbot_core::{init_tracing, Card};
use mushroom_bot::config::{load_catalog, mushroom_table_from_env};
use mushroom_bot::{run_bot, BotConfig, Cli, Commands};
use mushroom_wiki::{list_card, lookup_card, MushroomLookup, WikiClient};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Lookup { name } => {
            init_tracing(None)?;
            let catalog = Arc::new(load_catalog(mushroom_table_from_env().as_deref())?);
            let lookup = MushroomLookup::new(catalog, WikiClient::new()?);
            let name = name.join(" ");
            let result = lookup.lookup(&name).await;
            print_card(&lookup_card(&name, &result));
            Ok(())
        }
        Commands::List => {
            init_tracing(None)?;
            let catalog = load_catalog(mushroom_table_from_env().as_deref())?;
            print_card(&list_card(&catalog));
            Ok(())
        }
    }
}

fn print_card(card: &Card) {
    println!("# {}\n\n{}", card.title, card.body);
    if let Some(image) = &card.image_url {
        println!("\nImage: {}", image);
    }
    if let Some(link) = &card.link {
        println!("\n{}: {} <{}>", link.heading, link.label, link.url);
    }
}
