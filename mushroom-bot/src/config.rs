//! Bot config: Telegram connectivity and logging plus the optional alias table path. Loaded from env.

use anyhow::{Context, Result};
use dbot_telegram::TelegramConfig;
use mushroom_wiki::MushroomCatalog;
use std::env;
use tracing::info;

/// Full bot config. Use [`BotConfig::load`] for env-based loading.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// MUSHROOM_TABLE: JSON alias table; the built-in table is used when unset.
    pub mushroom_table: Option<String>,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        Ok(Self {
            telegram,
            mushroom_table: mushroom_table_from_env(),
        })
    }

    /// Validates config. Call after load() to fail fast before connecting.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }

    pub fn log_file(&self) -> &str {
        &self.telegram.log_file
    }

    /// Loads the alias table named by this config.
    pub fn load_catalog(&self) -> Result<MushroomCatalog> {
        load_catalog(self.mushroom_table.as_deref())
    }
}

/// MUSHROOM_TABLE, ignoring blank values.
pub fn mushroom_table_from_env() -> Option<String> {
    env::var("MUSHROOM_TABLE")
        .ok()
        .filter(|s| !s.trim().is_empty())
}

/// Loads the table at `path`, or the built-in one.
pub fn load_catalog(path: Option<&str>) -> Result<MushroomCatalog> {
    let catalog = match path {
        Some(path) => MushroomCatalog::load(path)
            .with_context(|| format!("Failed to load mushroom table from {}", path))?,
        None => MushroomCatalog::builtin().context("Built-in mushroom table is invalid")?,
    };
    info!(
        source = %path.unwrap_or("built-in"),
        entries = catalog.len(),
        "Mushroom table loaded"
    );
    Ok(catalog)
}
