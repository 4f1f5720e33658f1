//! The lookup pipeline: resolve → fetch → extract, with failures turned into user-facing text.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::catalog::MushroomCatalog;
use crate::client::WikiClient;
use crate::error::{Result, WikiError};
use crate::extract::extract;

/// Shown when the page exists but no paragraph qualified as an excerpt.
pub const NO_GOOD_INFO: &str = "Found the page but no good info. Maybe try another mushroom?";

/// Outcome of one lookup. On failure `text` is the message for the user and both options are None.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub text: String,
    pub image: Option<String>,
    pub link: Option<String>,
}

impl LookupResult {
    fn failure(name: &str, err: &WikiError) -> Self {
        Self {
            text: err.user_message(name),
            image: None,
            link: None,
        }
    }
}

/// Resolves names against the catalog and looks them up on the wiki.
#[derive(Debug, Clone)]
pub struct MushroomLookup {
    catalog: Arc<MushroomCatalog>,
    client: WikiClient,
}

impl MushroomLookup {
    pub fn new(catalog: Arc<MushroomCatalog>, client: WikiClient) -> Self {
        Self { catalog, client }
    }

    pub fn catalog(&self) -> &MushroomCatalog {
        &self.catalog
    }

    /// Looks up `name`. Never fails: not-found and transport errors become a message.
    #[instrument(skip(self))]
    pub async fn lookup(&self, name: &str) -> LookupResult {
        match self.try_lookup(name).await {
            Ok(result) => result,
            Err(e) => {
                warn!(name = %name, error = %e, "Lookup failed");
                LookupResult::failure(name, &e)
            }
        }
    }

    /// Same as [`lookup`](Self::lookup) but keeps the error.
    pub async fn try_lookup(&self, name: &str) -> Result<LookupResult> {
        let page = self.catalog.resolve(name);
        let fetched = self.client.fetch(&page).await?;
        let found = extract(&fetched.html);

        info!(
            page = %page,
            image = found.image.is_some(),
            excerpts = found.excerpts.len(),
            "Extracted page content"
        );

        let text = match found.excerpt() {
            Some(excerpt) => excerpt.to_string(),
            None => NO_GOOD_INFO.to_string(),
        };
        Ok(LookupResult {
            text,
            image: found.image,
            link: Some(fetched.url),
        })
    }

    /// Picks a random alias from the catalog and looks it up. Returns the alias with the result.
    pub async fn lookup_random(&self) -> Option<(String, LookupResult)> {
        let alias = self
            .catalog
            .choose_alias(&mut rand::thread_rng())?
            .to_string();
        info!(alias = %alias, "Random mushroom chosen");
        let result = self.lookup(&alias).await;
        Some((alias, result))
    }
}
