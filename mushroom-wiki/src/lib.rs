//! # mushroom-wiki
//!
//! Turns a free-text mushroom name into a Wikipedia page, fetches it, and extracts an image and a
//! short excerpt: [`MushroomCatalog`] (alias table + resolver), [`WikiClient`] (fetcher),
//! [`extract`] (image and excerpt selection), [`MushroomLookup`] (the whole pipeline with
//! user-facing failure messages) and [`card`] (outbound card assembly).

pub mod card;
pub mod catalog;
pub mod client;
pub mod error;
pub mod extract;
pub mod lookup;

pub use card::{list_card, lookup_card, make_card, LIST_LIMIT, LIST_TITLE, RANDOM_HINT};
pub use catalog::{title_case, MushroomCatalog};
pub use client::{FetchedPage, WikiClient, REQUEST_TIMEOUT, USER_AGENT, WIKI_URL};
pub use error::{Result, WikiError};
pub use extract::{extract, Extracted, MAX_TEXT, MIN_TEXT};
pub use lookup::{LookupResult, MushroomLookup, NO_GOOD_INFO};
