//! Outbound card assembly for lookup results and the alias list.

use dbot_core::{Card, CardLink};

use crate::catalog::{title_case, MushroomCatalog};
use crate::lookup::LookupResult;

/// How many aliases the list card shows.
pub const LIST_LIMIT: usize = 20;
pub const LIST_TITLE: &str = "Available Mushrooms (First 20)";
/// Sent after a random lookup.
pub const RANDOM_HINT: &str = "💡 Try $mushroom shiitake or $list to see more!";

/// Builds a card; absent image or link are left out.
pub fn make_card(title: &str, text: &str, image: Option<&str>, link: Option<&str>) -> Card {
    let mut card = Card::new(title, text);
    if let Some(image) = image {
        card = card.with_image(image);
    }
    if let Some(url) = link {
        card = card.with_link(CardLink {
            heading: "Read More".to_string(),
            label: "Wikipedia".to_string(),
            url: url.to_string(),
        });
    }
    card
}

/// Card for a lookup of `name`, titled with the title-cased name.
pub fn lookup_card(name: &str, result: &LookupResult) -> Card {
    make_card(
        &title_case(name),
        &result.text,
        result.image.as_deref(),
        result.link.as_deref(),
    )
}

/// Card listing the first [`LIST_LIMIT`] aliases and the total count.
pub fn list_card(catalog: &MushroomCatalog) -> Card {
    let names: Vec<String> = catalog.aliases().take(LIST_LIMIT).map(title_case).collect();
    let body = format!(
        "{} mushrooms total!\n\n{}\n\nUse $mushroom [name] to learn about any of these!",
        catalog.len(),
        names.join(", ")
    );
    make_card(LIST_TITLE, &body, None, None)
}
