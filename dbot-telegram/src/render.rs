//! Card → Telegram HTML (parse mode `Html`).

use dbot_core::Card;
use teloxide::utils::html::{bold, escape};

/// Telegram's maximum photo caption length.
pub const CAPTION_LIMIT: usize = 1024;

/// Renders a card as Telegram HTML: bold title, body, and the optional link field.
/// The image is not part of the text; the adapter sends it as a photo.
pub fn render_card_html(card: &Card) -> String {
    let mut out = bold(&escape(&card.title));
    if !card.body.is_empty() {
        out.push_str("\n\n");
        out.push_str(&escape(&card.body));
    }
    if let Some(link) = &card.link {
        out.push_str("\n\n");
        out.push_str(&bold(&escape(&link.heading)));
        out.push('\n');
        out.push_str(&format!(
            "<a href=\"{}\">{}</a>",
            escape_attr(&link.url),
            escape(&link.label)
        ));
    }
    out
}

/// `escape` leaves `"` alone, which would end a double-quoted attribute early.
fn escape_attr(value: &str) -> String {
    escape(value).replace('"', "&quot;")
}
