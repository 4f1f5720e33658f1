//! Picks an illustrative image and a short excerpt out of a Wikipedia article.
//!
//! Works on a parsed [`scraper::Html`] that never leaves this module, so callers can stay `Send`.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Excerpt length bounds (characters, exclusive).
pub const MIN_TEXT: usize = 50;
pub const MAX_TEXT: usize = 1000;
/// Only the first few paragraphs of the article body are considered.
const PARAGRAPH_SCAN: usize = 5;
/// Content images whose src contains one of these (lowercased) are branding, not mushrooms.
const IMAGE_DENYLIST: [&str; 3] = ["commons-logo", "edit-icon", "wikimedia"];

static INFOBOX: LazyLock<Selector> = LazyLock::new(|| selector("table.infobox"));
static CONTENT: LazyLock<Selector> = LazyLock::new(|| selector("div#mw-content-text"));
static IMG: LazyLock<Selector> = LazyLock::new(|| selector("img"));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| selector("p"));

static CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("citation pattern"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// What the extractor found on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub image: Option<String>,
    /// Qualifying paragraphs in document order; the first one is the excerpt.
    pub excerpts: Vec<String>,
}

impl Extracted {
    pub fn excerpt(&self) -> Option<&str> {
        self.excerpts.first().map(String::as_str)
    }
}

/// Parses `html` and runs both image and excerpt selection. Never fails; malformed markup just
/// yields fewer results.
pub fn extract(html: &str) -> Extracted {
    let document = Html::parse_document(html);
    Extracted {
        image: find_image(&document),
        excerpts: find_excerpts(&document),
    }
}

/// Image from the first infobox, else the first non-branding image in the article body.
pub fn find_image(document: &Html) -> Option<String> {
    if let Some(infobox) = document.select(&INFOBOX).next() {
        let src = infobox
            .select(&IMG)
            .next()
            .and_then(|img| img.value().attr("src"))
            .filter(|src| !src.is_empty());
        if let Some(src) = src {
            return Some(absolute_src(src));
        }
    }

    let content = document.select(&CONTENT).next()?;
    content
        .select(&IMG)
        .filter_map(|img| img.value().attr("src"))
        .filter(|src| !src.is_empty())
        .find(|src| {
            let lower = src.to_lowercase();
            !IMAGE_DENYLIST.iter().any(|skip| lower.contains(skip))
        })
        .map(absolute_src)
}

/// Cleaned paragraphs among the first five of the article body whose length is within bounds.
pub fn find_excerpts(document: &Html) -> Vec<String> {
    let Some(content) = document.select(&CONTENT).next() else {
        return Vec::new();
    };

    content
        .select(&PARAGRAPH)
        .take(PARAGRAPH_SCAN)
        .filter_map(|p| {
            let raw = element_text(p);
            let raw = raw.trim();
            if !within_bounds(raw) {
                return None;
            }
            let cleaned = clean_text(raw);
            // Citation removal can push a paragraph under the minimum.
            within_bounds(&cleaned).then_some(cleaned)
        })
        .collect()
}

/// Removes `[1]`-style markers, collapses whitespace runs to one space and trims.
pub fn clean_text(text: &str) -> String {
    let text = CITATION.replace_all(text, "");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

fn within_bounds(text: &str) -> bool {
    let len = text.chars().count();
    MIN_TEXT < len && len < MAX_TEXT
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Protocol-relative `//host/path` becomes `https://host/path`.
fn absolute_src(src: &str) -> String {
    if src.starts_with("//") {
        format!("https:{}", src)
    } else {
        src.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: &str = "Shiitake is an edible mushroom native to East Asia, cultivated and consumed around the globe.";

    fn page(body: &str) -> String {
        format!(
            "<html><body><div id=\"mw-content-text\">{}</div></body></html>",
            body
        )
    }

    #[test]
    fn test_infobox_image_preferred_over_content_image() {
        let html = page(
            r#"<p><img src="//example.org/content.jpg"></p>
               <table class="infobox biota"><tr><td><img src="//upload.wikimedia.org/shiitake.jpg"></td></tr></table>"#,
        );
        let found = extract(&html);
        assert_eq!(
            found.image.as_deref(),
            Some("https://upload.wikimedia.org/shiitake.jpg")
        );
    }

    #[test]
    fn test_infobox_outside_content_is_still_used() {
        let html = r#"<html><body><table class="infobox"><tr><td><img src="https://img.example/a.png"></td></tr></table></body></html>"#;
        assert_eq!(
            extract(html).image.as_deref(),
            Some("https://img.example/a.png")
        );
    }

    #[test]
    fn test_content_image_skips_denylisted_sources() {
        let html = page(
            r#"<img src="//upload.wikimedia.org/Commons-logo.svg">
               <img>
               <img src="/static/Edit-icon.png">
               <img src="//example.org/mushroom.jpg">
               <img src="//example.org/second.jpg">"#,
        );
        assert_eq!(
            extract(&html).image.as_deref(),
            Some("https://example.org/mushroom.jpg")
        );
    }

    #[test]
    fn test_infobox_without_image_src_falls_back_to_content() {
        let html = page(
            r#"<table class="infobox"><tr><td><img alt="no src"></td></tr></table>
               <img src="https://example.org/fallback.jpg">"#,
        );
        assert_eq!(
            extract(&html).image.as_deref(),
            Some("https://example.org/fallback.jpg")
        );
    }

    #[test]
    fn test_no_qualifying_image() {
        let html = page(r#"<img src="//upload.wikimedia.org/only-branding.png"><p>text</p>"#);
        assert_eq!(extract(&html).image, None);
        assert_eq!(extract("<html><body></body></html>").image, None);
    }

    #[test]
    fn test_excerpt_is_first_paragraph_within_bounds_and_cleaned() {
        let html = page(&format!(
            "<p>Too short.</p><p>{}[1]\n   It grows   on logs.[note 2]</p><p>{}</p>",
            LONG, LONG
        ));
        let found = extract(&html);
        assert_eq!(
            found.excerpt(),
            Some(
                "Shiitake is an edible mushroom native to East Asia, cultivated and consumed around the globe. It grows on logs."
            )
        );
        assert_eq!(found.excerpts.len(), 2);
    }

    #[test]
    fn test_only_first_five_paragraphs_considered() {
        let html = page(&format!(
            "<p>a</p><p>b</p><p>c</p><p>d</p><p>e</p><p>{}</p>",
            LONG
        ));
        assert!(extract(&html).excerpts.is_empty());
    }

    #[test]
    fn test_paragraphs_over_max_are_rejected() {
        let long = "x".repeat(MAX_TEXT);
        let html = page(&format!("<p>{}</p>", long));
        assert!(extract(&html).excerpts.is_empty());
    }

    #[test]
    fn test_paragraph_short_after_citation_removal_is_rejected() {
        let body = format!("<p>Tiny text.[{}]</p>", "9".repeat(60));
        assert!(extract(&page(&body)).excerpts.is_empty());
    }

    #[test]
    fn test_no_content_area_gives_no_excerpts() {
        let html = format!("<html><body><p>{}</p></body></html>", LONG);
        assert!(extract(&html).excerpts.is_empty());
    }

    #[test]
    fn test_excerpts_respect_invariants() {
        let html = page(&format!(
            "<p>{long}[1]</p><p>\t{long}\n\n[citation needed] tail</p><p>{long}  <b>bold</b>  [a]</p>",
            long = LONG
        ));
        let found = extract(&html);
        assert_eq!(found.excerpts.len(), 3);
        for excerpt in &found.excerpts {
            let len = excerpt.chars().count();
            assert!(MIN_TEXT < len && len < MAX_TEXT);
            assert!(!CITATION.is_match(excerpt));
            assert!(!excerpt.contains("  "));
            assert_eq!(excerpt.trim(), excerpt);
        }
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  a [1] b\n\n c[2][3] "), "a b c");
        assert_eq!(clean_text("no markers"), "no markers");
    }
}
