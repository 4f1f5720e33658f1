//! The alias table: common mushroom names mapped to Wikipedia page ids, and name resolution.

use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{Result, WikiError};

const BUILTIN_TABLE: &str = include_str!("../data/mushrooms.json");

/// Ordered alias → page id table. Loaded once, read-only afterwards; order decides which alias
/// wins when several match.
#[derive(Debug, Clone)]
pub struct MushroomCatalog {
    entries: Vec<(String, String)>,
}

impl MushroomCatalog {
    /// Builds a catalog from (alias, page id) pairs, keeping their order.
    /// Aliases are trimmed and lowercased; empty aliases, page ids or tables are rejected.
    pub fn from_pairs<I, A, P>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (A, P)>,
        A: AsRef<str>,
        P: AsRef<str>,
    {
        let mut entries = Vec::new();
        for (alias, page) in pairs {
            let alias = alias.as_ref().trim().to_lowercase();
            let page = page.as_ref().trim().to_string();
            if alias.is_empty() || page.is_empty() {
                return Err(WikiError::Catalog(format!(
                    "empty alias or page id in entry ({:?}, {:?})",
                    alias, page
                )));
            }
            entries.push((alias, page));
        }
        if entries.is_empty() {
            return Err(WikiError::Catalog("mushroom table is empty".to_string()));
        }
        Ok(Self { entries })
    }

    /// Parses a JSON object `{ "alias": "Page_Id", ... }` in document order.
    pub fn from_json(json: &str) -> Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut pairs = Vec::with_capacity(map.len());
        for (alias, value) in map {
            match value {
                serde_json::Value::String(page) => pairs.push((alias, page)),
                other => {
                    return Err(WikiError::Catalog(format!(
                        "page id for {:?} must be a string, got {}",
                        alias, other
                    )))
                }
            }
        }
        Self::from_pairs(pairs)
    }

    /// Reads a JSON table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        debug!(path = %path.display(), entries = catalog.len(), "Loaded mushroom table");
        Ok(catalog)
    }

    /// The table compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_TABLE)
    }

    /// Maps free text to a page id.
    ///
    /// The first alias (in table order) that is a substring of the normalized input, or that
    /// contains it, wins. Otherwise the input becomes `Title_Cased_Words`. Never fails.
    pub fn resolve(&self, name: &str) -> String {
        let name = name.trim().to_lowercase();

        for (alias, page) in &self.entries {
            if name.contains(alias.as_str()) || alias.contains(name.as_str()) {
                debug!(input = %name, alias = %alias, page = %page, "Resolved from table");
                return page.clone();
            }
        }

        let guess = title_case(&name.replace(' ', "_"));
        debug!(input = %name, page = %guess, "No alias matched, using title-cased guess");
        guess
    }

    /// Aliases in table order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(alias, _)| alias.as_str())
    }

    /// Page id for an exact (already normalized) alias.
    pub fn page_for(&self, alias: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(a, _)| a == alias)
            .map(|(_, page)| page.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Picks one alias uniformly at random.
    pub fn choose_alias<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.entries.choose(rng).map(|(alias, _)| alias.as_str())
    }
}

/// Capitalizes every word: a cased letter is uppercased when the character before it is not a
/// cased letter (start, space, underscore, apostrophe, digit, CJK...), and lowercased otherwise.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> MushroomCatalog {
        MushroomCatalog::from_pairs([
            ("shiitake", "Shiitake"),
            ("king oyster", "Pleurotus_eryngii"),
            ("oyster mushroom", "Pleurotus_ostreatus"),
            ("hen of the woods", "Grifola_frondosa"),
            ("maitake", "Grifola_frondosa"),
        ])
        .unwrap()
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("golden_teacher"), "Golden_Teacher");
        assert_eq!(title_case("lion's mane"), "Lion'S Mane");
        assert_eq!(title_case("hEN of THE woods"), "Hen Of The Woods");
        assert_eq!(title_case("3d print"), "3D Print");
        assert_eq!(title_case("shii椎take mushroom"), "Shii椎Take Mushroom");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_every_alias_resolves_to_its_page_case_insensitively() {
        let catalog = catalog();
        assert_eq!(catalog.resolve("Shiitake"), "Shiitake");
        assert_eq!(catalog.resolve("  KING OYSTER "), "Pleurotus_eryngii");
        assert_eq!(catalog.resolve("Hen Of The Woods"), "Grifola_frondosa");
        assert_eq!(catalog.resolve("maitake"), "Grifola_frondosa");
    }

    #[test]
    fn test_alias_inside_longer_input_matches() {
        let catalog = catalog();
        assert_eq!(catalog.resolve("dried shiitake caps"), "Shiitake");
    }

    #[test]
    fn test_input_inside_alias_matches() {
        let catalog = catalog();
        assert_eq!(catalog.resolve("woods"), "Grifola_frondosa");
    }

    #[test]
    fn test_first_match_in_table_order_wins() {
        let catalog = catalog();
        // "oyster" is inside both "king oyster" and "oyster mushroom".
        assert_eq!(catalog.resolve("oyster"), "Pleurotus_eryngii");
        assert_eq!(catalog.resolve("oyster mushroom"), "Pleurotus_ostreatus");

        let overlapping = MushroomCatalog::from_pairs([
            ("oyster", "Pleurotus_ostreatus"),
            ("king oyster", "Pleurotus_eryngii"),
        ])
        .unwrap();
        assert_eq!(overlapping.resolve("king oyster"), "Pleurotus_ostreatus");
    }

    #[test]
    fn test_unknown_name_is_title_cased_with_underscores() {
        let catalog = catalog();
        assert_eq!(catalog.resolve("amanita muscaria"), "Amanita_Muscaria");
        assert_eq!(catalog.resolve("  Death  Cap "), "Death__Cap");
    }

    #[test]
    fn test_from_json_keeps_document_order() {
        let catalog =
            MushroomCatalog::from_json(r#"{"Zebra": "Z_page", "apple": "A_page", "mango": "M_page"}"#)
                .unwrap();
        let aliases: Vec<&str> = catalog.aliases().collect();
        assert_eq!(aliases, vec!["zebra", "apple", "mango"]);
        assert_eq!(catalog.page_for("zebra"), Some("Z_page"));
        assert_eq!(catalog.page_for("pear"), None);
    }

    #[test]
    fn test_from_json_rejects_bad_tables() {
        assert!(matches!(MushroomCatalog::from_json("{}"), Err(WikiError::Catalog(_))));
        assert!(matches!(
            MushroomCatalog::from_json(r#"{"morel": 3}"#),
            Err(WikiError::Catalog(_))
        ));
        assert!(matches!(
            MushroomCatalog::from_json(r#"{" ": "Page"}"#),
            Err(WikiError::Catalog(_))
        ));
        assert!(matches!(MushroomCatalog::from_json("[1, 2]"), Err(WikiError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");
        std::fs::write(&path, r#"{"morel": "Morchella"}"#).unwrap();

        let catalog = MushroomCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.resolve("morel"), "Morchella");

        assert!(matches!(
            MushroomCatalog::load(dir.path().join("missing.json")),
            Err(WikiError::Io(_))
        ));
    }

    #[test]
    fn test_builtin_table_loads_and_has_shiitake() {
        let catalog = MushroomCatalog::builtin().unwrap();
        assert!(catalog.len() > 20);
        assert_eq!(catalog.page_for("shiitake"), Some("Shiitake"));
        for alias in catalog.aliases() {
            assert_eq!(alias, alias.trim().to_lowercase());
        }
    }

    #[test]
    fn test_every_builtin_alias_resolves_to_its_own_page() {
        let catalog = MushroomCatalog::builtin().unwrap();
        let mismatched: Vec<String> = catalog
            .aliases()
            .filter_map(|alias| {
                let want = catalog.page_for(alias)?;
                let got = catalog.resolve(alias);
                (got != want).then(|| format!("{alias}: want {want}, got {got}"))
            })
            .collect();
        assert!(mismatched.is_empty(), "{mismatched:?}");
    }

    #[test]
    fn test_choose_alias_returns_table_member() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let alias = catalog.choose_alias(&mut rng).unwrap();
            assert!(catalog.page_for(alias).is_some());
        }
    }
}
