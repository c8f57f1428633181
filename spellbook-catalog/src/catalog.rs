//! Preloaded spell catalog: ordered names plus name-to-index resolution.

use serde::Deserialize;

/// One catalog entry: API index plus display name.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SpellRef {
    pub index: String,
    pub name: String,
}

/// The full ordered spell catalog.
///
/// Fetched once at process start and immutable thereafter; every pagination
/// session borrows the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct SpellCatalog {
    entries: Vec<SpellRef>,
}

impl SpellCatalog {
    pub fn new(entries: Vec<SpellRef>) -> Self {
        Self { entries }
    }

    /// Ordered display names for the browse view.
    pub fn names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a user-entered spell to its API index.
    ///
    /// Accepts a display name (case-insensitive) or a raw API index.
    pub fn resolve_index(&self, raw: &str) -> Option<&str> {
        let wanted = raw.trim();

        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(wanted) || entry.index == wanted)
            .map(|entry| entry.index.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SpellCatalog {
        SpellCatalog::new(vec![
            SpellRef {
                index: "acid-arrow".to_owned(),
                name: "Acid Arrow".to_owned(),
            },
            SpellRef {
                index: "misty-step".to_owned(),
                name: "Misty Step".to_owned(),
            },
            SpellRef {
                index: "wish".to_owned(),
                name: "Wish".to_owned(),
            },
        ])
    }

    #[test]
    fn names_preserve_catalog_order() {
        assert_eq!(catalog().names(), vec!["Acid Arrow", "Misty Step", "Wish"]);
    }

    #[test]
    fn resolves_display_names_case_insensitively() {
        let catalog = catalog();

        assert_eq!(catalog.resolve_index("Misty Step"), Some("misty-step"));
        assert_eq!(catalog.resolve_index("misty step"), Some("misty-step"));
        assert_eq!(catalog.resolve_index("  MISTY STEP  "), Some("misty-step"));
    }

    #[test]
    fn resolves_raw_api_indexes() {
        assert_eq!(catalog().resolve_index("acid-arrow"), Some("acid-arrow"));
    }

    #[test]
    fn unknown_spells_do_not_resolve() {
        assert_eq!(catalog().resolve_index("Power Word Nap"), None);
        assert_eq!(SpellCatalog::default().resolve_index("Wish"), None);
    }
}
