//! Payload rendering for the names-only browse view.

use super::window::ListWindow;

/// One labeled line in a display payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadEntry {
    pub label: String,
    pub value: String,
    pub inline: bool,
}

/// Surface-agnostic rendering of one page.
///
/// Rebuilt from scratch on every render; handlers never patch a payload in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPayload {
    pub title: String,
    pub entries: Vec<PayloadEntry>,
}

/// Renders a page window into a display payload.
#[derive(Debug, Clone)]
pub struct DisplayRenderer {
    title_base: String,
}

impl DisplayRenderer {
    pub fn new(title_base: impl Into<String>) -> Self {
        Self {
            title_base: title_base.into(),
        }
    }

    /// Render one entry per window item, in list order.
    ///
    /// The title shows the raw zero-based page index, matching the original
    /// browse view.
    pub fn render(&self, window: &ListWindow<'_>) -> DisplayPayload {
        let entries = window
            .items
            .iter()
            .map(|label| PayloadEntry {
                label: label.clone(),
                value: String::new(),
                inline: false,
            })
            .collect();

        DisplayPayload {
            title: format!("{}, Page: {}", self.title_base, window.page_index),
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::window::compute_window;

    fn names(count: usize) -> Vec<String> {
        (1..=count).map(|n| format!("Spell {n}")).collect()
    }

    #[test]
    fn renders_one_entry_per_item_in_order() {
        let list = names(3);
        let renderer = DisplayRenderer::new("Spells");
        let payload = renderer.render(&compute_window(&list, 0, 20));

        assert_eq!(payload.entries.len(), 3);
        assert_eq!(payload.entries[0].label, "Spell 1");
        assert_eq!(payload.entries[2].label, "Spell 3");
        assert!(payload.entries.iter().all(|entry| entry.value.is_empty()));
        assert!(payload.entries.iter().all(|entry| !entry.inline));
    }

    #[test]
    fn title_shows_the_raw_page_index() {
        let list = names(45);
        let renderer = DisplayRenderer::new("Spells");

        assert_eq!(
            renderer.render(&compute_window(&list, 0, 20)).title,
            "Spells, Page: 0"
        );
        assert_eq!(
            renderer.render(&compute_window(&list, 2, 20)).title,
            "Spells, Page: 2"
        );
    }

    #[test]
    fn identical_windows_render_identical_payloads() {
        let list = names(10);
        let renderer = DisplayRenderer::new("Spells");

        let first = renderer.render(&compute_window(&list, 1, 4));
        let second = renderer.render(&compute_window(&list, 1, 4));

        assert_eq!(first, second);
    }

    #[test]
    fn empty_window_renders_zero_entries() {
        let list = names(0);
        let renderer = DisplayRenderer::new("Spells");
        let payload = renderer.render(&compute_window(&list, 0, 20));

        assert!(payload.entries.is_empty());
        assert_eq!(payload.title, "Spells, Page: 0");
    }
}
