//! Spell detail model and its display shaping.

use serde::Deserialize;

// Field value cap imposed by Discord embeds.
const FIELD_VALUE_MAX_CHARS: usize = 1024;

/// A named reference in the API payload (school, class).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NamedRef {
    pub name: String,
}

/// Detail record for one spell, as served by the remote API.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SpellDetail {
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub desc: Vec<String>,
    #[serde(default)]
    pub higher_level: Vec<String>,
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub ritual: bool,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub concentration: bool,
    #[serde(default)]
    pub casting_time: String,
    pub level: u8,
    pub school: NamedRef,
    #[serde(default)]
    pub classes: Vec<NamedRef>,
}

impl SpellDetail {
    /// Rows for the detail embed: `(label, value, inline)`, in display order.
    ///
    /// Empty attributes are skipped; long text is truncated to the embed
    /// field limit.
    pub fn field_rows(&self) -> Vec<(String, String, bool)> {
        let mut rows: Vec<(String, String, bool)> = vec![
            ("Level".to_owned(), level_label(self.level), true),
            ("School".to_owned(), self.school.name.clone(), true),
        ];

        if !self.casting_time.is_empty() {
            rows.push(("Casting Time".to_owned(), self.casting_time.clone(), true));
        }
        if !self.range.is_empty() {
            rows.push(("Range".to_owned(), self.range.clone(), true));
        }
        if !self.components.is_empty() {
            rows.push(("Components".to_owned(), self.components.join(", "), true));
        }
        if let Some(material) = self.material.as_ref().filter(|value| !value.is_empty()) {
            rows.push(("Material".to_owned(), material.clone(), false));
        }
        if !self.duration.is_empty() {
            rows.push(("Duration".to_owned(), self.duration.clone(), true));
        }
        if self.concentration {
            rows.push(("Concentration".to_owned(), "Yes".to_owned(), true));
        }
        if self.ritual {
            rows.push(("Ritual".to_owned(), "Yes".to_owned(), true));
        }
        if !self.classes.is_empty() {
            let class_names: Vec<&str> = self
                .classes
                .iter()
                .map(|class| class.name.as_str())
                .collect();
            rows.push(("Classes".to_owned(), class_names.join(", "), false));
        }
        if !self.desc.is_empty() {
            rows.push((
                "Description".to_owned(),
                truncate_field(&self.desc.join("\n\n")),
                false,
            ));
        }
        if !self.higher_level.is_empty() {
            rows.push((
                "At Higher Levels".to_owned(),
                truncate_field(&self.higher_level.join("\n\n")),
                false,
            ));
        }

        rows
    }
}

fn level_label(level: u8) -> String {
    if level == 0 {
        "Cantrip".to_owned()
    } else {
        level.to_string()
    }
}

fn truncate_field(text: &str) -> String {
    if text.chars().count() <= FIELD_VALUE_MAX_CHARS {
        return text.to_owned();
    }

    let cut: String = text.chars().take(FIELD_VALUE_MAX_CHARS - 1).collect();
    format!("{cut}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn misty_step() -> SpellDetail {
        serde_json::from_value(serde_json::json!({
            "index": "misty-step",
            "name": "Misty Step",
            "desc": ["Briefly surrounded by silvery mist, you teleport up to 30 feet."],
            "range": "Self",
            "components": ["V"],
            "ritual": false,
            "duration": "Instantaneous",
            "concentration": false,
            "casting_time": "1 bonus action",
            "level": 2,
            "school": { "name": "Conjuration" },
            "classes": [{ "name": "Sorcerer" }, { "name": "Warlock" }, { "name": "Wizard" }]
        }))
        .unwrap()
    }

    #[test]
    fn parses_the_remote_detail_shape() {
        let detail = misty_step();

        assert_eq!(detail.name, "Misty Step");
        assert_eq!(detail.level, 2);
        assert_eq!(detail.school.name, "Conjuration");
        assert!(detail.higher_level.is_empty());
        assert!(detail.material.is_none());
    }

    #[test]
    fn field_rows_lead_with_level_and_school() {
        let rows = misty_step().field_rows();

        assert_eq!(rows[0], ("Level".to_owned(), "2".to_owned(), true));
        assert_eq!(rows[1], ("School".to_owned(), "Conjuration".to_owned(), true));
    }

    #[test]
    fn field_rows_skip_absent_attributes() {
        let rows = misty_step().field_rows();
        let labels: Vec<&str> = rows.iter().map(|(label, _, _)| label.as_str()).collect();

        assert!(labels.contains(&"Description"));
        assert!(!labels.contains(&"Material"));
        assert!(!labels.contains(&"Concentration"));
        assert!(!labels.contains(&"At Higher Levels"));
    }

    #[test]
    fn level_zero_reads_as_cantrip() {
        let mut detail = misty_step();
        detail.level = 0;

        let rows = detail.field_rows();
        assert_eq!(rows[0].1, "Cantrip");
    }

    #[test]
    fn classes_join_into_one_row() {
        let rows = misty_step().field_rows();
        let classes = rows
            .iter()
            .find(|(label, _, _)| label == "Classes")
            .unwrap();

        assert_eq!(classes.1, "Sorcerer, Warlock, Wizard");
        assert!(!classes.2);
    }

    #[test]
    fn long_descriptions_are_truncated_to_the_field_limit() {
        let mut detail = misty_step();
        detail.desc = vec!["x".repeat(3000)];

        let rows = detail.field_rows();
        let description = rows
            .iter()
            .find(|(label, _, _)| label == "Description")
            .unwrap();

        assert_eq!(description.1.chars().count(), FIELD_VALUE_MAX_CHARS);
        assert!(description.1.ends_with('…'));
    }
}
