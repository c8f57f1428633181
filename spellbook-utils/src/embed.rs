use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder};

use crate::pagination::DisplayPayload;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x00_8c_ff;

// Discord rejects empty embed-field values, so blank payload values render
// as a zero-width space.
const BLANK_FIELD_VALUE: &str = "\u{200b}";

/// Build an embed from a rendered display payload, one field per entry.
pub fn build_payload_embed(payload: &DisplayPayload) -> anyhow::Result<Embed> {
    let mut builder = EmbedBuilder::new()
        .title(payload.title.as_str())
        .color(DEFAULT_EMBED_COLOR);

    for entry in &payload.entries {
        let value = if entry.value.is_empty() {
            BLANK_FIELD_VALUE
        } else {
            entry.value.as_str()
        };

        let field = EmbedFieldBuilder::new(entry.label.as_str(), value);
        builder = if entry.inline {
            builder.field(field.inline())
        } else {
            builder.field(field)
        };
    }

    Ok(builder.validate()?.build())
}

/// Build a titled embed with labeled fields, used for detail views.
pub fn build_detail_embed(
    title: &str,
    description: impl Into<String>,
    fields: &[(String, String, bool)],
) -> anyhow::Result<Embed> {
    let mut builder = EmbedBuilder::new()
        .title(title)
        .color(DEFAULT_EMBED_COLOR)
        .description(description);

    for (name, value, inline) in fields {
        let value = if value.is_empty() {
            BLANK_FIELD_VALUE
        } else {
            value.as_str()
        };

        let field = EmbedFieldBuilder::new(name.as_str(), value);
        builder = if *inline {
            builder.field(field.inline())
        } else {
            builder.field(field)
        };
    }

    Ok(builder.validate()?.build())
}
