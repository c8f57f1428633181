use tracing::error;
use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use spellbook_catalog::CatalogError;
use spellbook_core::Context;
use spellbook_utils::embed::build_detail_embed;

pub const META: CommandMeta = CommandMeta {
    name: "spell",
    desc: "Display info for a specific spell.",
    usage: "!spell <name>",
};

/// Source credit shown under every spell detail embed.
const DETAIL_DESCRIPTION: &str = "This info was pulled from https://www.dnd5eapi.co";

/// Look up one spell and render its detail embed.
///
/// Purpose:
/// - fetch and display the remote detail record for a single spell.
///
/// Inputs:
/// - required spell name (may contain spaces) or raw API index.
///
/// Error behavior:
/// - missing argument returns this command's usage.
/// - unknown names get a plain not-found reply.
/// - remote failures get a short notice and a log line, with no retry.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, rest: Option<&str>) -> anyhow::Result<()> {
    let http = &ctx.http;

    let Some(raw_name) = rest.map(str::trim).filter(|value| !value.is_empty()) else {
        let usage = format!("Usage: `{}`", META.usage);
        http.create_message(msg.channel_id).content(&usage).await?;
        return Ok(());
    };

    let Some(index) = ctx.catalog.resolve_index(raw_name) else {
        let out = format!("`{raw_name}` is not a spell I know.");
        http.create_message(msg.channel_id).content(&out).await?;
        return Ok(());
    };

    let detail = match ctx.api.fetch_spell(index).await {
        Ok(detail) => detail,
        Err(CatalogError::UnknownSpell(_)) => {
            let out = format!("`{raw_name}` is not a spell I know.");
            http.create_message(msg.channel_id).content(&out).await?;
            return Ok(());
        }
        Err(source) => {
            error!(?source, spell = index, "spell detail lookup failed");
            http.create_message(msg.channel_id)
                .content("The spell catalog is unreachable right now. Try again later.")
                .await?;
            return Ok(());
        }
    };

    let embed = build_detail_embed(&detail.name, DETAIL_DESCRIPTION, &detail.field_rows())?;
    http.create_message(msg.channel_id).embeds(&[embed]).await?;

    Ok(())
}
