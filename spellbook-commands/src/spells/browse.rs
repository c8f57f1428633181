use std::sync::Arc;

use twilight_model::gateway::payload::incoming::{InteractionCreate, MessageCreate};

use crate::CommandMeta;
use spellbook_core::Context;
use spellbook_utils::pagination::{
    DEFAULT_TIMEOUT_SECS, DisplayRenderer, NavInteractionValidation, NavigationController,
    SessionError, build_navigable_view, respond_session_expired, send_navigable_message,
    update_navigable_interaction_message, validate_navigation_interaction,
};

pub const META: CommandMeta = CommandMeta {
    name: "spells",
    desc: "Browse every spell name in the catalog.",
    usage: "!spells",
};

/// Number of spell names shown per page.
const SPELLS_PER_PAGE: usize = 20;

const BROWSE_TITLE_BASE: &str = "Spells";

/// Open a paginated browse of all spell names.
///
/// Starts on the first page. An empty catalog still opens a view with zero
/// entries and both buttons disabled.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let names = Arc::new(ctx.catalog.names());
    let controller = NavigationController::new(
        names,
        SPELLS_PER_PAGE,
        DisplayRenderer::new(BROWSE_TITLE_BASE),
    );

    send_navigable_message(
        Arc::clone(&ctx.http),
        ctx.sessions.clone(),
        msg.channel_id,
        META.name,
        controller,
        msg.author.id.get(),
        DEFAULT_TIMEOUT_SECS,
    )
    .await?;

    Ok(())
}

/// Handle navigation button presses for the `spells` browse view.
pub async fn handle_navigation_interaction(
    ctx: Context,
    interaction: Box<InteractionCreate>,
) -> anyhow::Result<bool> {
    let http = &ctx.http;
    let (actor_id, session_id, direction) =
        match validate_navigation_interaction(http, &interaction, META.name).await? {
            NavInteractionValidation::NotForCommand => return Ok(false),
            NavInteractionValidation::HandledInvalid => return Ok(true),
            NavInteractionValidation::Valid {
                actor_user_id,
                session_id,
                direction,
            } => (actor_user_id, session_id, direction),
        };

    let output = match ctx.sessions.handle(session_id, direction).await {
        Ok(output) => output,
        Err(SessionError::Stale(_)) => {
            respond_session_expired(http, &interaction).await?;
            return Ok(true);
        }
    };

    let (embed, components) = build_navigable_view(META.name, &output, actor_id)?;

    update_navigable_interaction_message(
        Arc::clone(&ctx.http),
        ctx.sessions.clone(),
        &interaction,
        embed,
        components,
        DEFAULT_TIMEOUT_SECS,
    )
    .await?;

    Ok(true)
}
