use std::sync::Arc;

use twilight_model::gateway::payload::incoming::{InteractionCreate, MessageCreate};

use crate::{COMMANDS, CommandMeta};
use spellbook_core::Context;
use spellbook_utils::pagination::{
    DEFAULT_TIMEOUT_SECS, DisplayRenderer, NavInteractionValidation, NavigationController,
    SessionError, build_navigable_view, respond_session_expired, send_navigable_message,
    update_navigable_interaction_message, validate_navigation_interaction,
};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    usage: "!help",
};

const HELP_COMMANDS_PER_PAGE: usize = 10;

const HELP_TITLE_BASE: &str = "Commands";

fn command_lines() -> Vec<String> {
    COMMANDS
        .iter()
        .map(|command| format!("`{}`: {}", command.usage, command.desc))
        .collect()
}

/// Render the command catalog through the same pagination sessions the spell
/// browse uses.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let controller = NavigationController::new(
        Arc::new(command_lines()),
        HELP_COMMANDS_PER_PAGE,
        DisplayRenderer::new(HELP_TITLE_BASE),
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

/// Handle navigation button presses for the `help` command list.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_gets_a_help_line() {
        let lines = command_lines();

        assert_eq!(lines.len(), COMMANDS.len());
        assert!(lines.iter().any(|line| line.contains("!spells")));
        assert!(lines.iter().any(|line| line.contains("!spell <name>")));
    }
}
