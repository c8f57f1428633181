pub mod spells;
pub mod utility;

use twilight_model::{
    application::interaction::InteractionData,
    gateway::payload::incoming::{InteractionCreate, MessageCreate},
};

use spellbook_core::Context;
use spellbook_utils::COMMAND_PREFIX;

#[derive(Clone, Copy)]
enum InteractionRoute {
    SpellBrowseButtons,
    HelpButtons,
}

fn route_interaction(custom_id: &str) -> Option<InteractionRoute> {
    const ROUTES: [(&str, InteractionRoute); 2] = [
        ("nav:spells:", InteractionRoute::SpellBrowseButtons),
        ("nav:help:", InteractionRoute::HelpButtons),
    ];

    ROUTES
        .into_iter()
        .find_map(|(prefix, route)| custom_id.starts_with(prefix).then_some(route))
}

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    spells::browse::META,
    spells::lookup::META,
    utility::help::META,
    utility::usage::META,
    utility::ping::META,
    // Add new commands here
];

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content_owned = msg.content.clone();
    let content = content_owned.trim();

    if !content.starts_with(COMMAND_PREFIX) {
        return Ok(());
    }

    let content = content.trim_start_matches(COMMAND_PREFIX).trim();
    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let rest = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let arg1 = rest.and_then(|value| {
        value
            .split_whitespace()
            .next()
            .filter(|arg| !arg.is_empty())
    });

    match cmd.as_str() {
        "spells" => spells::browse::run(ctx.clone(), msg).await?,
        "spell" => spells::lookup::run(ctx.clone(), msg, rest).await?,
        "help" => utility::help::run(ctx.clone(), msg).await?,
        "usage" => utility::usage::run(ctx.clone(), msg, arg1).await?,
        "ping" => utility::ping::run(ctx.clone(), msg).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}

pub async fn handle_interaction(
    ctx: Context,
    interaction: Box<InteractionCreate>,
) -> anyhow::Result<()> {
    let custom_id = match interaction.data.as_ref() {
        Some(InteractionData::MessageComponent(data)) => data.custom_id.clone(),
        _ => return Ok(()),
    };

    let Some(route) = route_interaction(&custom_id) else {
        return Ok(());
    };

    match route {
        InteractionRoute::SpellBrowseButtons => {
            let _handled =
                spells::browse::handle_navigation_interaction(ctx.clone(), interaction).await?;
        }
        InteractionRoute::HelpButtons => {
            let _handled =
                utility::help::handle_navigation_interaction(ctx.clone(), interaction).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_navigation_custom_ids_by_prefix() {
        assert!(matches!(
            route_interaction("nav:spells:next:42"),
            Some(InteractionRoute::SpellBrowseButtons)
        ));
        assert!(matches!(
            route_interaction("nav:help:prev:42"),
            Some(InteractionRoute::HelpButtons)
        ));
        assert!(route_interaction("nav:unknown:next:42").is_none());
        assert!(route_interaction("terminate:42").is_none());
    }

    #[test]
    fn command_names_are_unique() {
        for (position, command) in COMMANDS.iter().enumerate() {
            assert!(
                COMMANDS
                    .iter()
                    .skip(position + 1)
                    .all(|other| other.name != command.name),
                "duplicate command name: {}",
                command.name
            );
        }
    }
}
