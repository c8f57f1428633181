use std::env;
use std::sync::Arc;

use tracing::{error, info};
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::event::Event;

use rustls::crypto::ring::default_provider;

use spellbook_catalog::{DEFAULT_API_BASE_URL, SpellApi};
use spellbook_commands::{handle_interaction, handle_message};
use spellbook_core::Context;
use spellbook_utils::pagination::SessionRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    // Store Discord Bot Token
    let token = env::var("DISCORD_TOKEN")?;
    let api_base_url =
        env::var("SPELL_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_owned());

    // Create a single shared HTTP Client
    let http = Arc::new(Client::new(token.clone()));

    // Fetch the spell catalog once; it stays immutable for the process lifetime
    let api = SpellApi::new(api_base_url);
    let catalog = api.fetch_catalog().await?;
    info!(spells = catalog.len(), "Spell catalog ready.");

    let ctx = Context::new(
        Arc::clone(&http),
        Arc::new(catalog),
        api,
        SessionRegistry::new(),
    );

    // Declare which intents the bot has
    let intents = Intents::GUILDS | Intents::GUILD_MESSAGES | Intents::MESSAGE_CONTENT;

    // A shard is one Gateway WebSocket connection to Discord
    // Declare how many shards we want to be running and input our token and intents
    let mut shard = Shard::new(ShardId::new(0, 1), token, intents);

    info!("Spellbook is connecting...");

    // Our ears, listens for stuff to do
    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        match event {
            Event::Ready(_) => {
                info!("Spellbook has successfully awoken!");
            }

            Event::MessageCreate(msg) => {
                handle_message(ctx.clone(), msg).await?;
            }
            Event::InteractionCreate(interaction) => {
                handle_interaction(ctx.clone(), interaction).await?;
            }
            _ => {} // Ignore unused events
        }
    }
    Ok(()) // Return Success, shutdown cleanly
}
