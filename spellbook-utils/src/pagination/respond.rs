//! Shared interaction response helpers for navigation flows.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use twilight_http::Client;
use twilight_model::{
    channel::message::{MessageFlags, component::Component, embed::Embed},
    gateway::payload::incoming::InteractionCreate,
    http::interaction::{InteractionResponse, InteractionResponseType},
    id::{
        Id,
        marker::{ChannelMarker, MessageMarker},
    },
};
use twilight_util::builder::InteractionResponseDataBuilder;

use super::controller::NavigationController;
use super::session::SessionRegistry;
use super::view::build_navigable_view;

/// Generic message shown when a navigation interaction belongs to another user.
pub const NAV_WRONG_USER_MESSAGE: &str = "This pagination session belongs to another user.";
/// Generic message shown when a navigation session has expired.
pub const NAV_SESSION_EXPIRED_MESSAGE: &str =
    "This pagination session expired. Run the command again.";
/// Generic message shown when a navigation interaction payload is invalid.
pub const NAV_INVALID_MESSAGE: &str = "Invalid pagination interaction.";

/// Respond to a component interaction with an in-place message update.
pub async fn respond_update_message(
    http: &Client,
    interaction: &InteractionCreate,
    embeds: &[Embed],
    components: &[Component],
) -> anyhow::Result<()> {
    let response = InteractionResponse {
        kind: InteractionResponseType::UpdateMessage,
        data: Some(
            InteractionResponseDataBuilder::new()
                .embeds(embeds.to_vec())
                .components(components.to_vec())
                .build(),
        ),
    };

    http.interaction(interaction.application_id)
        .create_response(interaction.id, &interaction.token, &response)
        .await?;

    Ok(())
}

/// Respond to a component interaction with an ephemeral message.
pub async fn respond_ephemeral_message(
    http: &Client,
    interaction: &InteractionCreate,
    content: &str,
) -> anyhow::Result<()> {
    let response = InteractionResponse {
        kind: InteractionResponseType::ChannelMessageWithSource,
        data: Some(
            InteractionResponseDataBuilder::new()
                .content(content)
                .flags(MessageFlags::EPHEMERAL)
                .build(),
        ),
    };

    http.interaction(interaction.application_id)
        .create_response(interaction.id, &interaction.token, &response)
        .await?;

    Ok(())
}

/// Respond with the standard wrong-owner navigation message.
pub async fn respond_wrong_user(
    http: &Client,
    interaction: &InteractionCreate,
) -> anyhow::Result<()> {
    respond_ephemeral_message(http, interaction, NAV_WRONG_USER_MESSAGE).await
}

/// Respond with the standard expired-session navigation message.
pub async fn respond_session_expired(
    http: &Client,
    interaction: &InteractionCreate,
) -> anyhow::Result<()> {
    respond_ephemeral_message(http, interaction, NAV_SESSION_EXPIRED_MESSAGE).await
}

/// Respond with the standard invalid navigation message.
pub async fn respond_invalid(http: &Client, interaction: &InteractionCreate) -> anyhow::Result<()> {
    respond_ephemeral_message(http, interaction, NAV_INVALID_MESSAGE).await
}

/// Send a new navigable message, register its session, and schedule expiry.
pub async fn send_navigable_message(
    http: Arc<Client>,
    sessions: SessionRegistry,
    channel_id: Id<ChannelMarker>,
    command: &str,
    controller: NavigationController,
    owner_user_id: u64,
    timeout_secs: u64,
) -> anyhow::Result<()> {
    let output = controller.current_output();
    let (embed, components) = build_navigable_view(command, &output, owner_user_id)?;

    let created_message = http
        .create_message(channel_id)
        .embeds(&[embed])
        .components(&components)
        .await?
        .model()
        .await?;

    sessions
        .register(created_message.id.get(), controller)
        .await;
    schedule_session_expiry(
        http,
        sessions,
        created_message.channel_id,
        created_message.id,
        timeout_secs,
    )
    .await;

    Ok(())
}

/// Update an existing navigable interaction message and refresh its expiry.
pub async fn update_navigable_interaction_message(
    http: Arc<Client>,
    sessions: SessionRegistry,
    interaction: &InteractionCreate,
    embed: Embed,
    components: Vec<Component>,
    timeout_secs: u64,
) -> anyhow::Result<()> {
    respond_update_message(&http, interaction, &[embed], &components).await?;

    if let Some(message) = interaction.message.as_ref() {
        schedule_session_expiry(http, sessions, message.channel_id, message.id, timeout_secs)
            .await;
    }

    Ok(())
}

/// Schedule session teardown: drop the registry entry and strip the buttons.
///
/// Rescheduling replaces the pending task, so the deadline resets on every
/// navigation.
pub async fn schedule_session_expiry(
    http: Arc<Client>,
    sessions: SessionRegistry,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
    timeout_secs: u64,
) {
    let session_id = message_id.get();
    let registry = sessions.clone();

    let expiry_task = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(timeout_secs)).await;

        if registry.expire(session_id).await {
            debug!(session_id, "pagination session expired");
        }

        let empty_components: [Component; 0] = [];
        let _ = http
            .update_message(channel_id, message_id)
            .components(Some(&empty_components))
            .await;
    });

    sessions.set_expiry(session_id, expiry_task).await;
}
