//! Interaction validation orchestration for navigation button handlers.

use twilight_http::Client;
use twilight_model::application::interaction::InteractionData;
use twilight_model::gateway::payload::incoming::InteractionCreate;

use super::controller::Direction;
use super::respond::{respond_ephemeral_message, respond_invalid, respond_wrong_user};
use super::token::{NavValidationError, validate_custom_id};

/// Outcome when validating whether an interaction belongs to a navigation command.
#[derive(Debug, Clone, Copy)]
pub enum NavInteractionValidation {
    /// Interaction does not target the given command's navigation buttons.
    NotForCommand,
    /// Interaction was invalid and already acknowledged with a user-facing response.
    HandledInvalid,
    /// Interaction is valid: the owning session and the requested direction.
    Valid {
        actor_user_id: u64,
        session_id: u64,
        direction: Direction,
    },
}

/// Validate whether an interaction is a navigation button press for `command`.
///
/// Returns:
/// - `NotForCommand` when the interaction should be ignored by this handler,
/// - `HandledInvalid` when it was invalid and already acknowledged,
/// - `Valid` with the session id (the message being navigated) and direction.
pub async fn validate_navigation_interaction(
    http: &Client,
    interaction: &InteractionCreate,
    command: &str,
) -> anyhow::Result<NavInteractionValidation> {
    let Some(InteractionData::MessageComponent(component_data)) = interaction.data.as_ref() else {
        return Ok(NavInteractionValidation::NotForCommand);
    };

    let expected_prefix = format!("nav:{command}:");
    if !component_data.custom_id.starts_with(&expected_prefix) {
        return Ok(NavInteractionValidation::NotForCommand);
    }

    let Some(actor_user_id) = interaction.author_id().map(|id| id.get()) else {
        respond_ephemeral_message(http, interaction, "Unable to determine interaction user.")
            .await?;
        return Ok(NavInteractionValidation::HandledInvalid);
    };

    let Some(session_id) = interaction.message.as_ref().map(|message| message.id.get()) else {
        respond_invalid(http, interaction).await?;
        return Ok(NavInteractionValidation::HandledInvalid);
    };

    match validate_custom_id(&component_data.custom_id, command, actor_user_id) {
        Ok(token) => Ok(NavInteractionValidation::Valid {
            actor_user_id,
            session_id,
            direction: token.direction,
        }),
        Err(NavValidationError::WrongUser) => {
            respond_wrong_user(http, interaction).await?;
            Ok(NavInteractionValidation::HandledInvalid)
        }
        Err(_) => {
            respond_invalid(http, interaction).await?;
            Ok(NavInteractionValidation::HandledInvalid)
        }
    }
}
