//! Embed and component composition for navigable displays.

use twilight_model::channel::message::component::{ActionRow, Button, ButtonStyle, Component};
use twilight_model::channel::message::embed::Embed;

use crate::embed::build_payload_embed;

use super::controller::{ControllerOutput, Direction, NavigableAction};
use super::token::build_custom_id;

/// Build the full replacement view (embed + button row) for a controller output.
pub fn build_navigable_view(
    command: &str,
    output: &ControllerOutput,
    owner_user_id: u64,
) -> anyhow::Result<(Embed, Vec<Component>)> {
    let embed = build_payload_embed(&output.payload)?;
    let components = build_nav_components(command, &output.actions, owner_user_id);

    Ok((embed, components))
}

/// Build the previous/next button row from the controller's action records.
///
/// Availability comes only from the tagged `NavigableAction` pair; buttons
/// are never toggled by inspecting the rendered message. A single-page view
/// still gets the row, with both buttons disabled.
pub fn build_nav_components(
    command: &str,
    actions: &[NavigableAction; 2],
    owner_user_id: u64,
) -> Vec<Component> {
    let buttons = actions
        .iter()
        .map(|action| {
            let label = match action.direction {
                Direction::Backward => "◀ Prev",
                Direction::Forward => "Next ▶",
            };

            Component::Button(Button {
                custom_id: Some(build_custom_id(command, action.direction, owner_user_id)),
                disabled: !action.enabled,
                emoji: None,
                label: Some(label.to_owned()),
                style: ButtonStyle::Secondary,
                url: None,
                sku_id: None,
            })
        })
        .collect();

    vec![Component::ActionRow(ActionRow {
        components: buttons,
    })]
}
