//! Navigation button custom-id encoding, parsing, and validation.

use super::controller::Direction;

const TOKEN_PREFIX: &str = "nav";

/// Parsed navigation token data from a button custom id.
///
/// Page state lives server-side in the session registry, so the token only
/// carries routing identity: command family, direction, and session owner.
#[derive(Debug, Clone)]
pub struct NavToken {
    /// Logical command name (e.g. `spells`).
    pub command: String,
    /// Requested navigation direction.
    pub direction: Direction,
    /// User ID that owns this pagination session.
    pub user_id: u64,
}

/// Validation outcome for navigation button presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavValidationError {
    Invalid,
    WrongCommand,
    WrongUser,
}

/// Build a compact custom id for one navigation button.
pub fn build_custom_id(command: &str, direction: Direction, user_id: u64) -> String {
    format!("{TOKEN_PREFIX}:{command}:{}:{user_id}", direction.as_str())
}

/// Parse a navigation custom id.
pub fn parse_custom_id(custom_id: &str) -> Option<NavToken> {
    let mut parts = custom_id.split(':');

    let prefix = parts.next()?;
    if prefix != TOKEN_PREFIX {
        return None;
    }

    let command = parts.next()?.to_owned();
    let direction = Direction::parse(parts.next()?)?;
    let user_id = parts.next()?.parse::<u64>().ok()?;

    if parts.next().is_some() {
        return None;
    }

    Some(NavToken {
        command,
        direction,
        user_id,
    })
}

/// Validate a navigation token for command and session owner.
pub fn validate_custom_id(
    custom_id: &str,
    expected_command: &str,
    actor_user_id: u64,
) -> Result<NavToken, NavValidationError> {
    let token = parse_custom_id(custom_id).ok_or(NavValidationError::Invalid)?;

    if token.command != expected_command {
        return Err(NavValidationError::WrongCommand);
    }

    if token.user_id != actor_user_id {
        return Err(NavValidationError::WrongUser);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_and_parse_round_trip() {
        let custom_id = build_custom_id("spells", Direction::Forward, 42);
        assert_eq!(custom_id, "nav:spells:next:42");

        let token = parse_custom_id(&custom_id).unwrap();
        assert_eq!(token.command, "spells");
        assert_eq!(token.direction, Direction::Forward);
        assert_eq!(token.user_id, 42);
    }

    #[test]
    fn rejects_malformed_custom_ids() {
        assert!(parse_custom_id("pg:spells:next:42").is_none());
        assert!(parse_custom_id("nav:spells:sideways:42").is_none());
        assert!(parse_custom_id("nav:spells:next:not-a-number").is_none());
        assert!(parse_custom_id("nav:spells:next:42:extra").is_none());
        assert!(parse_custom_id("nav:spells:next").is_none());
    }

    #[test]
    fn validates_command_and_owner() {
        let custom_id = build_custom_id("spells", Direction::Backward, 42);

        assert!(validate_custom_id(&custom_id, "spells", 42).is_ok());
        assert!(matches!(
            validate_custom_id(&custom_id, "help", 42),
            Err(NavValidationError::WrongCommand)
        ));
        assert!(matches!(
            validate_custom_id(&custom_id, "spells", 43),
            Err(NavValidationError::WrongUser)
        ));
        assert!(matches!(
            validate_custom_id("garbage", "spells", 42),
            Err(NavValidationError::Invalid)
        ));
    }
}
