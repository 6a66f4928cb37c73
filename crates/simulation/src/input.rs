//! Boundary validation for values typed or sent by a front end.
//!
//! The garage assumes whole, positive durations and amounts. Anything else is
//! turned into [`ActionError::InvalidInput`] here, before an action reaches
//! the engine.

use crate::game_actions::ActionError;

/// Parse a strictly positive whole number from user text.
pub fn parse_positive(field: &str, raw: &str) -> Result<u32, ActionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ActionError::InvalidInput(format!(
            "please enter a value for {field}"
        )));
    }
    let value: i64 = trimmed.parse().map_err(|_| {
        ActionError::InvalidInput(format!("{field} must be a whole number, got '{trimmed}'"))
    })?;
    if value < 1 {
        return Err(ActionError::InvalidInput(format!(
            "{field} must be positive, got {value}"
        )));
    }
    let value = u32::try_from(value).map_err(|_| {
        ActionError::InvalidInput(format!("{field} must be at most {}, got {value}", u32::MAX))
    })?;
    require_positive(field, value)
}

/// Reject zero.
pub fn require_positive(field: &str, value: u32) -> Result<u32, ActionError> {
    if value == 0 {
        Err(ActionError::InvalidInput(format!(
            "{field} must be greater than zero"
        )))
    } else {
        Ok(value)
    }
}
