use std::fmt;

use serde::{Deserialize, Serialize};

use crate::garage::{Reservation, ReserveError, TimeAdvance};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionResult {
    Success,
    Reserved(Reservation),
    BalanceUpdated { balance: f64 },
    TimeAdvanced(TimeAdvance),
    Error(ActionError),
}

impl ActionResult {
    /// Everything except `Error` counts as success.
    pub fn is_success(&self) -> bool {
        !matches!(self, ActionResult::Error(_))
    }

    pub fn error(&self) -> Option<&ActionError> {
        match self {
            ActionResult::Error(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionError {
    InsufficientFunds,
    GarageFull,
    /// Rejected at the boundary before the garage was consulted.
    InvalidInput(String),
}

impl From<ReserveError> for ActionError {
    fn from(err: ReserveError) -> Self {
        match err {
            ReserveError::InsufficientFunds { .. } => ActionError::InsufficientFunds,
            ReserveError::GarageFull => ActionError::GarageFull,
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::InsufficientFunds => {
                f.write_str("Insufficient funds to reserve the parking spot.")
            }
            ActionError::GarageFull => f.write_str("No available parking spots."),
            ActionError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for ActionError {}
