use serde::{Deserialize, Serialize};

/// Every state change a front end can request from the garage.
///
/// Field values arrive unvalidated; the executor rejects zero durations and
/// amounts with `ActionError::InvalidInput` before touching the garage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GarageAction {
    Reserve {
        hours: u32,
    },
    TopUp {
        amount: u32,
    },
    AdvanceTime {
        hours: u32,
    },
    /// Rebuild the garage from `GarageConfig` and reseed the RNG.
    NewGame {
        seed: u64,
    },
}

impl GarageAction {
    pub fn name(&self) -> &'static str {
        match self {
            GarageAction::Reserve { .. } => "reserve",
            GarageAction::TopUp { .. } => "top_up",
            GarageAction::AdvanceTime { .. } => "advance_time",
            GarageAction::NewGame { .. } => "new_game",
        }
    }
}
