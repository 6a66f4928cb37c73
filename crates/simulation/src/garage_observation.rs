//! Compact, typed, serializable snapshot of the garage state.
//!
//! `GarageObservation` is what front ends read after every update: the
//! clock, the account, the current price and every spot, in one value.

use serde::{Deserialize, Serialize};

use crate::game_actions::{ActionResult, GarageAction};
use crate::grid::Spot;
use crate::pricing::RateTier;
use crate::time_of_day::Weekday;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarageObservation {
    // -- Time ---------------------------------------------------------------
    pub tick: u64,
    pub hour: u32,
    pub day: Weekday,

    // -- Account ------------------------------------------------------------
    pub balance: f64,
    pub rate: f64,
    pub rate_tier: RateTier,

    // -- Occupancy ----------------------------------------------------------
    pub rows: usize,
    pub cols: usize,
    pub occupied: usize,
    pub empty: usize,
    pub user_spots: usize,
    pub spots: Vec<Vec<Spot>>,

    // -- Recent action results (newest last) --------------------------------
    pub recent_action_results: Vec<ActionResultEntry>,
}

impl Default for GarageObservation {
    fn default() -> Self {
        Self {
            tick: 0,
            hour: 0,
            day: Weekday::Monday,
            balance: 0.0,
            rate: 0.0,
            rate_tier: RateTier::OffPeak,
            rows: 0,
            cols: 0,
            occupied: 0,
            empty: 0,
            user_spots: 0,
            spots: Vec::new(),
            recent_action_results: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResultEntry {
    pub action: GarageAction,
    pub result: ActionResult,
}
