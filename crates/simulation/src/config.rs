use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::time_of_day::Weekday;

pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 5;
pub const STARTING_BALANCE: f64 = 50.0;
pub const STARTING_HOUR: u32 = 12;
pub const STARTING_DAY: Weekday = Weekday::Monday;
pub const HOURS_PER_DAY: u32 = 24;

/// Flat per-reservation price before the time-of-day multiplier.
pub const BASE_RATE: f64 = 10.0;

/// First and last hour (both inclusive) of the daytime pricing window.
pub const DAYTIME_START_HOUR: u32 = 8;
pub const DAYTIME_END_HOUR: u32 = 17;

pub const WEEKDAY_DAYTIME_MULTIPLIER: f64 = 1.5;
pub const WEEKEND_DAYTIME_MULTIPLIER: f64 = 1.0;
pub const OFF_PEAK_MULTIPLIER: f64 = 0.75;

/// Stay length (inclusive range) drawn for each stochastic occupant.
pub const BACKFILL_MIN_HOURS: u32 = 3;
pub const BACKFILL_MAX_HOURS: u32 = 10;

/// Stochastic occupants placed when a garage is first opened.
pub const INITIAL_OCCUPANTS: usize = 8;

pub const DEFAULT_SEED: u64 = 42;

/// Largest garage a config may ask for.
pub const MAX_SPOTS: usize = 1_000_000;

/// Runtime configuration for a garage session.
///
/// Defaults mirror the constants above. The binary overrides individual
/// fields from CLI flags before inserting this resource.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GarageConfig {
    pub rows: usize,
    pub cols: usize,
    pub starting_balance: f64,
    pub starting_hour: u32,
    pub starting_day: Weekday,
    /// Stochastic occupants seeded at startup and on every new game.
    pub initial_occupants: usize,
    pub seed: u64,
}

impl Default for GarageConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            starting_balance: STARTING_BALANCE,
            starting_hour: STARTING_HOUR,
            starting_day: STARTING_DAY,
            initial_occupants: INITIAL_OCCUPANTS,
            seed: DEFAULT_SEED,
        }
    }
}

impl GarageConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.rows == 0 || self.cols == 0 {
            return Err(format!(
                "grid must have at least one spot, got {}x{}",
                self.rows, self.cols
            ));
        }
        match self.rows.checked_mul(self.cols) {
            Some(spots) if spots <= MAX_SPOTS => {}
            _ => {
                return Err(format!(
                    "grid of {}x{} exceeds the {MAX_SPOTS} spot limit",
                    self.rows, self.cols
                ));
            }
        }
        if self.starting_hour >= HOURS_PER_DAY {
            return Err(format!(
                "starting hour must be in 0..{HOURS_PER_DAY}, got {}",
                self.starting_hour
            ));
        }
        if !self.starting_balance.is_finite() {
            return Err("starting balance must be a finite number".to_string());
        }
        Ok(())
    }

    pub fn spot_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }
}
