//! Engine state, reservation outcomes and the time-advance pipeline.

use std::fmt;

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{GarageConfig, BACKFILL_MAX_HOURS, BACKFILL_MIN_HOURS};
use crate::grid::{Owner, ParkingGrid, Spot, SpotPos};
use crate::pricing::{current_rate, rate_tier, RateTier};
use crate::time_of_day::GameClock;

// =============================================================================
// Outcomes
// =============================================================================

/// A successful reservation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub spot: SpotPos,
    pub hours: u32,
    /// Amount debited from the account.
    pub charged: f64,
    /// Account balance after the debit.
    pub balance: f64,
}

/// Why a reservation was declined. Neither case touches grid or balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReserveError {
    InsufficientFunds { balance: f64, rate: f64 },
    GarageFull,
}

impl fmt::Display for ReserveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReserveError::InsufficientFunds { balance, rate } => write!(
                f,
                "insufficient funds: balance {balance:.2} is below the current rate {rate:.2}"
            ),
            ReserveError::GarageFull => f.write_str("no available parking spots"),
        }
    }
}

impl std::error::Error for ReserveError {}

/// Summary of one `advance_time` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeAdvance {
    pub hours: u32,
    /// Spots whose stay ran out during this advance.
    pub freed: usize,
    /// Stochastic occupants placed after the clock moved.
    pub backfilled: usize,
    pub clock: GameClock,
}

// =============================================================================
// Resource: the garage
// =============================================================================

/// The whole simulation state. Grid, balance and clock change together, so
/// the garage is a single resource and every operation borrows it whole.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Garage {
    grid: ParkingGrid,
    balance: f64,
    clock: GameClock,
}

impl Default for Garage {
    fn default() -> Self {
        Self::from_config(&GarageConfig::default())
    }
}

impl Garage {
    /// Empty `rows x cols` garage with the default balance and clock.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_config(&GarageConfig {
            rows,
            cols,
            ..Default::default()
        })
    }

    pub fn from_config(config: &GarageConfig) -> Self {
        Self {
            grid: ParkingGrid::new(config.rows, config.cols),
            balance: config.starting_balance,
            clock: GameClock::new(config.starting_hour, config.starting_day),
        }
    }

    /// Assemble a garage from explicit parts.
    pub fn from_parts(grid: ParkingGrid, balance: f64, clock: GameClock) -> Self {
        Self {
            grid,
            balance,
            clock,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn clock(&self) -> GameClock {
        self.clock
    }

    pub fn grid(&self) -> &ParkingGrid {
        &self.grid
    }

    /// Nested row snapshot of every spot.
    pub fn grid_snapshot(&self) -> Vec<Vec<Spot>> {
        self.grid.snapshot()
    }

    // -------------------------------------------------------------------------
    // Pricing and allocation
    // -------------------------------------------------------------------------

    pub fn current_rate(&self) -> f64 {
        current_rate(&self.clock)
    }

    pub fn rate_tier(&self) -> RateTier {
        rate_tier(&self.clock)
    }

    pub fn find_first_empty_spot(&self) -> Option<SpotPos> {
        self.grid.first_empty()
    }

    // -------------------------------------------------------------------------
    // Mutating operations
    // -------------------------------------------------------------------------

    /// Reserve the first free spot for `hours` at the current rate.
    ///
    /// Funds are checked before availability. A full garage is reported
    /// without charging.
    pub fn reserve(&mut self, hours: u32) -> Result<Reservation, ReserveError> {
        let rate = self.current_rate();
        if self.balance < rate {
            return Err(ReserveError::InsufficientFunds {
                balance: self.balance,
                rate,
            });
        }

        let spot = self.find_first_empty_spot().ok_or(ReserveError::GarageFull)?;

        self.balance -= rate;
        self.grid.set(spot, Spot::occupied(Owner::User, hours));

        Ok(Reservation {
            spot,
            hours,
            charged: rate,
            balance: self.balance,
        })
    }

    /// Credit the account and return the new balance.
    pub fn top_up(&mut self, amount: f64) -> f64 {
        self.balance += amount;
        self.balance
    }

    /// Occupy up to `count` distinct free spots with stochastic parkers.
    ///
    /// Spots are drawn uniformly from the currently free set, so the request
    /// is clamped to the number of free spots. Returns how many were placed.
    pub fn backfill<R: Rng>(&mut self, count: usize, rng: &mut R) -> usize {
        let free = self.grid.empty_positions();
        let placed = count.min(free.len());
        if placed == 0 {
            return 0;
        }

        let chosen: Vec<SpotPos> = free.choose_multiple(rng, placed).copied().collect();
        for pos in chosen {
            let hours = rng.gen_range(BACKFILL_MIN_HOURS..=BACKFILL_MAX_HOURS);
            self.grid.set(pos, Spot::occupied(Owner::Stochastic, hours));
        }
        placed
    }

    /// Let `hours` pass.
    ///
    /// 1. Every stay loses `hours` at once; stays at or below zero end.
    /// 2. The clock rolls forward hour by hour across midnights.
    /// 3. A random count in `0..=free-1` of stochastic parkers arrive.
    pub fn advance_time<R: Rng>(&mut self, hours: u32, rng: &mut R) -> TimeAdvance {
        let freed = self.grid.decay_all(hours);
        self.clock.advance(hours);

        let free = self.grid.empty_count();
        let arrivals = rng.gen_range(0..=free.saturating_sub(1));
        let backfilled = self.backfill(arrivals, rng);

        debug!(
            "advanced {}h to {}: {} stays ended, {} arrivals",
            hours,
            self.clock.formatted(),
            freed,
            backfilled
        );

        TimeAdvance {
            hours,
            freed,
            backfilled,
            clock: self.clock,
        }
    }

    /// Place a spot directly, bypassing pricing. Used by setup code.
    #[cfg(any(test, feature = "bench"))]
    pub(crate) fn place(&mut self, pos: SpotPos, spot: Spot) -> bool {
        self.grid.set(pos, spot)
    }

    #[cfg(any(test, feature = "bench"))]
    pub(crate) fn set_balance(&mut self, balance: f64) {
        self.balance = balance;
    }

    #[cfg(any(test, feature = "bench"))]
    pub(crate) fn set_clock(&mut self, clock: GameClock) {
        self.clock = clock;
    }
}
