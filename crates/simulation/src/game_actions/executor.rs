//! Action executor system: drains the [`ActionQueue`] each update and applies
//! every queued [`GarageAction`] to the [`Garage`], recording results in the
//! [`ActionResultLog`].
//!
//! Inputs are validated here, so the engine only ever sees positive values.

use bevy::prelude::*;

use crate::config::GarageConfig;
use crate::garage::Garage;
use crate::input::require_positive;
use crate::sim_rng::SimRng;

use super::result_log::ActionResultLog;
use super::{ActionError, ActionQueue, ActionResult, GarageAction, QueuedAction};

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Drains all pending actions from the queue and executes them in order.
pub fn execute_queued_actions(
    mut queue: ResMut<ActionQueue>,
    mut log: ResMut<ActionResultLog>,
    mut garage: ResMut<Garage>,
    mut rng: ResMut<SimRng>,
    config: Res<GarageConfig>,
) {
    for queued in queue.drain() {
        let result = execute_single(&queued.action, &mut garage, &mut rng, &config);
        log_outcome(&queued, &result);
        log.push(queued.action, result);
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

pub(crate) fn execute_single(
    action: &GarageAction,
    garage: &mut Garage,
    rng: &mut SimRng,
    config: &GarageConfig,
) -> ActionResult {
    match action {
        GarageAction::Reserve { hours } => execute_reserve(*hours, garage),
        GarageAction::TopUp { amount } => execute_top_up(*amount, garage),
        GarageAction::AdvanceTime { hours } => execute_advance_time(*hours, garage, rng),
        GarageAction::NewGame { seed } => execute_new_game(*seed, garage, rng, config),
    }
}

fn execute_reserve(hours: u32, garage: &mut Garage) -> ActionResult {
    let hours = match require_positive("duration", hours) {
        Ok(h) => h,
        Err(e) => return ActionResult::Error(e),
    };
    match garage.reserve(hours) {
        Ok(reservation) => ActionResult::Reserved(reservation),
        Err(e) => ActionResult::Error(ActionError::from(e)),
    }
}

fn execute_top_up(amount: u32, garage: &mut Garage) -> ActionResult {
    match require_positive("amount", amount) {
        Ok(amount) => ActionResult::BalanceUpdated {
            balance: garage.top_up(f64::from(amount)),
        },
        Err(e) => ActionResult::Error(e),
    }
}

fn execute_advance_time(hours: u32, garage: &mut Garage, rng: &mut SimRng) -> ActionResult {
    match require_positive("hours", hours) {
        Ok(hours) => ActionResult::TimeAdvanced(garage.advance_time(hours, &mut rng.0)),
        Err(e) => ActionResult::Error(e),
    }
}

fn execute_new_game(
    seed: u64,
    garage: &mut Garage,
    rng: &mut SimRng,
    config: &GarageConfig,
) -> ActionResult {
    *garage = Garage::from_config(config);
    rng.reseed(seed);
    let placed = garage.backfill(config.initial_occupants, &mut rng.0);
    info!("new garage session (seed {seed}), {placed} spots pre-occupied");
    ActionResult::Success
}

fn log_outcome(queued: &QueuedAction, result: &ActionResult) {
    match result {
        ActionResult::Reserved(r) => info!(
            "{:?}: reserved ({}, {}) for {}h, charged {:.2}, balance {:.2}",
            queued.source, r.spot.row, r.spot.col, r.hours, r.charged, r.balance
        ),
        ActionResult::BalanceUpdated { balance } => {
            info!("{:?}: balance topped up to {:.2}", queued.source, balance)
        }
        ActionResult::TimeAdvanced(t) => info!(
            "{:?}: advanced {}h to {}, {} freed, {} backfilled",
            queued.source,
            t.hours,
            t.clock.formatted(),
            t.freed,
            t.backfilled
        ),
        ActionResult::Success => {}
        ActionResult::Error(e) => info!(
            "{:?}: {} declined: {}",
            queued.source,
            queued.action.name(),
            e
        ),
    }
}
