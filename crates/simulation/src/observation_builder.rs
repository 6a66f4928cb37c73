//! Builds a `GarageObservation` snapshot from ECS resources each update.
//!
//! The `build_observation` system runs in `GarageSet::Observe`, after the
//! action executor, so the snapshot always reflects the latest actions.

use bevy::prelude::*;

use crate::garage::Garage;
use crate::garage_observation::{ActionResultEntry, GarageObservation};
use crate::game_actions::ActionResultLog;
use crate::grid::Owner;
use crate::{GarageSet, TickCounter};

/// Number of trailing action results copied into each observation.
const RECENT_RESULTS: usize = 5;

/// The most recent garage observation.
#[derive(Resource, Default, Debug, Clone)]
pub struct CurrentObservation {
    pub observation: GarageObservation,
}

pub fn observe_garage(garage: &Garage, tick: u64, log: &ActionResultLog) -> GarageObservation {
    let clock = garage.clock();
    let grid = garage.grid();
    GarageObservation {
        tick,
        hour: clock.hour,
        day: clock.day,
        balance: garage.balance(),
        rate: garage.current_rate(),
        rate_tier: garage.rate_tier(),
        rows: grid.rows(),
        cols: grid.cols(),
        occupied: grid.occupied_count(),
        empty: grid.empty_count(),
        user_spots: grid.count_owned_by(Owner::User),
        spots: garage.grid_snapshot(),
        recent_action_results: log
            .last_n(RECENT_RESULTS)
            .iter()
            .map(|(action, result)| ActionResultEntry {
                action: action.clone(),
                result: result.clone(),
            })
            .collect(),
    }
}

pub fn build_observation(
    tick: Res<TickCounter>,
    garage: Res<Garage>,
    log: Res<ActionResultLog>,
    mut current: ResMut<CurrentObservation>,
) {
    current.observation = observe_garage(&garage, tick.0, &log);
}

pub struct ObservationPlugin;

impl Plugin for ObservationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentObservation>()
            .add_systems(Update, build_observation.in_set(GarageSet::Observe));
    }
}
