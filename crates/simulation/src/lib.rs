use bevy::prelude::*;

pub mod agent_protocol;
pub mod ascii_map;
pub mod config;
pub mod game_actions;
pub mod garage;
pub mod garage_observation;
pub mod grid;
pub mod input;
pub mod observation_builder;
pub mod pricing;
pub mod sim_rng;
pub mod time_of_day;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

use config::GarageConfig;
use garage::Garage;
use sim_rng::SimRng;

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Number of `Update` passes since the app started. Tags queued actions.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

fn tick_counter(mut counter: ResMut<TickCounter>) {
    counter.0 += 1;
}

/// Ordering inside `Update`: actions run against the garage, then the
/// observation snapshot is rebuilt.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GarageSet {
    Actions,
    Observe,
}

/// Seed the opening stochastic occupants.
pub fn seed_initial_occupants(
    config: Res<GarageConfig>,
    mut garage: ResMut<Garage>,
    mut rng: ResMut<SimRng>,
) {
    let placed = garage.backfill(config.initial_occupants, &mut rng.0);
    info!(
        "garage opened: {}x{} spots, {} pre-occupied, balance {:.2}, {}",
        config.rows,
        config.cols,
        placed,
        garage.balance(),
        garage.clock().formatted()
    );
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Registers the garage and everything that drives it.
///
/// Insert a `GarageConfig` before adding this plugin to override the
/// defaults. An invalid config is replaced by the default one.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let mut config = app
            .world()
            .get_resource::<GarageConfig>()
            .cloned()
            .unwrap_or_default();
        if let Err(reason) = config.validate() {
            warn!("GarageConfig rejected ({reason}), falling back to defaults");
            config = GarageConfig::default();
        }

        app.insert_resource(Garage::from_config(&config))
            .insert_resource(SimRng::from_seed_u64(config.seed))
            .insert_resource(config)
            .init_resource::<TickCounter>()
            .configure_sets(Update, (GarageSet::Actions, GarageSet::Observe).chain())
            .add_systems(Startup, seed_initial_occupants)
            .add_systems(PreUpdate, tick_counter);

        app.add_plugins((
            game_actions::GameActionsPlugin,
            observation_builder::ObservationPlugin,
        ));
    }
}
