//! A headless garage app plus the queue/update/read cycle both front ends
//! use to run one action.

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;

use simulation::config::GarageConfig;
use simulation::game_actions::{ActionQueue, ActionResult, ActionResultLog, ActionSource, GarageAction};
use simulation::garage::Garage;
use simulation::garage_observation::GarageObservation;
use simulation::observation_builder::CurrentObservation;
use simulation::TickCounter;

pub struct Session {
    app: App,
    source: ActionSource,
}

impl Session {
    /// Build the app with logging on stderr at `level` (`RUST_LOG` still
    /// takes precedence) and run startup.
    pub fn new(config: GarageConfig, source: ActionSource, level: Level) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(LogPlugin {
            level,
            ..default()
        });
        Self::from_app(app, config, source)
    }

    /// Same as [`Session::new`] without installing a log subscriber.
    #[cfg(test)]
    pub fn quiet(config: GarageConfig, source: ActionSource) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        Self::from_app(app, config, source)
    }

    fn from_app(mut app: App, config: GarageConfig, source: ActionSource) -> Self {
        app.insert_resource(config);
        app.add_plugins(simulation::SimulationPlugin);
        app.update();
        Self { app, source }
    }

    /// Queue one action, run one update, return what the executor recorded.
    pub fn act(&mut self, action: GarageAction) -> ActionResult {
        let tick = self.app.world().resource::<TickCounter>().0;
        self.app
            .world_mut()
            .resource_mut::<ActionQueue>()
            .push(tick, self.source, action);
        self.app.update();
        self.app
            .world()
            .resource::<ActionResultLog>()
            .last_result()
            .cloned()
            .unwrap_or(ActionResult::Success)
    }

    pub fn garage(&self) -> &Garage {
        self.app.world().resource::<Garage>()
    }

    pub fn observation(&self) -> GarageObservation {
        self.app
            .world()
            .resource::<CurrentObservation>()
            .observation
            .clone()
    }
}
