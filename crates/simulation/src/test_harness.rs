//! # TestGarage: headless integration test harness
//!
//! Provides a fluent builder that wraps `bevy::app::App` + `SimulationPlugin`
//! for running integration tests without any front end.

use bevy::app::App;
use bevy::prelude::*;

use crate::config::GarageConfig;
use crate::game_actions::{ActionQueue, ActionResult, ActionResultLog, ActionSource, GarageAction};
use crate::garage::Garage;
use crate::garage_observation::GarageObservation;
use crate::grid::{Owner, Spot, SpotPos};
use crate::observation_builder::CurrentObservation;
use crate::time_of_day::{GameClock, Weekday};
use crate::{SimulationPlugin, TickCounter};

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Use builder methods to set up garage state, then `act()` / `advance()` to
/// push actions through the executor and inspect the result.
pub struct TestGarage {
    app: App,
}

impl Default for TestGarage {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGarage {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// An **empty** 5x5 garage at noon on Monday with a balance of 50. No
    /// stochastic occupants are seeded.
    pub fn new() -> Self {
        Self::with_config(GarageConfig {
            initial_occupants: 0,
            ..Default::default()
        })
    }

    /// A garage built from an explicit config, including its opening
    /// occupancy.
    pub fn with_config(config: GarageConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(config);
        app.add_plugins(SimulationPlugin);
        // Run one update so Startup systems execute.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // World setup (builder pattern: consumes and returns Self)
    // -----------------------------------------------------------------------

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.garage_mut().set_balance(balance);
        self
    }

    pub fn with_clock(mut self, hour: u32, day: Weekday) -> Self {
        self.garage_mut().set_clock(GameClock::new(hour, day));
        self
    }

    pub fn with_spot(mut self, row: usize, col: usize, owner: Owner, hours: u32) -> Self {
        self.garage_mut()
            .place(SpotPos::new(row, col), Spot::occupied(owner, hours));
        self
    }

    /// Occupy every spot with `owner` for `hours`.
    pub fn fill_all(mut self, owner: Owner, hours: u32) -> Self {
        let (rows, cols) = {
            let grid = self.garage().grid();
            (grid.rows(), grid.cols())
        };
        let mut garage = self.garage_mut();
        for r in 0..rows {
            for c in 0..cols {
                garage.place(SpotPos::new(r, c), Spot::occupied(owner, hours));
            }
        }
        self
    }

    // -----------------------------------------------------------------------
    // Driving the app
    // -----------------------------------------------------------------------

    /// Queue one action, run an update, return its result.
    pub fn act(&mut self, action: GarageAction) -> ActionResult {
        let tick = self.tick_count();
        self.app
            .world_mut()
            .resource_mut::<ActionQueue>()
            .push(tick, ActionSource::Player, action);
        self.app.update();
        self.app
            .world()
            .resource::<ActionResultLog>()
            .last_result()
            .cloned()
            .unwrap_or(ActionResult::Success)
    }

    pub fn reserve(&mut self, hours: u32) -> ActionResult {
        self.act(GarageAction::Reserve { hours })
    }

    pub fn top_up(&mut self, amount: u32) -> ActionResult {
        self.act(GarageAction::TopUp { amount })
    }

    pub fn advance(&mut self, hours: u32) -> ActionResult {
        self.act(GarageAction::AdvanceTime { hours })
    }

    /// Run `n` updates with nothing queued.
    pub fn update(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn garage(&self) -> &Garage {
        self.app.world().resource::<Garage>()
    }

    fn garage_mut(&mut self) -> Mut<'_, Garage> {
        self.app.world_mut().resource_mut::<Garage>()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn observation(&self) -> &GarageObservation {
        &self.app.world().resource::<CurrentObservation>().observation
    }

    pub fn tick_count(&self) -> u64 {
        self.app.world().resource::<TickCounter>().0
    }

    pub fn balance(&self) -> f64 {
        self.garage().balance()
    }

    pub fn clock(&self) -> GameClock {
        self.garage().clock()
    }

    pub fn spot(&self, row: usize, col: usize) -> Spot {
        self.garage()
            .grid()
            .get(SpotPos::new(row, col))
            .copied()
            .unwrap_or_else(|| panic!("spot ({row}, {col}) out of bounds"))
    }

    pub fn empty_count(&self) -> usize {
        self.garage().grid().empty_count()
    }

    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    pub fn assert_balance(&self, expected: f64) {
        let balance = self.balance();
        assert!(
            (balance - expected).abs() < 1e-9,
            "Expected balance {expected}, got {balance}"
        );
    }

    pub fn assert_spot(&self, row: usize, col: usize, expected: Spot) {
        let spot = self.spot(row, col);
        assert_eq!(spot, expected, "Unexpected contents at ({row}, {col})");
    }

    pub fn assert_clock(&self, hour: u32, day: Weekday) {
        let clock = self.clock();
        assert_eq!(
            clock,
            GameClock::new(hour, day),
            "Expected {day} {hour:02}:00, got {}",
            clock.formatted()
        );
    }
}
