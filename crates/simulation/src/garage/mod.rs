//! Garage simulation engine.
//!
//! A [`Garage`] owns the spot grid, the account balance and the calendar
//! clock. All mutation goes through its methods:
//!
//! - **reserve**: charge the current rate and park the user in the first
//!   free spot (row-major). The fee check runs before the availability
//!   check, and a full garage never charges.
//! - **top_up**: credit the account.
//! - **advance_time**: decay every stay by the elapsed hours, roll the
//!   clock, then backfill a random number of free spots with stochastic
//!   occupants, always leaving at least one spot free.
//! - **backfill**: occupy distinct free spots chosen uniformly at random,
//!   each for 3-10 hours.
//!
//! Randomness is injected as `&mut impl Rng` so runs are reproducible.

pub mod state;

#[cfg(test)]
mod tests_state;

pub use state::*;
