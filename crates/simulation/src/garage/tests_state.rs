//! Tests for the garage engine: reservation ordering, decay, clock roll and
//! stochastic backfill.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;

use crate::grid::{Owner, ParkingGrid, Spot, SpotPos};
use crate::time_of_day::{GameClock, Weekday};

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(1234)
}

fn garage_at(balance: f64, hour: u32, day: Weekday) -> Garage {
    Garage::from_parts(ParkingGrid::new(5, 5), balance, GameClock::new(hour, day))
}

fn fill_all(garage: &mut Garage, owner: Owner, hours: u32) {
    let (rows, cols) = (garage.grid().rows(), garage.grid().cols());
    for r in 0..rows {
        for c in 0..cols {
            garage.place(SpotPos::new(r, c), Spot::occupied(owner, hours));
        }
    }
}

// -------------------------------------------------------------------------
// Construction
// -------------------------------------------------------------------------

#[test]
fn test_default_garage_matches_opening_state() {
    let garage = Garage::default();
    assert_eq!(garage.grid().rows(), 5);
    assert_eq!(garage.grid().cols(), 5);
    assert_eq!(garage.grid().empty_count(), 25);
    assert!((garage.balance() - 50.0).abs() < f64::EPSILON);
    assert_eq!(garage.clock(), GameClock::new(12, Weekday::Monday));
}

// -------------------------------------------------------------------------
// Reservation
// -------------------------------------------------------------------------

#[test]
fn test_reserve_weekday_noon_scenario() {
    let mut garage = garage_at(50.0, 12, Weekday::Monday);
    let res = garage.reserve(4).expect("reservation should succeed");

    assert_eq!(res.spot, SpotPos::new(0, 0));
    assert_eq!(res.hours, 4);
    assert!((res.charged - 15.0).abs() < f64::EPSILON);
    assert!((res.balance - 35.0).abs() < f64::EPSILON);
    assert!((garage.balance() - 35.0).abs() < f64::EPSILON);
    assert_eq!(
        garage.grid().get(SpotPos::new(0, 0)),
        Some(&Spot::occupied(Owner::User, 4))
    );
}

#[test]
fn test_reserve_insufficient_funds_changes_nothing() {
    let mut garage = garage_at(5.0, 12, Weekday::Monday);
    let before = garage.clone();

    let err = garage.reserve(1).unwrap_err();
    match err {
        ReserveError::InsufficientFunds { balance, rate } => {
            assert!((balance - 5.0).abs() < f64::EPSILON);
            assert!((rate - 15.0).abs() < f64::EPSILON);
        }
        other => panic!("expected InsufficientFunds, got {other:?}"),
    }
    assert_eq!(garage, before);
}

#[test]
fn test_reserve_full_garage_does_not_charge() {
    let mut garage = garage_at(100.0, 12, Weekday::Monday);
    fill_all(&mut garage, Owner::Stochastic, 5);
    let before = garage.clone();

    assert_eq!(garage.reserve(2), Err(ReserveError::GarageFull));
    assert_eq!(garage, before);
}

#[test]
fn test_funds_checked_before_availability() {
    // Full garage AND not enough money: the funds failure wins.
    let mut garage = garage_at(1.0, 12, Weekday::Monday);
    fill_all(&mut garage, Owner::Stochastic, 5);

    assert!(matches!(
        garage.reserve(2),
        Err(ReserveError::InsufficientFunds { .. })
    ));
}

#[test]
fn test_reserve_exact_balance_allowed() {
    let mut garage = garage_at(7.5, 22, Weekday::Wednesday);
    let res = garage.reserve(1).unwrap();
    assert!((res.charged - 7.5).abs() < f64::EPSILON);
    assert!(garage.balance().abs() < f64::EPSILON);
}

#[test]
fn test_reserve_uses_first_fit_order() {
    let mut garage = garage_at(100.0, 12, Weekday::Saturday);
    garage.place(SpotPos::new(0, 0), Spot::occupied(Owner::Stochastic, 3));
    garage.place(SpotPos::new(0, 1), Spot::occupied(Owner::Stochastic, 3));

    let first = garage.reserve(2).unwrap();
    let second = garage.reserve(2).unwrap();
    assert_eq!(first.spot, SpotPos::new(0, 2));
    assert_eq!(second.spot, SpotPos::new(0, 3));
    // Weekend daytime charges the base rate.
    assert!((garage.balance() - 80.0).abs() < f64::EPSILON);
}

// -------------------------------------------------------------------------
// Top-up
// -------------------------------------------------------------------------

#[test]
fn test_top_up_credits_balance() {
    let mut garage = garage_at(5.0, 12, Weekday::Monday);
    assert!((garage.top_up(20.0) - 25.0).abs() < f64::EPSILON);
    assert!((garage.balance() - 25.0).abs() < f64::EPSILON);
    assert_eq!(garage.grid().empty_count(), 25);
}

// -------------------------------------------------------------------------
// Backfill
// -------------------------------------------------------------------------

#[test]
fn test_backfill_places_requested_count() {
    let mut garage = garage_at(0.0, 12, Weekday::Monday);
    let mut rng = rng();
    assert_eq!(garage.backfill(8, &mut rng), 8);
    assert_eq!(garage.grid().count_owned_by(Owner::Stochastic), 8);
}

#[test]
fn test_backfill_durations_in_range() {
    let mut garage = garage_at(0.0, 12, Weekday::Monday);
    let mut rng = rng();
    garage.backfill(25, &mut rng);
    for (_, spot) in garage.grid().iter() {
        let hours = spot.remaining_hours().expect("every spot filled");
        assert!((3..=10).contains(&hours), "duration {hours} out of range");
        assert_eq!(spot.owner(), Some(Owner::Stochastic));
    }
}

#[test]
fn test_backfill_clamped_to_free_spots() {
    let mut garage = garage_at(0.0, 12, Weekday::Monday);
    garage.place(SpotPos::new(0, 0), Spot::occupied(Owner::User, 9));
    let mut rng = rng();
    assert_eq!(garage.backfill(1_000, &mut rng), 24);
    assert_eq!(garage.grid().empty_count(), 0);
    // The user's reservation is never overwritten.
    assert_eq!(
        garage.grid().get(SpotPos::new(0, 0)),
        Some(&Spot::occupied(Owner::User, 9))
    );
}

#[test]
fn test_backfill_on_full_grid_is_noop() {
    let mut garage = garage_at(0.0, 12, Weekday::Monday);
    fill_all(&mut garage, Owner::User, 2);
    let before = garage.clone();
    let mut rng = rng();
    assert_eq!(garage.backfill(3, &mut rng), 0);
    assert_eq!(garage, before);
}

#[test]
fn test_backfill_deterministic_for_seed() {
    let mut a = garage_at(0.0, 12, Weekday::Monday);
    let mut b = garage_at(0.0, 12, Weekday::Monday);
    a.backfill(10, &mut rng());
    b.backfill(10, &mut rng());
    assert_eq!(a, b);
}

// -------------------------------------------------------------------------
// Time advancement
// -------------------------------------------------------------------------

#[test]
fn test_advance_empties_spot_with_exact_hours() {
    let mut garage = garage_at(0.0, 12, Weekday::Monday);
    fill_all(&mut garage, Owner::Stochastic, 10);
    garage.place(SpotPos::new(0, 0), Spot::occupied(Owner::User, 3));

    // With only one free spot, backfill draws from 0..=0 and adds nobody.
    let report = garage.advance_time(3, &mut rng());
    assert_eq!(report.freed, 1);
    assert_eq!(report.backfilled, 0);
    assert_eq!(garage.grid().get(SpotPos::new(0, 0)), Some(&Spot::Empty));
}

#[test]
fn test_advance_leaves_one_hour_remaining() {
    let mut garage = garage_at(0.0, 12, Weekday::Monday);
    fill_all(&mut garage, Owner::Stochastic, 10);
    garage.place(SpotPos::new(0, 0), Spot::occupied(Owner::User, 4));

    garage.advance_time(3, &mut rng());
    assert_eq!(
        garage.grid().get(SpotPos::new(0, 0)),
        Some(&Spot::occupied(Owner::User, 1))
    );
}

#[test]
fn test_advance_decrements_in_one_step() {
    let mut garage = garage_at(0.0, 12, Weekday::Monday);
    fill_all(&mut garage, Owner::Stochastic, 20);
    garage.advance_time(7, &mut rng());
    for (_, spot) in garage.grid().iter() {
        assert_eq!(spot.remaining_hours(), Some(13));
    }
}

#[test]
fn test_advance_rolls_clock() {
    let mut garage = garage_at(0.0, 23, Weekday::Sunday);
    let report = garage.advance_time(2, &mut rng());
    assert_eq!(report.clock, GameClock::new(1, Weekday::Monday));
    assert_eq!(garage.clock(), GameClock::new(1, Weekday::Monday));
}

#[test]
fn test_advance_never_fills_last_free_spot() {
    for seed in 0..50 {
        let mut garage = garage_at(0.0, 12, Weekday::Monday);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..5 {
            garage.advance_time(1, &mut rng);
            assert!(
                garage.grid().empty_count() >= 1,
                "seed {seed}: backfill consumed the last free spot"
            );
        }
    }
}

#[test]
fn test_advance_on_full_grid_terminates() {
    let mut garage = garage_at(0.0, 12, Weekday::Monday);
    fill_all(&mut garage, Owner::Stochastic, 50);
    let report = garage.advance_time(1, &mut rng());
    assert_eq!(report.freed, 0);
    assert_eq!(report.backfilled, 0);
    assert_eq!(garage.grid().empty_count(), 0);
}

#[test]
fn test_advance_does_not_touch_balance() {
    let mut garage = garage_at(42.0, 12, Weekday::Monday);
    garage.advance_time(30, &mut rng());
    assert!((garage.balance() - 42.0).abs() < f64::EPSILON);
}

// -------------------------------------------------------------------------
// Accessors
// -------------------------------------------------------------------------

#[test]
fn test_accessors_are_idempotent() {
    let mut garage = garage_at(50.0, 9, Weekday::Friday);
    garage.backfill(6, &mut rng());

    assert_eq!(garage.grid_snapshot(), garage.grid_snapshot());
    assert_eq!(garage.balance().to_bits(), garage.balance().to_bits());
    assert_eq!(garage.clock(), garage.clock());
}

#[test]
fn test_reserve_error_display() {
    let msg = ReserveError::InsufficientFunds {
        balance: 5.0,
        rate: 15.0,
    }
    .to_string();
    assert!(msg.contains("5.00"));
    assert!(msg.contains("15.00"));
    assert_eq!(ReserveError::GarageFull.to_string(), "no available parking spots");
}
