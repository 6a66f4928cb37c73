use crate::game_actions::{ActionError, ActionResult};
use crate::grid::{Owner, Spot};
use crate::test_harness::TestGarage;
use crate::time_of_day::Weekday;

// ====================================================================
// Time advancement through the action queue
// ====================================================================

/// Every spot but (0,0) is taken by a long stay, so backfill (which always
/// leaves one spot free) cannot interfere with the spot under test.
fn nearly_full() -> TestGarage {
    TestGarage::new().fill_all(Owner::Stochastic, 100)
}

#[test]
fn test_stay_ending_exactly_frees_spot() {
    let mut garage = nearly_full().with_spot(0, 0, Owner::User, 5);
    assert!(garage.advance(5).is_success());
    garage.assert_spot(0, 0, Spot::Empty);
}

#[test]
fn test_stay_with_one_hour_left_survives() {
    let mut garage = nearly_full().with_spot(0, 0, Owner::User, 6);
    garage.advance(5);
    garage.assert_spot(0, 0, Spot::occupied(Owner::User, 1));
}

#[test]
fn test_advance_reports_freed_and_clock() {
    let mut garage = nearly_full()
        .with_clock(22, Weekday::Saturday)
        .with_spot(0, 0, Owner::User, 2);

    match garage.advance(3) {
        ActionResult::TimeAdvanced(t) => {
            assert_eq!(t.hours, 3);
            assert_eq!(t.freed, 1);
            assert_eq!(t.backfilled, 0);
        }
        other => panic!("expected TimeAdvanced, got {other:?}"),
    }
    garage.assert_clock(1, Weekday::Sunday);
}

#[test]
fn test_advance_25_hours_from_sunday_night() {
    let mut garage = TestGarage::new().with_clock(23, Weekday::Sunday);
    garage.advance(25);
    // Hour-by-hour: Monday 00:00 after one hour, Tuesday 00:00 after 25.
    garage.assert_clock(0, Weekday::Tuesday);
}

#[test]
fn test_advance_across_week_boundary() {
    let mut garage = TestGarage::new().with_clock(23, Weekday::Sunday);
    garage.advance(2);
    garage.assert_clock(1, Weekday::Monday);
}

#[test]
fn test_backfill_always_leaves_a_free_spot() {
    let mut garage = TestGarage::new();
    for _ in 0..40 {
        garage.advance(1);
        assert!(garage.empty_count() >= 1);
    }
}

#[test]
fn test_full_garage_advance_terminates() {
    let mut garage = TestGarage::new().fill_all(Owner::Stochastic, 50);
    match garage.advance(1) {
        ActionResult::TimeAdvanced(t) => assert_eq!(t.backfilled, 0),
        other => panic!("expected TimeAdvanced, got {other:?}"),
    }
    assert_eq!(garage.empty_count(), 0);
}

#[test]
fn test_backfilled_spots_are_stochastic_and_bounded() {
    let mut garage = TestGarage::new();
    garage.advance(1);
    for (_, spot) in garage.garage().grid().iter() {
        if let Spot::Occupied {
            owner,
            remaining_hours,
        } = spot
        {
            assert_eq!(*owner, Owner::Stochastic);
            assert!((3..=10).contains(remaining_hours));
        }
    }
}

#[test]
fn test_zero_hour_advance_rejected() {
    let mut garage = TestGarage::new();
    assert!(matches!(
        garage.advance(0),
        ActionResult::Error(ActionError::InvalidInput(_))
    ));
    garage.assert_clock(12, Weekday::Monday);
}
