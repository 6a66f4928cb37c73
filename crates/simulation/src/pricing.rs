//! Time-of-day reservation pricing.
//!
//! Three tiers, selected from the clock alone:
//! - **Weekday daytime** (Mon-Fri, 08:00-17:59): base rate x 1.5
//! - **Weekend daytime** (Sat-Sun, 08:00-17:59): base rate
//! - **Off-peak** (any day, outside 8..=17): base rate x 0.75

use serde::{Deserialize, Serialize};

use crate::config::{
    BASE_RATE, DAYTIME_END_HOUR, DAYTIME_START_HOUR, OFF_PEAK_MULTIPLIER,
    WEEKDAY_DAYTIME_MULTIPLIER, WEEKEND_DAYTIME_MULTIPLIER,
};
use crate::time_of_day::GameClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateTier {
    WeekdayDaytime,
    WeekendDaytime,
    OffPeak,
}

impl RateTier {
    pub fn multiplier(self) -> f64 {
        match self {
            RateTier::WeekdayDaytime => WEEKDAY_DAYTIME_MULTIPLIER,
            RateTier::WeekendDaytime => WEEKEND_DAYTIME_MULTIPLIER,
            RateTier::OffPeak => OFF_PEAK_MULTIPLIER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RateTier::WeekdayDaytime => "weekday daytime",
            RateTier::WeekendDaytime => "weekend daytime",
            RateTier::OffPeak => "off-peak",
        }
    }
}

/// Both ends of the daytime window are inclusive.
pub fn is_daytime(hour: u32) -> bool {
    (DAYTIME_START_HOUR..=DAYTIME_END_HOUR).contains(&hour)
}

pub fn rate_tier(clock: &GameClock) -> RateTier {
    if !is_daytime(clock.hour_of_day()) {
        RateTier::OffPeak
    } else if clock.day.is_weekday() {
        RateTier::WeekdayDaytime
    } else {
        RateTier::WeekendDaytime
    }
}

/// Price of one reservation at the given clock.
pub fn current_rate(clock: &GameClock) -> f64 {
    BASE_RATE * rate_tier(clock).multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_of_day::Weekday;

    fn rate_at(hour: u32, day: Weekday) -> f64 {
        current_rate(&GameClock::new(hour, day))
    }

    #[test]
    fn test_weekday_daytime_rate_is_15() {
        for day in Weekday::ALL.into_iter().filter(|d| d.is_weekday()) {
            for hour in 8..=17 {
                let rate = rate_at(hour, day);
                assert!((rate - 15.0).abs() < f64::EPSILON, "{day} {hour}h -> {rate}");
            }
        }
    }

    #[test]
    fn test_weekend_daytime_rate_is_10() {
        for day in [Weekday::Saturday, Weekday::Sunday] {
            for hour in 8..=17 {
                let rate = rate_at(hour, day);
                assert!((rate - 10.0).abs() < f64::EPSILON, "{day} {hour}h -> {rate}");
            }
        }
    }

    #[test]
    fn test_off_peak_rate_is_7_5_every_day() {
        for day in Weekday::ALL {
            for hour in (0..8).chain(18..24) {
                let rate = rate_at(hour, day);
                assert!((rate - 7.5).abs() < f64::EPSILON, "{day} {hour}h -> {rate}");
            }
        }
    }

    #[test]
    fn test_window_boundaries_inclusive() {
        assert_eq!(rate_tier(&GameClock::new(7, Weekday::Monday)), RateTier::OffPeak);
        assert_eq!(
            rate_tier(&GameClock::new(8, Weekday::Monday)),
            RateTier::WeekdayDaytime
        );
        assert_eq!(
            rate_tier(&GameClock::new(17, Weekday::Monday)),
            RateTier::WeekdayDaytime
        );
        assert_eq!(rate_tier(&GameClock::new(18, Weekday::Monday)), RateTier::OffPeak);
        assert_eq!(
            rate_tier(&GameClock::new(17, Weekday::Sunday)),
            RateTier::WeekendDaytime
        );
    }
}
