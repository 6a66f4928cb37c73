use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{HOURS_PER_DAY, STARTING_DAY, STARTING_HOUR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The following day, wrapping Sunday back to Monday.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Monday through Friday.
    pub fn is_weekday(self) -> bool {
        !matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Garage calendar: an hour of day and a weekday, advanced in whole hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameClock {
    pub hour: u32,
    pub day: Weekday,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            hour: STARTING_HOUR, // noon
            day: STARTING_DAY,
        }
    }
}

impl GameClock {
    pub fn new(hour: u32, day: Weekday) -> Self {
        Self {
            hour: hour % HOURS_PER_DAY,
            day,
        }
    }

    /// Advance by a single hour. Rolling past 23:00 moves to the next day.
    pub fn tick(&mut self) {
        self.hour = (self.hour + 1) % HOURS_PER_DAY;
        if self.hour == 0 {
            self.day = self.day.next();
        }
    }

    /// Advance by `hours` whole hours.
    ///
    /// Same result as calling [`GameClock::tick`] `hours` times: every pass
    /// through midnight bumps the weekday once.
    pub fn advance(&mut self, hours: u32) {
        let total = u64::from(self.hour) + u64::from(hours);
        let day_rollovers = total / u64::from(HOURS_PER_DAY);
        self.hour = (total % u64::from(HOURS_PER_DAY)) as u32;
        let day_steps = (day_rollovers % Weekday::ALL.len() as u64) as usize;
        self.day = Weekday::from_index(self.day.index() + day_steps);
    }

    pub fn hour_of_day(&self) -> u32 {
        self.hour
    }

    pub fn formatted(&self) -> String {
        format!("{} {:02}:00", self.day, self.hour)
    }
}
