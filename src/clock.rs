use chrono::{Local, NaiveDate};

use crate::{DayId, MAX_DAY_ID, MIN_DAY_ID};

/// Source of "today" for the engine.
pub trait Clock {
    fn today(&self) -> DayId;
}

/// Today's date on the host's local calendar, as a UTC-midnight identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> DayId {
        clamp_naive(Local::now().date_naive())
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DayId);

impl Clock for FixedClock {
    fn today(&self) -> DayId {
        self.0
    }
}

/// Identifier for `date`, clamped to the supported years.
fn clamp_naive(date: NaiveDate) -> DayId {
    DayId::from_naive(date).clamp(MIN_DAY_ID, MAX_DAY_ID)
}
