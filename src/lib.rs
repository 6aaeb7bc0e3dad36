mod calendar;
mod clock;
mod config;
mod consts;
mod hooks;
mod locale;
mod month;
mod prelude;
mod range;
mod render;
mod rules;
mod selection;
#[cfg(test)]
mod test_utils;
mod types;

pub use calendar::{Calendar, CalendarBuilder};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, ConfigError, Nav, Options, resolve};
pub use consts::*;
pub use hooks::{Event, Hook, Hooks};
pub use locale::{ChronoFormatter, DateFormat, DayFormatter, FieldStyle};
pub use month::{DayDescriptor, MonthView, ViewMonth, build_month};
pub use range::{DayRange, RangeError};
pub use render::{Frame, Mount, Renderer};
pub use rules::{Bounds, DateRule, Highlight, HighlightRule, evaluate_disabled, evaluate_highlight};
pub use selection::{PickMode, Selection, Transition};
pub use types::{Day, DayOfWeek, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime};
use std::fmt;
use std::str::FromStr;

/// A calendar day, exposed to hosts as milliseconds since the Unix epoch at
/// midnight UTC. Two identifiers are equal exactly when they name the same
/// calendar date, regardless of the host's time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayId(NaiveDate);

/// First representable day, 0001-01-01.
pub const MIN_DAY_ID: DayId = DayId::known(MIN_YEAR, JANUARY, MIN_DAY);
/// Last representable day, 9999-12-31.
pub const MAX_DAY_ID: DayId = DayId::known(MAX_YEAR, DECEMBER, 31);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FormatError {
    #[display(fmt = "Invalid date format: {_0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Ambiguous date {_0}: numeric input looks like a timestamp")]
    Timestamp(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid weekday: {} (must be 0-{})", "_0", "DAYS_PER_WEEK - 1")]
    InvalidWeekday(u8),
    #[display(fmt = "Timestamp {_0} is outside the supported calendar")]
    OutOfRange(i64),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for FormatError {}

impl DayId {
    /// Identifier for an already validated calendar date.
    pub fn from_date(year: Year, month: Month, day: Day) -> Self {
        // `Day` is checked against its month, so chrono accepts every combination.
        NaiveDate::from_ymd_opt(i32::from(year.get()), u32::from(month.get()), u32::from(day.get()))
            .map_or(MIN_DAY_ID, Self)
    }

    /// Validates the components and builds the identifier.
    ///
    /// # Errors
    /// Returns the component error for an impossible date.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, FormatError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self::from_date(year, month, day))
    }

    /// Compile-time constructor for calendar constants.
    #[allow(clippy::cast_lossless)]
    const fn known(year: u16, month: u8, day: u8) -> Self {
        match NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32) {
            Some(date) => Self(date),
            None => panic!("calendar constant is not a valid date"),
        }
    }

    pub(crate) const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub(crate) const fn naive(self) -> NaiveDate {
        self.0
    }

    /// Normalizes an arbitrary instant to the UTC day containing it.
    ///
    /// # Errors
    /// Returns `FormatError::OutOfRange` outside years 1..=9999.
    pub fn from_timestamp_millis(millis: i64) -> Result<Self, FormatError> {
        DateTime::from_timestamp_millis(millis)
            .map(|instant| Self(instant.date_naive()))
            .filter(|id| (MIN_DAY_ID..=MAX_DAY_ID).contains(id))
            .ok_or(FormatError::OutOfRange(millis))
    }

    #[inline]
    pub const fn timestamp_millis(self) -> i64 {
        self.0.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
    }

    pub fn weekday(self) -> DayOfWeek {
        DayOfWeek::from(self.0.weekday())
    }

    /// Calendar year; 0 for the fence day before 0001-01-01.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn year(self) -> u16 {
        self.0.year().clamp(0, i32::from(u16::MAX)) as u16
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// The following day, if chrono can represent it.
    pub const fn succ(self) -> Option<Self> {
        match self.0.succ_opt() {
            Some(date) => Some(Self(date)),
            None => None,
        }
    }

    /// The preceding day, if chrono can represent it.
    pub const fn pred(self) -> Option<Self> {
        match self.0.pred_opt() {
            Some(date) => Some(Self(date)),
            None => None,
        }
    }

    /// First day of this day's month.
    pub fn first_of_month(self) -> Self {
        self.0.with_day(1).map_or(self, Self)
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayId {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FormatError::EmptyInput);
        }

        let numeric = trimmed.parse::<i64>().is_ok() || trimmed.parse::<f64>().is_ok_and(f64::is_finite);
        if numeric {
            return Err(FormatError::Timestamp(trimmed.to_owned()));
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(FormatError::InvalidFormat(trimmed.to_owned()));
        };

        let [year_width, month_width, day_width] = DATE_COMPONENT_WIDTHS;
        let year = Year::new(Self::parse_component(year, year_width, trimmed)?)?;
        let month = Month::new(Self::parse_component(month, month_width, trimmed)?)?;
        let day = Day::new(Self::parse_component(day, day_width, trimmed)?, year, month)?;
        Ok(Self::from_date(year, month, day))
    }
}

impl DayId {
    /// Accepts exactly `width` ASCII digits, no sign.
    fn parse_component<T: FromStr>(part: &str, width: usize, whole: &str) -> Result<T, FormatError> {
        let invalid = || FormatError::InvalidFormat(whole.to_owned());
        if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        part.parse::<T>().map_err(|_| invalid())
    }
}

impl From<DayId> for i64 {
    fn from(id: DayId) -> Self {
        id.timestamp_millis()
    }
}

impl serde::Serialize for DayId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DayId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Hosts hand over either `YYYY-MM-DD` strings or raw millisecond
        // timestamps; both collapse to the same identifier here.
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Millis(i64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => s.parse().map_err(serde::de::Error::custom),
            Repr::Millis(ms) => Self::from_timestamp_millis(ms).map_err(serde::de::Error::custom),
        }
    }
}

/// Identifier for a validated calendar date.
pub fn to_day_identifier(year: Year, month: Month, day: Day) -> DayId {
    DayId::from_date(year, month, day)
}

/// Parses a `YYYY-MM-DD` string; with no input, returns today's identifier.
///
/// # Errors
/// Returns `FormatError` for numeric input, a wrong component count or an
/// impossible date.
pub fn parse_human_date(text: Option<&str>) -> Result<DayId, FormatError> {
    match text {
        Some(text) => text.parse(),
        None => Ok(SystemClock.today()),
    }
}

/// Renders an identifier with the default chrono-backed formatter.
pub fn format_day_identifier(id: DayId, lang: &str, format: &DateFormat) -> String {
    ChronoFormatter.format_day(id, lang, format)
}
