use crate::FormatError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR,
};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `FormatError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, FormatError> {
        let non_zero = NonZeroU16::new(value).ok_or(FormatError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(FormatError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = FormatError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `FormatError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, FormatError> {
        let non_zero = NonZeroU8::new(value).ok_or(FormatError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(FormatError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8 (January is 1)
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for the year and month it was built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// The first day of any month.
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `FormatError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > days_in_month(year.get(), month.get()) {
            return Err(invalid());
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weekday ordinal, 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const SUNDAY: Self = Self(0);
    pub const MONDAY: Self = Self(1);
    pub const TUESDAY: Self = Self(2);
    pub const WEDNESDAY: Self = Self(3);
    pub const THURSDAY: Self = Self(4);
    pub const FRIDAY: Self = Self(5);
    pub const SATURDAY: Self = Self(6);

    /// # Errors
    /// Returns `FormatError::InvalidWeekday` if the value is > 6.
    pub const fn new(value: u8) -> Result<Self, FormatError> {
        if value >= DAYS_PER_WEEK {
            return Err(FormatError::InvalidWeekday(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn is_weekend(self) -> bool {
        self.0 == Self::SATURDAY.0 || self.0 == Self::SUNDAY.0
    }

    /// Column of this weekday in a week that starts on `start`.
    pub const fn column_from(self, start: Self) -> u8 {
        (self.0 + DAYS_PER_WEEK - start.0) % DAYS_PER_WEEK
    }

    /// Weekday ordinals of one week, beginning at `start`.
    pub const fn week_from(start: Self) -> [Self; 7] {
        let mut week = [start; 7];
        let mut i = 0;
        while i < week.len() {
            week[i] = Self((start.0 + i as u8) % DAYS_PER_WEEK);
            i += 1;
        }
        week
    }

    pub(crate) const fn to_chrono(self) -> Weekday {
        match self.0 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }
}

impl From<Weekday> for DayOfWeek {
    #[allow(clippy::cast_possible_truncation)]
    fn from(weekday: Weekday) -> Self {
        Self(weekday.num_days_from_sunday() as u8)
    }
}

impl Default for DayOfWeek {
    fn default() -> Self {
        Self::SUNDAY
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(weekday: DayOfWeek) -> Self {
        weekday.0
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_bounds() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(matches!(Year::new(0), Err(FormatError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(FormatError::InvalidYear(10000))));
    }

    #[test]
    fn test_month_bounds() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(FormatError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(FormatError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "8");
        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn test_day_respects_month_length() {
        let y2023 = Year::new(2023).unwrap();
        let y2024 = Year::new(2024).unwrap();
        let feb = Month::new(2).unwrap();
        let apr = Month::new(4).unwrap();

        assert!(Day::new(28, y2023, feb).is_ok());
        assert!(Day::new(29, y2023, feb).is_err());
        assert!(Day::new(29, y2024, feb).is_ok());
        assert!(Day::new(30, y2024, apr).is_ok());
        assert!(matches!(
            Day::new(31, y2024, apr),
            Err(FormatError::InvalidDay {
                year: 2024,
                month: 4,
                day: 31
            })
        ));
        assert!(Day::new(0, y2024, apr).is_err());
    }

    #[test]
    fn test_day_of_week_bounds() {
        assert_eq!(DayOfWeek::new(6).unwrap(), DayOfWeek::SATURDAY);
        assert!(matches!(DayOfWeek::new(7), Err(FormatError::InvalidWeekday(7))));
        assert!(serde_json::from_str::<DayOfWeek>("9").is_err());
        assert_eq!(serde_json::from_str::<DayOfWeek>("1").unwrap(), DayOfWeek::MONDAY);
    }

    #[test]
    fn test_weekend_flags() {
        let weekend: Vec<u8> = (0..7)
            .filter_map(|n| DayOfWeek::new(n).ok())
            .filter(|d| d.is_weekend())
            .map(DayOfWeek::get)
            .collect();
        assert_eq!(weekend, vec![0, 6]);
    }

    #[test]
    fn test_week_from_rotates() {
        let week: Vec<u8> = DayOfWeek::week_from(DayOfWeek::MONDAY)
            .iter()
            .map(|d| d.get())
            .collect();
        assert_eq!(week, vec![1, 2, 3, 4, 5, 6, 0]);

        let week: Vec<u8> = DayOfWeek::week_from(DayOfWeek::SUNDAY)
            .iter()
            .map(|d| d.get())
            .collect();
        assert_eq!(week, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_column_from() {
        assert_eq!(DayOfWeek::SUNDAY.column_from(DayOfWeek::SUNDAY), 0);
        assert_eq!(DayOfWeek::SUNDAY.column_from(DayOfWeek::MONDAY), 6);
        assert_eq!(DayOfWeek::SATURDAY.column_from(DayOfWeek::WEDNESDAY), 3);
        assert_eq!(DayOfWeek::TUESDAY.column_from(DayOfWeek::SATURDAY), 3);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month_table() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_weekday_matches_chrono() {
        for weekday in [Weekday::Sun, Weekday::Mon, Weekday::Wed, Weekday::Sat] {
            assert_eq!(DayOfWeek::from(weekday).to_chrono(), weekday);
        }
        assert_eq!(DayOfWeek::from(Weekday::Sun), DayOfWeek::SUNDAY);
        assert_eq!(DayOfWeek::from(Weekday::Sat), DayOfWeek::SATURDAY);
    }

    #[test]
    fn test_first_day() {
        assert_eq!(Day::FIRST.get(), 1);
    }
}
