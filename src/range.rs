use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{DayId, FormatError, RANGE_SEPARATOR, prelude::*};

/// An inclusive span of days.
/// The start day must be less than or equal to the end day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DayRange {
    start: DayId,
    end:   DayId,
}

/// Error type for day range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start day is after end day.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: DayId, end: DayId },

    /// Error parsing one of the endpoints.
    #[error(transparent)]
    FormatError(#[from] FormatError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DayRange {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: DayId, end: DayId) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering a single day.
    pub const fn single(day: DayId) -> Self {
        Self { start: day, end: day }
    }

    pub const fn start(&self) -> DayId {
        self.start
    }

    pub const fn end(&self) -> DayId {
        self.end
    }

    /// `start <= day <= end`
    pub fn contains(&self, day: DayId) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of days covered, both ends included.
    pub fn day_count(&self) -> i64 {
        self.end.naive().signed_duration_since(self.start.naive()).num_days() + 1
    }

    /// Every day of the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = DayId> + '_ {
        self.start
            .naive()
            .iter_days()
            .map(DayId::from_naive)
            .take_while(|day| *day <= self.end)
    }
}

impl FromStr for DayRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start, end) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;
                Self::new(start.trim().parse()?, end.trim().parse()?)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for DayRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DayRange {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for DayRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        [self.start, self.end].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DayRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Ranges arrive as `["start", "end"]` pairs or `"start/end"` strings.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Pair([DayId; 2]),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Pair([start, end]) => Self::new(start, end).map_err(serde::de::Error::custom),
            Repr::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
