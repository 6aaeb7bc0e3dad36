//! Disable and highlight rules evaluated for every day of a built month.

use serde::{Deserialize, Serialize};

use crate::{DayId, DayRange};

/// Days matched either one by one or through inclusive ranges.
///
/// The shape is decided when the rule is read: `["2024-03-10", ...]` is a list
/// of dates, `[["2024-03-10", "2024-03-12"], ...]` a list of ranges. A list
/// mixing both shapes is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateRule {
    Ranges(Vec<DayRange>),
    Dates(Vec<DayId>),
}

impl DateRule {
    pub fn matches(&self, day: DayId) -> bool {
        match self {
            Self::Ranges(ranges) => ranges.iter().any(|range| range.contains(day)),
            Self::Dates(dates) => dates.contains(&day),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Ranges(ranges) => ranges.is_empty(),
            Self::Dates(dates) => dates.is_empty(),
        }
    }
}

impl Default for DateRule {
    fn default() -> Self {
        Self::Dates(Vec::new())
    }
}

impl From<Vec<DayId>> for DateRule {
    fn from(dates: Vec<DayId>) -> Self {
        Self::Dates(dates)
    }
}

impl From<Vec<DayRange>> for DateRule {
    fn from(ranges: Vec<DayRange>) -> Self {
        Self::Ranges(ranges)
    }
}

/// A set of days drawn with optional title and colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightRule {
    pub days: DateRule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl HighlightRule {
    pub fn new(days: impl Into<DateRule>) -> Self {
        Self {
            days: days.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}

/// Presentation metadata collected from every highlight rule matching a day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub title: Option<String>,
    pub color: Option<String>,
    pub background_color: Option<String>,
}

impl Highlight {
    fn absorb(&mut self, rule: &HighlightRule) {
        if let Some(title) = &rule.title {
            self.title = Some(title.clone());
        }
        if let Some(color) = &rule.color {
            self.color = Some(color.clone());
        }
        if let Some(background) = &rule.background_color {
            self.background_color = Some(background.clone());
        }
    }
}

/// Whether `day` is switched off by a disable rule.
pub fn evaluate_disabled(day: DayId, rule: &DateRule) -> bool {
    rule.matches(day)
}

/// Folds all matching rules in order. A later match overwrites only the
/// fields it sets, so a title from an earlier rule survives a later
/// color-only rule.
pub fn evaluate_highlight(day: DayId, rules: &[HighlightRule]) -> Option<Highlight> {
    rules
        .iter()
        .filter(|rule| rule.days.matches(day))
        .fold(None, |acc: Option<Highlight>, rule| {
            let mut highlight = acc.unwrap_or_default();
            highlight.absorb(rule);
            Some(highlight)
        })
}

/// Inclusive `[min, max]` window kept as exclusive fences one day outside
/// each boundary, so the boundary days themselves stay open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    floor:   Option<DayId>,
    ceiling: Option<DayId>,
}

impl Bounds {
    pub fn new(min: Option<DayId>, max: Option<DayId>) -> Self {
        let mut bounds = Self::default();
        if let Some(min) = min {
            bounds.set_min(min);
        }
        if let Some(max) = max {
            bounds.set_max(max);
        }
        bounds
    }

    pub fn set_min(&mut self, min: DayId) {
        self.floor = min.pred();
    }

    pub fn set_max(&mut self, max: DayId) {
        self.ceiling = max.succ();
    }

    pub fn min(&self) -> Option<DayId> {
        self.floor.and_then(DayId::succ)
    }

    pub fn max(&self) -> Option<DayId> {
        self.ceiling.and_then(DayId::pred)
    }

    pub fn admits(&self, day: DayId) -> bool {
        self.floor.is_none_or(|floor| day > floor) && self.ceiling.is_none_or(|ceiling| day < ceiling)
    }
}
