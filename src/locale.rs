//! Locale-aware labels and day formatting.

use chrono::{Locale, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{DayId, DayOfWeek, Month};

/// Rendering style of one date component, named after the `Intl` options
/// hosts already use (`"numeric"`, `"2-digit"`, `"short"`, `"long"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStyle {
    #[default]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
    Short,
    Long,
}

/// Per-component styles used by [`DayFormatter::format_day`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormat {
    pub year:  FieldStyle,
    pub month: FieldStyle,
    pub day:   FieldStyle,
}

/// Localization service: selected-day strings and grid labels.
pub trait DayFormatter {
    fn format_day(&self, day: DayId, lang: &str, format: &DateFormat) -> String;
    fn month_name(&self, month: Month, lang: &str, short: bool) -> String;
    fn weekday_name(&self, weekday: DayOfWeek, lang: &str, short: bool) -> String;
}

/// Formatter backed by chrono's locale tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrder {
    DayMonthYear,
    MonthDayYear,
    YearMonthDay,
}

/// How a language lays out an all-numeric date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumericLayout {
    order:     FieldOrder,
    separator: &'static str,
    /// Day and month always take two digits (`05/06/2024` in en-GB).
    padded:    bool,
}

impl NumericLayout {
    const fn new(order: FieldOrder, separator: &'static str, padded: bool) -> Self {
        Self {
            order,
            separator,
            padded,
        }
    }
}

/// Month and weekday labels are read off this year.
const REFERENCE_YEAR: i32 = 2024;

impl ChronoFormatter {
    fn locale(lang: &str) -> Locale {
        let tag = lang.replace('-', "_");
        if let Ok(locale) = Locale::try_from(tag.as_str()) {
            return locale;
        }
        // Bare language tags ("fr", "de") map to their home region.
        let regional = format!("{tag}_{}", tag.to_ascii_uppercase());
        Locale::try_from(regional.as_str()).unwrap_or(Locale::en_GB)
    }

    fn layout(lang: &str) -> NumericLayout {
        let mut parts = lang.split(['-', '_']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().unwrap_or_default().to_ascii_uppercase();

        if region == "US" {
            return NumericLayout::new(FieldOrder::MonthDayYear, "/", false);
        }
        match language.as_str() {
            "en" | "fr" | "pt" => NumericLayout::new(FieldOrder::DayMonthYear, "/", true),
            "es" | "it" | "el" => NumericLayout::new(FieldOrder::DayMonthYear, "/", false),
            "nl" => NumericLayout::new(FieldOrder::DayMonthYear, "-", false),
            "ru" | "tr" => NumericLayout::new(FieldOrder::DayMonthYear, ".", true),
            "de" | "pl" | "cs" | "fi" | "nb" => NumericLayout::new(FieldOrder::DayMonthYear, ".", false),
            "ja" | "zh" | "ko" => NumericLayout::new(FieldOrder::YearMonthDay, "/", false),
            _ => NumericLayout::new(FieldOrder::YearMonthDay, "-", true),
        }
    }

    fn pattern(lang: &str, format: &DateFormat) -> String {
        let layout = Self::layout(lang);
        let textual_month = matches!(format.month, FieldStyle::Short | FieldStyle::Long);
        let padded = layout.padded && !textual_month;

        let year = match format.year {
            FieldStyle::TwoDigit => "%y",
            FieldStyle::Numeric | FieldStyle::Short | FieldStyle::Long => "%Y",
        };
        let month = match format.month {
            FieldStyle::Numeric if padded => "%m",
            FieldStyle::Numeric => "%-m",
            FieldStyle::TwoDigit => "%m",
            FieldStyle::Short => "%b",
            FieldStyle::Long => "%B",
        };
        let day = match format.day {
            FieldStyle::TwoDigit => "%d",
            FieldStyle::Numeric | FieldStyle::Short | FieldStyle::Long if padded => "%d",
            FieldStyle::Numeric | FieldStyle::Short | FieldStyle::Long => "%-d",
        };

        let separator = if textual_month { " " } else { layout.separator };
        let fields = match layout.order {
            FieldOrder::DayMonthYear => [day, month, year],
            FieldOrder::MonthDayYear => [month, day, year],
            FieldOrder::YearMonthDay => [year, month, day],
        };
        fields.join(separator)
    }

    fn render(date: NaiveDate, pattern: &str, lang: &str) -> String {
        date.format_localized(pattern, Self::locale(lang)).to_string()
    }
}

impl DayFormatter for ChronoFormatter {
    fn format_day(&self, day: DayId, lang: &str, format: &DateFormat) -> String {
        Self::render(day.naive(), &Self::pattern(lang, format), lang)
    }

    fn month_name(&self, month: Month, lang: &str, short: bool) -> String {
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, u32::from(month.get()), 1).map_or_else(
            || month.to_string(),
            |first| Self::render(first, if short { "%b" } else { "%B" }, lang),
        )
    }

    fn weekday_name(&self, weekday: DayOfWeek, lang: &str, short: bool) -> String {
        let weekday = weekday.to_chrono();
        NaiveDate::from_weekday_of_month_opt(REFERENCE_YEAR, 1, weekday, 1).map_or_else(
            || weekday.to_string(),
            |date| Self::render(date, if short { "%a" } else { "%A" }, lang),
        )
    }
}
