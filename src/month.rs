use chrono::Months;
use serde::Serialize;

use crate::{
    Bounds, Config, DAYS_PER_WEEK, Day, DayId, DayOfWeek, Highlight, MAX_DAY_ID, MIN_DAY_ID, Month, Selection, Year,
    days_in_month, evaluate_disabled, evaluate_highlight, prelude::*,
};

/// The month on screen, always addressed by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display)]
#[display(fmt = "{:04}-{:02}", "first.year()", "first.month()")]
#[serde(transparent)]
pub struct ViewMonth {
    first: DayId,
}

impl ViewMonth {
    pub fn new(year: Year, month: Month) -> Self {
        Self {
            first: DayId::from_date(year, month, Day::FIRST),
        }
    }

    /// Month containing `day`, clamped to the supported years.
    pub fn containing(day: DayId) -> Self {
        Self {
            first: day.clamp(MIN_DAY_ID, MAX_DAY_ID).first_of_month(),
        }
    }

    #[inline]
    pub fn year(self) -> u16 {
        self.first.year()
    }

    /// Month number, January is 1.
    #[inline]
    pub fn month(self) -> u8 {
        self.first.month()
    }

    pub const fn first_day(self) -> DayId {
        self.first
    }

    pub fn day_count(self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    /// Following month, `None` past December 9999.
    pub fn next(self) -> Option<Self> {
        self.shift(|first| first.checked_add_months(Months::new(1)))
    }

    /// Preceding month, `None` before January of year 1.
    pub fn prev(self) -> Option<Self> {
        self.shift(|first| first.checked_sub_months(Months::new(1)))
    }

    fn shift(self, step: impl FnOnce(chrono::NaiveDate) -> Option<chrono::NaiveDate>) -> Option<Self> {
        step(self.first.naive())
            .map(DayId::from_naive)
            .filter(|first| (MIN_DAY_ID..=MAX_DAY_ID).contains(first))
            .map(|first| Self { first })
    }
}

/// Everything the grid needs to know about one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayDescriptor {
    pub day_of_month: u8,
    pub id:           DayId,
    pub weekday:      DayOfWeek,
    pub is_weekend:   bool,
    /// Disabled for clicks.
    pub locked:       bool,
    pub is_today:     bool,
    pub is_selected:  bool,
    pub highlight:    Option<Highlight>,
}

impl DayDescriptor {
    pub const fn is_highlight(&self) -> bool {
        self.highlight.is_some()
    }

    pub fn highlight_title(&self) -> Option<&str> {
        self.highlight.as_ref().and_then(|h| h.title.as_deref())
    }
}

/// One built month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView {
    pub cursor: ViewMonth,
    /// Weekday ordinals in column order, starting at the configured week start.
    pub header: [DayOfWeek; 7],
    /// Empty columns before day 1.
    pub offset: u8,
    pub days:   Vec<DayDescriptor>,
}

impl MonthView {
    /// Leading indent of day 1 as a percentage of the row width.
    pub fn offset_percent(&self) -> f64 {
        f64::from(self.offset) * 100.0 / f64::from(DAYS_PER_WEEK)
    }

    pub fn day(&self, day_of_month: u8) -> Option<&DayDescriptor> {
        self.days.iter().find(|d| d.day_of_month == day_of_month)
    }

    pub fn find(&self, id: DayId) -> Option<&DayDescriptor> {
        self.days.iter().find(|d| d.id == id)
    }
}

/// Builds every day of `cursor`'s month with its derived flags.
pub fn build_month(cursor: ViewMonth, config: &Config, selection: &Selection, today: DayId) -> MonthView {
    let bounds = Bounds::new(config.min_date, config.max_date);
    let days: Vec<DayDescriptor> = cursor
        .first_day()
        .naive()
        .iter_days()
        .take(usize::from(cursor.day_count()))
        .map(|date| {
            let id = DayId::from_naive(date);
            let day_of_month = id.day();
            let weekday = id.weekday();

            let locked = config.locked
                || config.disable_days_of_week.contains(&weekday)
                || (config.disable_past_days && id < today)
                || !bounds.admits(id)
                || evaluate_disabled(id, &config.disable_dates);

            DayDescriptor {
                day_of_month,
                id,
                weekday,
                is_weekend: weekday.is_weekend(),
                locked,
                is_today: config.today_highlight && id == today,
                is_selected: selection.contains(id),
                highlight: evaluate_highlight(id, &config.days_highlight),
            }
        })
        .collect();

    log::trace!(
        "built {cursor}: {} days, {} locked, {} selected",
        days.len(),
        days.iter().filter(|d| d.locked).count(),
        days.iter().filter(|d| d.is_selected).count()
    );

    MonthView {
        cursor,
        header: DayOfWeek::week_from(config.week_start),
        offset: cursor.first_day().weekday().column_from(config.week_start),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{day, range, view_month};
    use crate::{DateRule, HighlightRule};

    fn build(year: u16, month: u8, config: &Config) -> MonthView {
        build_month(view_month(year, month), config, &Selection::new(), day(2024, 6, 15))
    }

    #[test]
    fn test_day_counts() {
        struct TestCase {
            year:     u16,
            month:    u8,
            expected: usize,
        }

        let cases = [
            TestCase {
                year:     2024,
                month:    2,
                expected: 29,
            },
            TestCase {
                year:     2023,
                month:    2,
                expected: 28,
            },
            TestCase {
                year:     2024,
                month:    4,
                expected: 30,
            },
            TestCase {
                year:     2024,
                month:    12,
                expected: 31,
            },
            TestCase {
                year:     1900,
                month:    2,
                expected: 28,
            },
        ];

        let config = Config::default();
        for case in &cases {
            let view = build(case.year, case.month, &config);
            assert_eq!(view.days.len(), case.expected, "{}-{}", case.year, case.month);
            let numbers: Vec<u8> = view.days.iter().map(|d| d.day_of_month).collect();
            let expected: Vec<u8> = (1..=u8::try_from(case.expected).unwrap()).collect();
            assert_eq!(numbers, expected);
        }
    }

    #[test]
    fn test_weekend_ignores_week_start() {
        for start in 0..7 {
            let config = Config {
                week_start: DayOfWeek::new(start).unwrap(),
                ..Config::default()
            };
            let view = build(2024, 6, &config);
            for d in &view.days {
                let expected = d.weekday == DayOfWeek::SATURDAY || d.weekday == DayOfWeek::SUNDAY;
                assert_eq!(d.is_weekend, expected, "{} with week start {start}", d.id);
            }
        }
    }

    #[test]
    fn test_min_max_boundaries_inclusive() {
        let config = Config {
            min_date: Some(day(2024, 3, 10)),
            max_date: Some(day(2024, 3, 20)),
            ..Config::default()
        };
        let view = build(2024, 3, &config);

        for d in &view.days {
            let outside = d.id < day(2024, 3, 10) || d.id > day(2024, 3, 20);
            assert_eq!(d.locked, outside, "{}", d.id);
        }
        assert!(!view.day(10).unwrap().locked);
        assert!(!view.day(20).unwrap().locked);
        assert!(view.day(9).unwrap().locked);
        assert!(view.day(21).unwrap().locked);
    }

    #[test]
    fn test_today_highlight() {
        let config = Config {
            today_highlight: true,
            ..Config::default()
        };
        let view = build(2024, 6, &config);
        let today: Vec<u8> = view.days.iter().filter(|d| d.is_today).map(|d| d.day_of_month).collect();
        assert_eq!(today, vec![15]);

        let config = Config {
            today_highlight: false,
            ..Config::default()
        };
        assert!(build(2024, 6, &config).days.iter().all(|d| !d.is_today));
    }

    #[test]
    fn test_header_and_offset_for_week_start() {
        // June 2024 starts on a Saturday
        let monday = Config {
            week_start: DayOfWeek::MONDAY,
            ..Config::default()
        };
        let view = build(2024, 6, &monday);
        let header: Vec<u8> = view.header.iter().map(|d| d.get()).collect();
        assert_eq!(header, vec![1, 2, 3, 4, 5, 6, 0]);
        assert_eq!(view.offset, 5);

        let sunday = build(2024, 6, &Config::default());
        assert_eq!(sunday.offset, 6);
        assert!((sunday.offset_percent() - 600.0 / 7.0).abs() < f64::EPSILON * 100.0);

        let saturday = Config {
            week_start: DayOfWeek::SATURDAY,
            ..Config::default()
        };
        assert_eq!(build(2024, 6, &saturday).offset, 0);
    }

    #[test]
    fn test_disable_rules() {
        let config = Config {
            disable_days_of_week: vec![DayOfWeek::WEDNESDAY],
            disable_dates: DateRule::Ranges(vec![range(day(2024, 6, 10), day(2024, 6, 11))]),
            ..Config::default()
        };
        let view = build(2024, 6, &config);

        // Wednesdays in June 2024: 5, 12, 19, 26
        let locked: Vec<u8> = view.days.iter().filter(|d| d.locked).map(|d| d.day_of_month).collect();
        assert_eq!(locked, vec![5, 10, 11, 12, 19, 26]);
    }

    #[test]
    fn test_disable_past_days() {
        let config = Config {
            disable_past_days: true,
            ..Config::default()
        };
        let view = build(2024, 6, &config);
        let open: Vec<u8> = view.days.iter().filter(|d| !d.locked).map(|d| d.day_of_month).collect();
        assert_eq!(open, (15..=30).collect::<Vec<u8>>());
    }

    #[test]
    fn test_global_lock() {
        let config = Config {
            locked: true,
            ..Config::default()
        };
        assert!(build(2024, 6, &config).days.iter().all(|d| d.locked));
    }

    #[test]
    fn test_selected_and_highlighted_flags() {
        let config = Config {
            days_highlight: vec![HighlightRule::new(vec![day(2024, 6, 3)]).with_title("Release")],
            ..Config::default()
        };
        let selection = Selection::seeded([day(2024, 6, 7), day(2024, 7, 1)]);
        let view = build_month(view_month(2024, 6), &config, &selection, day(2024, 6, 15));

        let selected: Vec<u8> = view.days.iter().filter(|d| d.is_selected).map(|d| d.day_of_month).collect();
        assert_eq!(selected, vec![7]);

        let third = view.day(3).unwrap();
        assert!(third.is_highlight());
        assert_eq!(third.highlight_title(), Some("Release"));
        assert!(!view.day(4).unwrap().is_highlight());
    }

    #[test]
    fn test_find_by_id() {
        let view = build(2024, 6, &Config::default());
        assert_eq!(view.find(day(2024, 6, 9)).map(|d| d.day_of_month), Some(9));
        assert!(view.find(day(2024, 7, 9)).is_none());
    }

    #[test]
    fn test_cursor_navigation_wraps_years() {
        assert_eq!(view_month(2024, 12).next(), Some(view_month(2025, 1)));
        assert_eq!(view_month(2024, 1).prev(), Some(view_month(2023, 12)));
        assert_eq!(view_month(9999, 12).next(), None);
        assert_eq!(view_month(1, 1).prev(), None);
    }

    #[test]
    fn test_cursor_containing() {
        let cursor = ViewMonth::containing(day(2024, 6, 15));
        assert_eq!(cursor, view_month(2024, 6));
        assert_eq!(cursor.first_day(), day(2024, 6, 1));
        assert_eq!(cursor.to_string(), "2024-06");
        assert_eq!(serde_json::to_string(&cursor).unwrap(), r#""2024-06-01""#);
    }

    #[test]
    fn test_cursor_clamps_fence_days() {
        let before = crate::MIN_DAY_ID.pred().unwrap();
        assert_eq!(ViewMonth::containing(before), view_month(1, 1));
        let after = crate::MAX_DAY_ID.succ().unwrap();
        assert_eq!(ViewMonth::containing(after), view_month(9999, 12));
    }
}
