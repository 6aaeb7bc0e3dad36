//! Layered configuration: host [`Options`] merged over a default [`Config`].

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_LANG, DEFAULT_SELECTOR, DateFormat, DateRule, DayId, DayOfWeek, HighlightRule, NAV_NEXT, NAV_PREV,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The selector is empty or no mount point answers to it.
    #[error("missing selector: no mount point for `{0}`")]
    MissingSelector(String),

    /// More than one pre-selected day while single-pick is active.
    #[error("multiplePick mismatch: {count} days selected but multiplePick is disabled")]
    MultiplePickMismatch { count: usize },

    #[error("invalid options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Navigation control: `true`/`false` toggles the default glyphs, a pair
/// replaces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nav {
    Enabled(bool),
    Labels([String; 2]),
}

/// Host-supplied settings. Every field is optional; unset fields fall back to
/// the layer underneath.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    pub selector:             Option<String>,
    pub default_date:         Option<DayId>,
    pub min_date:             Option<DayId>,
    pub max_date:             Option<DayId>,
    pub days_selected:        Option<Vec<DayId>>,
    pub days_highlight:       Option<Vec<HighlightRule>>,
    pub disable_dates:        Option<DateRule>,
    pub disable_days_of_week: Option<Vec<DayOfWeek>>,
    pub disable_past_days:    Option<bool>,
    pub today_highlight:      Option<bool>,
    pub multiple_pick:        Option<bool>,
    pub locked:               Option<bool>,
    pub rtl:                  Option<bool>,
    pub week_short:           Option<bool>,
    pub month_short:          Option<bool>,
    pub week_start:           Option<DayOfWeek>,
    pub lang:                 Option<String>,
    pub format:               Option<DateFormat>,
    pub nav:                  Option<Nav>,
}

impl Options {
    /// # Errors
    /// Returns `ConfigError::Json` for malformed JSON or invalid dates.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Field-wise overlay: values set on `self` win over `base`.
    #[must_use]
    pub fn merge_over(self, base: &Self) -> Self {
        let base = base.clone();
        Self {
            selector:             self.selector.or(base.selector),
            default_date:         self.default_date.or(base.default_date),
            min_date:             self.min_date.or(base.min_date),
            max_date:             self.max_date.or(base.max_date),
            days_selected:        self.days_selected.or(base.days_selected),
            days_highlight:       self.days_highlight.or(base.days_highlight),
            disable_dates:        self.disable_dates.or(base.disable_dates),
            disable_days_of_week: self.disable_days_of_week.or(base.disable_days_of_week),
            disable_past_days:    self.disable_past_days.or(base.disable_past_days),
            today_highlight:      self.today_highlight.or(base.today_highlight),
            multiple_pick:        self.multiple_pick.or(base.multiple_pick),
            locked:               self.locked.or(base.locked),
            rtl:                  self.rtl.or(base.rtl),
            week_short:           self.week_short.or(base.week_short),
            month_short:          self.month_short.or(base.month_short),
            week_start:           self.week_start.or(base.week_start),
            lang:                 self.lang.or(base.lang),
            format:               self.format.or(base.format),
            nav:                  self.nav.or(base.nav),
        }
    }
}

/// Fully resolved settings of one calendar instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub selector:             String,
    pub default_date:         Option<DayId>,
    pub min_date:             Option<DayId>,
    pub max_date:             Option<DayId>,
    pub days_selected:        Vec<DayId>,
    pub days_highlight:       Vec<HighlightRule>,
    pub disable_dates:        DateRule,
    pub disable_days_of_week: Vec<DayOfWeek>,
    pub disable_past_days:    bool,
    pub today_highlight:      bool,
    pub multiple_pick:        bool,
    pub locked:               bool,
    pub rtl:                  bool,
    pub week_short:           bool,
    pub month_short:          bool,
    pub week_start:           DayOfWeek,
    pub lang:                 String,
    pub format:               DateFormat,
    pub nav:                  Option<[String; 2]>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selector:             DEFAULT_SELECTOR.to_owned(),
            default_date:         None,
            min_date:             None,
            max_date:             None,
            days_selected:        Vec::new(),
            days_highlight:       Vec::new(),
            disable_dates:        DateRule::default(),
            disable_days_of_week: Vec::new(),
            disable_past_days:    false,
            today_highlight:      true,
            multiple_pick:        false,
            locked:               false,
            rtl:                  false,
            week_short:           true,
            month_short:          false,
            week_start:           DayOfWeek::SUNDAY,
            lang:                 DEFAULT_LANG.to_owned(),
            format:               DateFormat::default(),
            nav:                  Some([NAV_PREV.to_owned(), NAV_NEXT.to_owned()]),
        }
    }
}

impl Config {
    pub(crate) fn nav_labels(&self) -> Option<&[String; 2]> {
        self.nav.as_ref()
    }
}

/// Merges `options` over `defaults` and validates the result.
///
/// # Errors
/// - `ConfigError::MissingSelector` when the selector resolves to an empty string.
/// - `ConfigError::MultiplePickMismatch` when several days are pre-selected
///   without multi-pick.
pub fn resolve(options: Options, defaults: &Config) -> Result<Config, ConfigError> {
    let defaults = defaults.clone();
    let nav = match options.nav {
        None => defaults.nav,
        Some(Nav::Enabled(false)) => None,
        Some(Nav::Enabled(true)) => defaults
            .nav
            .or_else(|| Some([NAV_PREV.to_owned(), NAV_NEXT.to_owned()])),
        Some(Nav::Labels(labels)) => Some(labels),
    };

    let config = Config {
        selector: options.selector.unwrap_or(defaults.selector),
        default_date: options.default_date.or(defaults.default_date),
        min_date: options.min_date.or(defaults.min_date),
        max_date: options.max_date.or(defaults.max_date),
        days_selected: options.days_selected.unwrap_or(defaults.days_selected),
        days_highlight: options.days_highlight.unwrap_or(defaults.days_highlight),
        disable_dates: options.disable_dates.unwrap_or(defaults.disable_dates),
        disable_days_of_week: options.disable_days_of_week.unwrap_or(defaults.disable_days_of_week),
        disable_past_days: options.disable_past_days.unwrap_or(defaults.disable_past_days),
        today_highlight: options.today_highlight.unwrap_or(defaults.today_highlight),
        multiple_pick: options.multiple_pick.unwrap_or(defaults.multiple_pick),
        locked: options.locked.unwrap_or(defaults.locked),
        rtl: options.rtl.unwrap_or(defaults.rtl),
        week_short: options.week_short.unwrap_or(defaults.week_short),
        month_short: options.month_short.unwrap_or(defaults.month_short),
        week_start: options.week_start.unwrap_or(defaults.week_start),
        lang: options.lang.unwrap_or(defaults.lang),
        format: options.format.unwrap_or(defaults.format),
        nav,
    };

    if config.selector.trim().is_empty() {
        return Err(ConfigError::MissingSelector(config.selector));
    }

    let count = config.days_selected.len();
    if count > 1 && !config.multiple_pick {
        return Err(ConfigError::MultiplePickMismatch { count });
    }

    log::debug!(
        "resolved calendar config for `{}` ({} selected, multiple_pick={})",
        config.selector,
        count,
        config.multiple_pick
    );
    Ok(config)
}
