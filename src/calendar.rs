//! The calendar engine: owns configuration, cursor, selection and the current
//! month snapshot, and drives the renderer and host hooks.

use std::fmt;

use crate::{
    ChronoFormatter, Clock, Config, ConfigError, DayFormatter, DayId, DayOfWeek, Event, Frame, HighlightRule, Hooks,
    Month, MonthView, Mount, Options, PickMode, Renderer, Selection, SystemClock, Transition, ViewMonth, build_month,
    resolve,
};

/// Collects hooks and collaborators before the first render.
pub struct CalendarBuilder {
    options:   Options,
    hooks:     Hooks,
    clock:     Box<dyn Clock>,
    formatter: Box<dyn DayFormatter>,
}

impl CalendarBuilder {
    #[must_use]
    pub fn hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    #[must_use]
    pub fn on_load(mut self, hook: impl FnMut(&Calendar) + 'static) -> Self {
        self.hooks.on(Event::Load, hook);
        self
    }

    #[must_use]
    pub fn on_clear(mut self, hook: impl FnMut(&Calendar) + 'static) -> Self {
        self.hooks.on(Event::Clear, hook);
        self
    }

    #[must_use]
    pub fn on_navigation(mut self, hook: impl FnMut(&Calendar) + 'static) -> Self {
        self.hooks.on(Event::Navigation, hook);
        self
    }

    #[must_use]
    pub fn on_select(mut self, hook: impl FnMut(&Calendar) + 'static) -> Self {
        self.hooks.on(Event::Select, hook);
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn formatter(mut self, formatter: impl DayFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Resolves the options, mounts the renderer and draws the first month.
    ///
    /// # Errors
    /// Returns `ConfigError` when the options are invalid or the renderer has
    /// no mount point for the selector.
    pub fn build(self, renderer: impl Renderer + 'static) -> Result<Calendar, ConfigError> {
        let config = resolve(self.options.clone(), &Config::default())?;
        let mut renderer: Box<dyn Renderer> = Box::new(renderer);
        mount(renderer.as_mut(), &config)?;

        let today = self.clock.today();
        let cursor = ViewMonth::containing(config.default_date.unwrap_or(today));
        let selection = Selection::seeded(config.days_selected.iter().copied());
        let view = build_month(cursor, &config, &selection, today);

        let mut calendar = Calendar {
            init_options: self.options,
            config,
            cursor,
            today,
            selection,
            view,
            renderer,
            formatter: self.formatter,
            clock: self.clock,
            hooks: self.hooks,
        };
        log::debug!("calendar mounted on `{}` at {}", calendar.config.selector, calendar.cursor);
        calendar.render();
        calendar.emit(Event::Load);
        Ok(calendar)
    }
}

/// A month-grid date picker bound to one mount point.
pub struct Calendar {
    init_options: Options,
    config:       Config,
    cursor:       ViewMonth,
    today:        DayId,
    selection:    Selection,
    view:         MonthView,
    renderer:     Box<dyn Renderer>,
    formatter:    Box<dyn DayFormatter>,
    clock:        Box<dyn Clock>,
    hooks:        Hooks,
}

impl Calendar {
    pub fn builder(options: Options) -> CalendarBuilder {
        CalendarBuilder {
            options,
            hooks: Hooks::default(),
            clock: Box::new(SystemClock),
            formatter: Box::new(ChronoFormatter),
        }
    }

    /// Shorthand for `Calendar::builder(options).build(renderer)`.
    ///
    /// # Errors
    /// See [`CalendarBuilder::build`].
    pub fn create(options: Options, renderer: impl Renderer + 'static) -> Result<Self, ConfigError> {
        Self::builder(options).build(renderer)
    }

    /// Clears the selection and detaches from the mount point.
    pub fn destroy(mut self) {
        self.selection.clear();
        self.renderer.detach();
        log::debug!("calendar on `{}` destroyed", self.config.selector);
    }

    pub fn prev(&mut self) {
        self.navigate(ViewMonth::prev);
    }

    pub fn next(&mut self) {
        self.navigate(ViewMonth::next);
    }

    /// [`Calendar::prev`], then `callback` once the navigation hooks ran.
    pub fn prev_then(&mut self, callback: impl FnOnce(&Self)) {
        self.prev();
        callback(self);
    }

    /// [`Calendar::next`], then `callback` once the navigation hooks ran.
    pub fn next_then(&mut self, callback: impl FnOnce(&Self)) {
        self.next();
        callback(self);
    }

    /// Rebuilds and redraws the current month.
    pub fn update(&mut self) {
        self.view = build_month(self.cursor, &self.config, &self.selection, self.today);
        self.render();
    }

    /// Starts over with `options` layered on the construction-time options.
    /// A changed selector, nav or direction re-attaches the renderer.
    ///
    /// # Errors
    /// Returns `ConfigError` if the merged options do not resolve or the new
    /// selector has no mount point; the calendar keeps its previous state in
    /// that case.
    pub fn reset(&mut self, options: Option<Options>) -> Result<(), ConfigError> {
        let options = options.unwrap_or_default().merge_over(&self.init_options);
        let config = resolve(options, &Config::default())?;
        let remount = config.selector != self.config.selector
            || config.nav != self.config.nav
            || config.rtl != self.config.rtl;
        if remount {
            mount(self.renderer.as_mut(), &config)?;
        }
        self.config = config;
        self.today = self.clock.today();
        self.cursor = ViewMonth::containing(self.config.default_date.unwrap_or(self.today));
        self.selection = Selection::seeded(self.config.days_selected.iter().copied());
        log::debug!("calendar on `{}` reset to {}", self.config.selector, self.cursor);
        self.update();
        self.emit(Event::Load);
        Ok(())
    }

    /// [`Calendar::reset`], then `callback` on success.
    ///
    /// # Errors
    /// See [`Calendar::reset`].
    pub fn reset_then(&mut self, options: Option<Options>, callback: impl FnOnce(&Self)) -> Result<(), ConfigError> {
        self.reset(options)?;
        callback(self);
        Ok(())
    }

    pub fn go_today(&mut self) {
        self.today = self.clock.today();
        self.go_to_date(self.today);
    }

    pub fn go_to_date(&mut self, day: DayId) {
        self.cursor = ViewMonth::containing(day);
        log::debug!("calendar jumped to {}", self.cursor);
        self.update();
    }

    /// Selected days, formatted for the configured language.
    pub fn get_days(&self) -> Vec<String> {
        self.selection
            .days()
            .iter()
            .map(|day| self.formatter.format_day(*day, &self.config.lang, &self.config.format))
            .collect()
    }

    /// Last day that received a non-locked click.
    pub const fn get_day_selected(&self) -> Option<DayId> {
        self.selection.last_selected()
    }

    pub fn get_days_highlight(&self) -> &[HighlightRule] {
        &self.config.days_highlight
    }

    /// Displayed month, January is 1.
    pub fn get_month(&self) -> u8 {
        self.cursor.month()
    }

    pub fn get_year(&self) -> u16 {
        self.cursor.year()
    }

    /// Appends highlight rules; visible after the next rebuild.
    pub fn set_days_highlight(&mut self, rules: impl IntoIterator<Item = HighlightRule>) {
        self.config.days_highlight.extend(rules);
    }

    pub fn set_multiple_pick(&mut self, state: bool) {
        self.config.multiple_pick = state;
    }

    pub fn set_disable_past_days(&mut self, state: bool) {
        self.config.disable_past_days = state;
    }

    pub fn set_today_highlight(&mut self, state: bool) {
        self.config.today_highlight = state;
    }

    pub fn set_locked(&mut self, state: bool) {
        self.config.locked = state;
    }

    /// First selectable day, inclusive.
    pub fn set_min_date(&mut self, day: DayId) {
        self.config.min_date = Some(day);
    }

    /// Last selectable day, inclusive.
    pub fn set_max_date(&mut self, day: DayId) {
        self.config.max_date = Some(day);
    }

    /// Routes a click on the cell for `day`. Days outside the displayed month
    /// and locked days are ignored.
    pub fn click(&mut self, day: DayId) -> Transition {
        let Some(target) = self.view.find(day).cloned() else {
            log::debug!("click on {day} outside {} ignored", self.cursor);
            return Transition::Ignored;
        };

        let transition = self.selection.apply(&target, PickMode::from_multiple(self.config.multiple_pick));
        if transition == Transition::Ignored {
            log::debug!("click on locked day {day} ignored");
            return transition;
        }

        log::debug!("{day} {transition}, {} day(s) selected", self.selection.len());
        self.update();
        self.emit(Event::Select);
        transition
    }

    /// [`Calendar::click`] addressed by day of month.
    pub fn click_day(&mut self, day_of_month: u8) -> Transition {
        match self.view.day(day_of_month) {
            Some(target) => self.click(target.id),
            None => Transition::Ignored,
        }
    }

    /// Empties the selection and notifies `on_clear` hooks.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.update();
        self.emit(Event::Clear);
    }

    /// Registers a hook after construction.
    pub fn on(&mut self, event: Event, hook: impl FnMut(&Self) + 'static) {
        self.hooks.on(event, hook);
    }

    pub const fn view(&self) -> &MonthView {
        &self.view
    }

    pub fn days(&self) -> &[crate::DayDescriptor] {
        &self.view.days
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    pub const fn today(&self) -> DayId {
        self.today
    }

    fn navigate(&mut self, step: fn(ViewMonth) -> Option<ViewMonth>) {
        match step(self.cursor) {
            Some(cursor) => self.cursor = cursor,
            None => log::debug!("navigation clamped at {}", self.cursor),
        }
        self.update();
        self.emit(Event::Navigation);
    }

    fn period_label(&self) -> String {
        let month = self.cursor.month();
        let name = Month::new(month).map_or_else(
            |_| month.to_string(),
            |month| {
                self.formatter
                    .month_name(month, &self.config.lang, self.config.month_short)
            },
        );
        format!("{name} {}", self.cursor.year())
    }

    fn weekday_labels(&self) -> Vec<String> {
        self.view
            .header
            .iter()
            .map(|weekday: &DayOfWeek| {
                self.formatter
                    .weekday_name(*weekday, &self.config.lang, self.config.week_short)
            })
            .collect()
    }

    fn render(&mut self) {
        let period = self.period_label();
        let weekdays = self.weekday_labels();
        let frame = Frame {
            view: &self.view,
            period,
            weekdays,
            rtl: self.config.rtl,
        };
        self.renderer.render(&frame);
    }

    fn emit(&mut self, event: Event) {
        // Hooks only see `&Calendar`, so the list can be lent out while it runs.
        let mut hooks = std::mem::take(&mut self.hooks);
        hooks.fire(event, self);
        self.hooks = hooks;
    }
}

/// Attaches `renderer` to the mount point `config` names.
fn mount(renderer: &mut dyn Renderer, config: &Config) -> Result<(), ConfigError> {
    let mount = Mount {
        selector: &config.selector,
        nav:      config.nav_labels(),
        rtl:      config.rtl,
    };
    if renderer.attach(&mount) {
        Ok(())
    } else {
        Err(ConfigError::MissingSelector(config.selector.clone()))
    }
}

impl fmt::Debug for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calendar")
            .field("config", &self.config)
            .field("cursor", &self.cursor)
            .field("today", &self.today)
            .field("selection", &self.selection)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}
