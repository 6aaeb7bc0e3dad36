use crate::{Calendar, prelude::*};

/// Lifecycle notifications delivered to host callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Event {
    #[display(fmt = "load")]
    Load,
    #[display(fmt = "clear")]
    Clear,
    #[display(fmt = "navigation")]
    Navigation,
    #[display(fmt = "select")]
    Select,
}

/// Callback invoked after the calendar finished the change it reports.
pub type Hook = Box<dyn FnMut(&Calendar)>;

/// Observer lists, one per [`Event`], run in registration order.
#[derive(Default)]
pub struct Hooks {
    on_load:       Vec<Hook>,
    on_clear:      Vec<Hook>,
    on_navigation: Vec<Hook>,
    on_select:     Vec<Hook>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&mut self, event: Event, hook: impl FnMut(&Calendar) + 'static) -> &mut Self {
        self.list_mut(event).push(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_load(mut self, hook: impl FnMut(&Calendar) + 'static) -> Self {
        self.on(Event::Load, hook);
        self
    }

    #[must_use]
    pub fn on_clear(mut self, hook: impl FnMut(&Calendar) + 'static) -> Self {
        self.on(Event::Clear, hook);
        self
    }

    #[must_use]
    pub fn on_navigation(mut self, hook: impl FnMut(&Calendar) + 'static) -> Self {
        self.on(Event::Navigation, hook);
        self
    }

    #[must_use]
    pub fn on_select(mut self, hook: impl FnMut(&Calendar) + 'static) -> Self {
        self.on(Event::Select, hook);
        self
    }

    pub fn count(&self, event: Event) -> usize {
        match event {
            Event::Load => self.on_load.len(),
            Event::Clear => self.on_clear.len(),
            Event::Navigation => self.on_navigation.len(),
            Event::Select => self.on_select.len(),
        }
    }

    pub(crate) fn fire(&mut self, event: Event, calendar: &Calendar) {
        log::trace!("firing {event} hooks ({})", self.count(event));
        for hook in self.list_mut(event) {
            hook(calendar);
        }
    }

    fn list_mut(&mut self, event: Event) -> &mut Vec<Hook> {
        match event {
            Event::Load => &mut self.on_load,
            Event::Clear => &mut self.on_clear,
            Event::Navigation => &mut self.on_navigation,
            Event::Select => &mut self.on_select,
        }
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("on_load", &self.on_load.len())
            .field("on_clear", &self.on_clear.len())
            .field("on_navigation", &self.on_navigation.len())
            .field("on_select", &self.on_select.len())
            .finish()
    }
}
