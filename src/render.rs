//! The drawing side of the calendar lives with the host. The engine hands it
//! a finished [`Frame`] and never inspects what was drawn.

use crate::MonthView;

/// Where and how the host should mount the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mount<'a> {
    pub selector: &'a str,
    /// Previous/next glyphs; `None` when navigation is hidden.
    pub nav: Option<&'a [String; 2]>,
    pub rtl: bool,
}

/// One fully resolved month, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    pub view:     &'a MonthView,
    /// Month name and year, e.g. `June 2024`.
    pub period:   String,
    /// Weekday labels in column order.
    pub weekdays: Vec<String>,
    pub rtl:      bool,
}

pub trait Renderer {
    /// Binds to the mount point, replacing any earlier binding; `false` when
    /// no such mount point exists, leaving the earlier binding in place.
    fn attach(&mut self, mount: &Mount<'_>) -> bool;

    /// Replaces whatever month was drawn before.
    fn render(&mut self, frame: &Frame<'_>);

    fn detach(&mut self);
}
