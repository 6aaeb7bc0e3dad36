//! Shared constructors and a recording renderer for unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{DayDescriptor, DayId, DayRange, Frame, Month, Mount, MonthView, Renderer, Selection, ViewMonth, Year};

pub fn day(year: u16, month: u8, day: u8) -> DayId {
    DayId::from_ymd(year, month, day).expect("test date should be valid")
}

pub fn range(start: DayId, end: DayId) -> DayRange {
    DayRange::new(start, end).expect("test range should be ordered")
}

pub fn view_month(year: u16, month: u8) -> ViewMonth {
    ViewMonth::new(
        Year::new(year).expect("test year should be valid"),
        Month::new(month).expect("test month should be valid"),
    )
}

/// Unlocked descriptor whose selected flag mirrors `selection`.
pub fn descriptor(id: DayId, selection: &Selection) -> DayDescriptor {
    DayDescriptor {
        day_of_month: id.day(),
        id,
        weekday: id.weekday(),
        is_weekend: id.weekday().is_weekend(),
        locked: false,
        is_today: false,
        is_selected: selection.contains(id),
        highlight: None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub period:   String,
    pub weekdays: Vec<String>,
    pub rtl:      bool,
    pub view:     MonthView,
}

#[derive(Debug, Default)]
pub struct RenderLog {
    pub attached: Option<String>,
    pub nav:      Option<[String; 2]>,
    pub frames:   Vec<RenderedFrame>,
    pub detached: bool,
}

impl RenderLog {
    pub fn last(&self) -> &RenderedFrame {
        self.frames.last().expect("at least one frame should be rendered")
    }
}

/// Renderer that knows a fixed set of mount points and records every call.
pub struct RecordingRenderer {
    mounts: Vec<String>,
    log:    Rc<RefCell<RenderLog>>,
}

impl RecordingRenderer {
    pub fn new(mounts: &[&str]) -> (Self, Rc<RefCell<RenderLog>>) {
        let log = Rc::new(RefCell::new(RenderLog::default()));
        let renderer = Self {
            mounts: mounts.iter().map(|m| (*m).to_owned()).collect(),
            log:    Rc::clone(&log),
        };
        (renderer, log)
    }
}

impl Renderer for RecordingRenderer {
    fn attach(&mut self, mount: &Mount<'_>) -> bool {
        if !self.mounts.iter().any(|m| m == mount.selector) {
            return false;
        }
        let mut log = self.log.borrow_mut();
        log.attached = Some(mount.selector.to_owned());
        log.nav = mount.nav.cloned();
        true
    }

    fn render(&mut self, frame: &Frame<'_>) {
        self.log.borrow_mut().frames.push(RenderedFrame {
            period:   frame.period.clone(),
            weekdays: frame.weekdays.clone(),
            rtl:      frame.rtl,
            view:     frame.view.clone(),
        });
    }

    fn detach(&mut self) {
        self.log.borrow_mut().detached = true;
    }
}
