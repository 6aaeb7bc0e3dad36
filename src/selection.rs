use crate::{DayDescriptor, DayId, prelude::*};

/// How a click changes the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickMode {
    /// Exactly one selected day; every click replaces it.
    Single,
    /// Any number of days; every click toggles the clicked day.
    Multiple,
}

impl PickMode {
    pub const fn from_multiple(multiple_pick: bool) -> Self {
        if multiple_pick { Self::Multiple } else { Self::Single }
    }
}

/// Result of applying one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Transition {
    /// The day is locked; nothing changed.
    #[display(fmt = "ignored")]
    Ignored,
    #[display(fmt = "selected")]
    Selected,
    #[display(fmt = "deselected")]
    Deselected,
}

/// Selected days in click order plus the last day that took a click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    days: Vec<DayId>,
    last: Option<DayId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(days: impl IntoIterator<Item = DayId>) -> Self {
        Self {
            days: days.into_iter().collect(),
            last: None,
        }
    }

    pub fn days(&self) -> &[DayId] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn contains(&self, day: DayId) -> bool {
        self.days.contains(&day)
    }

    /// Last day that received a non-locked click, whether or not it is still
    /// selected.
    pub const fn last_selected(&self) -> Option<DayId> {
        self.last
    }

    pub fn clear(&mut self) {
        self.days.clear();
    }

    /// Applies a click on `day`.
    ///
    /// In single-pick mode a click on the already selected day keeps it
    /// selected; only multi-pick toggles.
    pub fn apply(&mut self, day: &DayDescriptor, mode: PickMode) -> Transition {
        if day.locked {
            return Transition::Ignored;
        }

        self.last = Some(day.id);
        match mode {
            PickMode::Single => {
                self.days.clear();
                self.days.push(day.id);
                Transition::Selected
            },
            PickMode::Multiple => {
                self.days.retain(|selected| *selected != day.id);
                if day.is_selected {
                    Transition::Deselected
                } else {
                    self.days.push(day.id);
                    Transition::Selected
                }
            },
        }
    }
}
