//! Time-range dropdown
//!
//! Keyboard state of the range dropdown in the header. Confirming an entry
//! yields the chosen range; whether that triggers a reload is up to the
//! controller.

use crate::model::TimeRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRangeSelector {
    open: bool,
    highlighted: usize,
}

impl TimeRangeSelector {
    pub fn new(current: TimeRange) -> Self {
        Self {
            open: false,
            highlighted: current.index(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> TimeRange {
        TimeRange::ALL[self.highlighted]
    }

    /// Open the dropdown on the current range, or close it.
    pub fn toggle(&mut self, current: TimeRange) {
        self.open = !self.open;
        if self.open {
            self.highlighted = current.index();
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn move_up(&mut self) {
        if self.open {
            self.highlighted = self.highlighted.saturating_sub(1);
        }
    }

    pub fn move_down(&mut self) {
        if self.open {
            self.highlighted = (self.highlighted + 1).min(TimeRange::ALL.len() - 1);
        }
    }

    /// Confirm the highlighted entry and close.
    pub fn confirm(&mut self) -> Option<TimeRange> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(self.highlighted())
    }

    /// Pick a range by its 1-based position, as bound to the number keys.
    pub fn pick(&mut self, position: usize) -> Option<TimeRange> {
        let range = *TimeRange::ALL.get(position.checked_sub(1)?)?;
        self.highlighted = range.index();
        self.open = false;
        Some(range)
    }
}
