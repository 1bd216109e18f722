//! "Show more" windowing over the activity timeline.
//!
//! Whole months are shown or hidden; a month is never cut in half. Months
//! stay visible while the running activity count is within the cap. The
//! first month that would exceed it, and every month after, is deferred
//! behind the toggle, so a leading month larger than the cap leaves the
//! collapsed view empty.

use crate::timeline::MonthBucket;

/// Split of a timeline into default-visible and deferred months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityWindow<'a> {
    months: &'a [MonthBucket],
    split: usize,
}

impl<'a> VisibilityWindow<'a> {
    /// Months shown by default.
    pub fn visible_months(&self) -> &'a [MonthBucket] {
        &self.months[..self.split]
    }

    /// Months deferred behind the toggle.
    pub fn hidden_months(&self) -> &'a [MonthBucket] {
        &self.months[self.split..]
    }

    /// Every month, in timeline order.
    pub const fn all_months(&self) -> &'a [MonthBucket] {
        self.months
    }

    /// Total activities across hidden months.
    pub fn hidden_activity_count(&self) -> usize {
        self.hidden_months().iter().map(MonthBucket::len).sum()
    }

    /// Whether a "show more" control should be offered at all.
    pub fn has_toggle(&self) -> bool {
        self.split < self.months.len()
    }
}

/// Computes which months are visible under `cap` activities.
pub fn compute_visible(months: &[MonthBucket], cap: usize) -> VisibilityWindow<'_> {
    let mut running = 0usize;
    let mut split = months.len();

    for (i, month) in months.iter().enumerate() {
        running = running.saturating_add(month.len());
        if running > cap {
            split = i;
            break;
        }
    }

    VisibilityWindow { months, split }
}

/// Expanded/collapsed state of the timeline for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityState<'a> {
    window: VisibilityWindow<'a>,
    expanded: bool,
}

impl<'a> VisibilityState<'a> {
    /// Starts collapsed.
    pub const fn new(window: VisibilityWindow<'a>) -> Self {
        Self {
            window,
            expanded: false,
        }
    }

    /// Flips between collapsed and expanded and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub const fn window(&self) -> VisibilityWindow<'a> {
        self.window
    }

    /// Months currently displayed.
    pub fn shown_months(&self) -> &'a [MonthBucket] {
        if self.expanded {
            self.window.all_months()
        } else {
            self.window.visible_months()
        }
    }

    /// Number of activities currently displayed.
    pub fn visible_count(&self) -> usize {
        self.shown_months().iter().map(MonthBucket::len).sum()
    }

    /// Label for the toggle control, `None` when nothing is hidden.
    pub fn toggle_label(&self) -> Option<&'static str> {
        if !self.window.has_toggle() {
            return None;
        }
        Some(if self.expanded {
            "Show less activity"
        } else {
            "Show more activity"
        })
    }
}
