//! Scheduling conflict detection between two events.
//!
//! The detection itself is a pure predicate over the two time windows.
//! [`windows_overlap`] and [`detect`] carry the straightforward semantics;
//! the legacy inverted success/failure reporting lives only on
//! [`crate::event::Event::has_scheduling_conflict`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::identifiers::EventId;

/// A detected overlap between two events' schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingConflict {
    pub event_id: EventId,
    pub conflicting_event_id: EventId,
    /// Calendar day (UTC) on which both events run.
    pub conflict_date: NaiveDate,
}

/// Whether the two events' `[start, end]` windows overlap on the same
/// calendar day: both start on the same UTC day and the inclusive intervals
/// intersect.
pub fn windows_overlap(a: &Event, b: &Event) -> bool {
    a.start_date().date_naive() == b.start_date().date_naive()
        && a.start_date() <= b.end_date()
        && b.start_date() <= a.end_date()
}

/// Detect a conflict between two events, if any.
pub fn detect(event: &Event, other: &Event) -> Option<SchedulingConflict> {
    if windows_overlap(event, other) {
        Some(SchedulingConflict {
            event_id: event.id(),
            conflicting_event_id: other.id(),
            conflict_date: event.start_date().date_naive(),
        })
    } else {
        None
    }
}
