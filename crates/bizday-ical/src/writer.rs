//! Calendar assembly, rendering, and the labels used for N-th business day
//! schedules.

use bizday_core::utilities::format_ordinal;
use bizday_time::{Date, TimeWindow};
use icalendar::{Calendar, Event};
use tracing::debug;

use crate::event::create_events_for_dates;

/// Collect `events` into a calendar called `name`.
pub fn create_calendar(events: impl IntoIterator<Item = Event>, name: &str) -> Calendar {
    let mut calendar = Calendar::new();
    calendar.name(name);
    for event in events {
        calendar.push(event);
    }
    calendar.done()
}

/// Render `events` as the text of an `.ics` file (CRLF line endings).
pub fn generate_ical_content(events: impl IntoIterator<Item = Event>, name: &str) -> String {
    create_calendar(events, name).to_string()
}

/// Text attached to an N-th business day schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleLabels {
    /// Event title, e.g. `7th business day 10:00-11:00`.
    pub summary: String,
    /// Event body, e.g. `Monthly schedule on the 7th business day`.
    pub description: String,
    /// Calendar name, e.g. `7th business day calendar`.
    pub calendar_name: String,
}

/// Labels for the `n`-th business day held during `window`.
pub fn nth_business_day_labels(n: u32, window: TimeWindow) -> ScheduleLabels {
    let ordinal = format_ordinal(n);
    ScheduleLabels {
        summary: format!("{ordinal} business day {window}"),
        description: format!("Monthly schedule on the {ordinal} business day"),
        calendar_name: format!("{ordinal} business day calendar"),
    }
}

/// Render a full `.ics` document with one event per date in `dates`, titled
/// and described for the `n`-th business day.
pub fn generate_nth_business_day_events(dates: &[Date], window: TimeWindow, n: u32) -> String {
    let labels = nth_business_day_labels(n, window);
    let events = create_events_for_dates(dates, window, &labels.summary, &labels.description);
    debug!(
        events = events.len(),
        calendar = %labels.calendar_name,
        "rendering n-th business day calendar"
    );
    generate_ical_content(events, &labels.calendar_name)
}

/// Suggested file name for an exported schedule, e.g.
/// `7th-business-day_1000-1100.ics`.
pub fn default_file_name(n: u32, window: TimeWindow) -> String {
    format!(
        "{}-business-day_{}-{}.ics",
        format_ordinal(n),
        window.start().compact(),
        window.end().compact()
    )
}
