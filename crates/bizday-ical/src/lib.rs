//! # bizday-ical
//!
//! Turns resolved business days into iCalendar (`.ics`) events.
//!
//! Every event carries the same floating local time window; no time zone is
//! attached, so calendar clients show the event at the same wall-clock time
//! wherever they run.
//!
//! ```
//! use bizday_ical::generate_nth_business_day_events;
//! use bizday_time::{Date, TimeOfDay, TimeWindow};
//!
//! let window = TimeWindow::new(
//!     TimeOfDay::new(10, 0).unwrap(),
//!     TimeOfDay::new(11, 0).unwrap(),
//! )
//! .unwrap();
//! let dates = [Date::from_ymd(2024, 1, 10).unwrap()];
//! let ics = generate_nth_business_day_events(&dates, window, 7);
//! assert!(ics.contains("SUMMARY:7th business day 10:00-11:00"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Building single events and event lists.
pub mod event;

/// Assembling and rendering calendars.
pub mod writer;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use event::{create_event, create_events_for_dates};
pub use writer::{
    create_calendar, default_file_name, generate_ical_content, generate_nth_business_day_events,
    nth_business_day_labels, ScheduleLabels,
};
