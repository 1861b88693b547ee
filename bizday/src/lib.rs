//! # bizday
//!
//! Finds the N-th business day of every month in a date range and exports
//! the result as an iCalendar schedule.
//!
//! This crate is a **façade** over the workspace crates plus the `bizday`
//! command-line shell (settings, errors and sub-commands).
//!
//! ```rust
//! use bizday::time::{all_nth_business_days, Date, HolidayCalendar};
//!
//! let cal = HolidayCalendar::japan();
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 12, 31).unwrap();
//! assert_eq!(all_nth_business_days(&cal, start, end, 7).len(), 12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and text utilities.
pub use bizday_core as core;

/// Dates, holiday tables, calendars and business-day search.
pub use bizday_time as time;

/// iCalendar output.
pub use bizday_ical as ical;

/// Command-line definition and dispatch.
pub mod cli;

/// Sub-command implementations.
pub mod commands;

/// Shell error type.
pub mod error;

/// Layered settings (file, environment, flags).
pub mod settings;

pub use cli::{Cli, Commands, GlobalOpts};
pub use commands::Context;
pub use error::{CliError, Result};
pub use settings::Settings;
