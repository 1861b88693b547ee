//! # bizday-time
//!
//! Date, holiday table, calendar, and business-day search types.
//!
//! ```
//! use bizday_time::{all_nth_business_days, Date, HolidayCalendar};
//!
//! let cal = HolidayCalendar::japan();
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 3, 31).unwrap();
//! let dates = all_nth_business_days(&cal, start, end, 7);
//! assert_eq!(dates.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// N-th business day search and business-day scans.
pub mod business_days;

/// Calendar trait and built-in implementations.
pub mod calendar;

/// `Date` type.
pub mod date;

/// Holiday records and tables.
pub mod holidays;

/// `Month` — month of the year.
pub mod month;

/// `BusinessDayQuery` and its result.
pub mod query;

/// `TimeOfDay` and `TimeWindow`.
pub mod time_of_day;

/// `Weekday` — day of the week.
pub mod weekday;

/// `YearMonth` — a month of a specific year.
pub mod year_month;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_days::{
    all_business_days_between, all_nth_business_days, date_after_business_days,
    nth_business_day, nth_business_day_of,
};
pub use calendar::{Calendar, HolidayCalendar, WeekendsOnly};
pub use date::Date;
pub use holidays::{Holiday, HolidayTable};
pub use month::Month;
pub use query::{BusinessDayQuery, NthBusinessDays};
pub use time_of_day::{TimeOfDay, TimeWindow};
pub use weekday::Weekday;
pub use year_month::YearMonth;
