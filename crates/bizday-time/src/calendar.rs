//! `Calendar` trait and concrete calendar implementations.
//!
//! A calendar classifies each date as a weekend, a holiday, or a business
//! day. The search routines in [`crate::business_days`] work against any
//! implementation.

use std::sync::Arc;

use crate::date::Date;
use crate::holidays::HolidayTable;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Japan"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a listed holiday.
    ///
    /// Weekends are not holidays unless the calendar lists them explicitly.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` falls on a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Return `true` if the calendar's holiday data describes `year`.
    ///
    /// Calendars without holiday data cover every year.
    fn covers_year(&self, _year: u16) -> bool {
        true
    }
}

/// A calendar with Saturday/Sunday weekends and holidays from a
/// [`HolidayTable`].
///
/// The table is shared, so cloning the calendar is cheap.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    name: String,
    holidays: Arc<HolidayTable>,
}

impl HolidayCalendar {
    /// Create a calendar over the given holiday table.
    pub fn new(name: impl Into<String>, holidays: Arc<HolidayTable>) -> Self {
        Self {
            name: name.into(),
            holidays,
        }
    }

    /// Create a calendar named after its table.
    pub fn from_table(holidays: HolidayTable) -> Self {
        Self::new(holidays.name().to_owned(), Arc::new(holidays))
    }

    /// The bundled Japanese national-holiday calendar.
    pub fn japan() -> Self {
        Self::new("Japan", HolidayTable::japan())
    }

    /// The underlying holiday table.
    pub fn holidays(&self) -> &HolidayTable {
        &self.holidays
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(date)
    }

    fn covers_year(&self, year: u16) -> bool {
        self.holidays.covers(year)
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}
