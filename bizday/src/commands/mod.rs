//! CLI command implementations
//!
//! Each submodule implements one sub-command as a `CommandArgs` struct and a
//! `command` function writing its report to the given output.

pub mod business_days;
pub mod export;
pub mod holidays;
pub mod list;

use bizday_time::{Date, HolidayCalendar, TimeOfDay, TimeWindow, YearMonth};
use clap::Args;

use crate::error::Result;
use crate::settings::Settings;

/// Date range options shared by the range-based commands.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// First date of the range (YYYY-MM-DD). Defaults to the first day of
    /// the current month.
    #[arg(long)]
    pub start: Option<Date>,

    /// Last date of the range, inclusive (YYYY-MM-DD). Defaults to the last
    /// day of the month eleven months after the current one.
    #[arg(long)]
    pub end: Option<Date>,
}

/// Schedule options shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct ScheduleArgs {
    /// Rank of the business day within each month (1 = first business day).
    /// Zero or negative ranks match nothing.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub business_day: Option<i32>,

    /// Event start time (HH:MM).
    #[arg(long)]
    pub start_time: Option<TimeOfDay>,

    /// Event end time (HH:MM).
    #[arg(long)]
    pub end_time: Option<TimeOfDay>,
}

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct Context {
    settings: Settings,
    calendar: HolidayCalendar,
    today: Date,
}

impl Context {
    /// Build the context, loading the calendar the settings point at.
    pub fn new(settings: Settings, today: Date) -> Result<Self> {
        let calendar = settings.calendar()?;
        Ok(Self {
            settings,
            calendar,
            today,
        })
    }

    /// Effective settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The holiday calendar in use.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// The date treated as "today" for default ranges.
    pub fn today(&self) -> Date {
        self.today
    }

    /// Resolve a range, filling unset ends from [`default_range`].
    pub fn range(&self, args: &RangeArgs) -> Result<(Date, Date)> {
        match (args.start, args.end) {
            (Some(start), Some(end)) => Ok((start, end)),
            (start, end) => {
                let (default_start, default_end) = default_range(self.today)?;
                Ok((start.unwrap_or(default_start), end.unwrap_or(default_end)))
            }
        }
    }

    /// The business-day rank, from the flag or the settings.
    pub fn business_day(&self, args: &ScheduleArgs) -> i32 {
        args.business_day
            .unwrap_or(self.settings.schedule.business_day)
    }

    /// The event window, from the flags or the settings.
    pub fn window(&self, args: &ScheduleArgs) -> Result<TimeWindow> {
        let schedule = &self.settings.schedule;
        Ok(TimeWindow::new(
            args.start_time.unwrap_or(schedule.start_time),
            args.end_time.unwrap_or(schedule.end_time),
        )?)
    }
}

/// Twelve whole months starting with the month containing `today`: from its
/// first day to the last day of the month eleven months later.
pub fn default_range(today: Date) -> Result<(Date, Date)> {
    let this_month = YearMonth::of(today);
    let last_month = this_month.add_months(11)?;
    Ok((this_month.first_day(), last_month.last_day()))
}

/// `YYYY-MM-DD (Ddd)`.
pub fn format_day(date: Date) -> String {
    format!("{date} ({})", date.weekday().short_name())
}
