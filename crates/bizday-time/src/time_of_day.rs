//! Wall-clock times and the event window placed on each resolved date.
//!
//! Times are local and floating: no time zone is attached.

use std::str::FromStr;

use bizday_core::errors::{Error, Result};
use bizday_core::utilities::{format_clock, parse_time_of_day};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::Date;

/// A time of day with minute precision.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a time from an hour (0–23) and minute (0–59).
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 {
            return Err(Error::InvalidArgument(format!("hour {hour} out of range [0, 23]")));
        }
        if minute > 59 {
            return Err(Error::InvalidArgument(format!(
                "minute {minute} out of range [0, 59]"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Return the hour.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Return the minute.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Compact `HHMM` form, suitable for file names.
    pub fn compact(&self) -> String {
        format!("{:02}{:02}", self.hour, self.minute)
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(value: TimeOfDay) -> Self {
        NaiveTime::from_hms_opt(value.hour.into(), value.minute.into(), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_clock(self.hour, self.minute))
    }
}

impl std::fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeOfDay({self})")
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    /// Parse `HH:MM`.
    fn from_str(s: &str) -> Result<Self> {
        let (h, m) = parse_time_of_day(s)
            .ok_or_else(|| Error::Parse(format!("'{s}' is not an HH:MM time")))?;
        TimeOfDay::new(h, m)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A start/end pair of times on the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeWindow {
    /// Create a window. `end` must be strictly after `start`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if end <= start {
            return Err(Error::InvalidArgument(format!(
                "time window end {end} must be after start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Start of the window.
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// End of the window.
    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Place the window on `date`, yielding floating local start and end
    /// timestamps.
    pub fn on(&self, date: Date) -> (NaiveDateTime, NaiveDateTime) {
        let day = NaiveDate::from(date);
        (day.and_time(self.start.into()), day.and_time(self.end.into()))
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn parse_and_display() {
        assert_eq!(time("9:05").to_string(), "09:05");
        assert_eq!(time("23:45").compact(), "2345");
        assert!(matches!("24:00".parse::<TimeOfDay>(), Err(Error::InvalidArgument(_))));
        assert!(matches!("10:60".parse::<TimeOfDay>(), Err(Error::InvalidArgument(_))));
        assert!(matches!("noon".parse::<TimeOfDay>(), Err(Error::Parse(_))));
    }

    #[test]
    fn window_requires_end_after_start() {
        assert!(TimeWindow::new(time("10:00"), time("11:00")).is_ok());
        assert!(TimeWindow::new(time("10:00"), time("10:00")).is_err());
        assert!(TimeWindow::new(time("11:00"), time("10:30")).is_err());
    }

    #[test]
    fn window_on_date() {
        let window = TimeWindow::new(time("10:00"), time("11:30")).unwrap();
        assert_eq!(window.to_string(), "10:00-11:30");
        let (start, end) = window.on(Date::from_ymd(2024, 1, 10).unwrap());
        assert_eq!(start.to_string(), "2024-01-10 10:00:00");
        assert_eq!(end.to_string(), "2024-01-10 11:30:00");
    }

    #[test]
    fn serde_uses_clock_string() {
        assert_eq!(serde_json::to_string(&time("07:15")).unwrap(), "\"07:15\"");
        let t: TimeOfDay = serde_json::from_str("\"18:00\"").unwrap();
        assert_eq!((t.hour(), t.minute()), (18, 0));
    }
}
