//! `YearMonth` — a calendar month of a specific year.
//!
//! Months are addressed by a linear index (`year * 12 + month - 1`), so a
//! span of months across year boundaries is a plain integer range and year
//! rollover needs no special casing.

use bizday_core::errors::{Error, Result};

use crate::date::{days_in_month, Date};
use crate::month::Month;

/// A (year, month) pair. Months are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: u16,
    month: Month,
}

impl YearMonth {
    /// Create from a year and a 1-based month number.
    pub fn new(year: u16, month: u8) -> Result<Self> {
        let month = Month::from_number(month)
            .ok_or_else(|| Error::Date(format!("month {month} out of range [1, 12]")))?;
        // Validates the year against the supported date range.
        Date::from_ymd(year, month.number(), 1)?;
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: Date) -> Self {
        let (year, month, _) = date.ymd();
        Self {
            year,
            month: Month::from_number(month).unwrap_or(Month::January),
        }
    }

    /// Return the year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Linear month index: `year * 12 + (month - 1)`.
    pub fn index(&self) -> u32 {
        u32::from(self.year) * 12 + u32::from(self.month.number() - 1)
    }

    /// Inverse of [`YearMonth::index`].
    fn from_index(index: u32) -> Self {
        let year = (index / 12) as u16;
        let month = Month::from_number((index % 12) as u8 + 1).unwrap_or(Month::January);
        Self { year, month }
    }

    /// The first calendar day of the month.
    pub fn first_day(&self) -> Date {
        Date::from_ymd(self.year, self.month.number(), 1).unwrap_or(Date::MIN)
    }

    /// The last calendar day of the month.
    pub fn last_day(&self) -> Date {
        self.first_day().end_of_month()
    }

    /// Number of calendar days in the month.
    pub fn len_days(&self) -> u8 {
        days_in_month(self.year, self.month.number())
    }

    /// The month `months` after this one. Fails past the supported date
    /// range.
    pub fn add_months(self, months: u32) -> Result<Self> {
        let overflow = || Error::Date(format!("{self} plus {months} months is out of range"));
        let index = self.index().checked_add(months).ok_or_else(overflow)?;
        let year = u16::try_from(index / 12).map_err(|_| overflow())?;
        Self::new(year, (index % 12) as u8 + 1)
    }

    /// Every month overlapping the inclusive range `[start, end]`, in
    /// chronological order. Empty when `end < start`.
    pub fn span(start: Date, end: Date) -> impl Iterator<Item = YearMonth> {
        let first = Self::of(start).index();
        let last = Self::of(end).index();
        let count = if end < start { 0 } else { last - first + 1 };
        (0..count).map(move |offset| Self::from_index(first + offset))
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn index_roundtrip() {
        let ym = YearMonth::new(2024, 12).unwrap();
        assert_eq!(YearMonth::from_index(ym.index()), ym);
        assert_eq!(YearMonth::from_index(ym.index() + 1).to_string(), "2025-01");
    }

    #[test]
    fn rejects_bad_month() {
        assert!(YearMonth::new(2024, 0).is_err());
        assert!(YearMonth::new(2024, 13).is_err());
        assert!(YearMonth::new(1850, 1).is_err());
    }

    #[test]
    fn month_bounds() {
        let feb = YearMonth::new(2024, 2).unwrap();
        assert_eq!(feb.first_day(), date(2024, 2, 1));
        assert_eq!(feb.last_day(), date(2024, 2, 29));
        assert_eq!(feb.len_days(), 29);
        assert_eq!(feb.month(), Month::February);
    }

    #[test]
    fn add_months_rolls_over_years() {
        let oct = YearMonth::new(2024, 10).unwrap();
        assert_eq!(oct.add_months(0).unwrap(), oct);
        assert_eq!(oct.add_months(11).unwrap().to_string(), "2025-09");
        assert_eq!(oct.add_months(27).unwrap().to_string(), "2027-01");
        assert!(YearMonth::new(2199, 12).unwrap().add_months(1).is_err());
        assert!(oct.add_months(u32::MAX).is_err());
    }

    #[test]
    fn span_single_month() {
        let months: Vec<_> = YearMonth::span(date(2024, 1, 10), date(2024, 1, 10)).collect();
        assert_eq!(months, vec![YearMonth::new(2024, 1).unwrap()]);
    }

    #[test]
    fn span_across_years() {
        let months: Vec<String> = YearMonth::span(date(2023, 11, 20), date(2025, 2, 1))
            .map(|ym| ym.to_string())
            .collect();
        assert_eq!(months.len(), 16);
        assert_eq!(months.first().map(String::as_str), Some("2023-11"));
        assert_eq!(months[2], "2024-01");
        assert_eq!(months.last().map(String::as_str), Some("2025-02"));
    }

    #[test]
    fn span_reversed_is_empty() {
        assert_eq!(YearMonth::span(date(2024, 3, 1), date(2024, 2, 1)).count(), 0);
        // Same month, reversed days.
        assert_eq!(YearMonth::span(date(2024, 3, 9), date(2024, 3, 1)).count(), 0);
    }
}
