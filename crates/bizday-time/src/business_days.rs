//! Business-day search: the N-th business day of a month, the N-th
//! business day of every month in a range, and plain business-day scans.
//!
//! None of these routines fail. Degenerate input (a non-positive rank, a
//! reversed range, a month with too few business days) produces `None` or
//! an empty vector.

use std::iter;

use tracing::{debug, warn};

use crate::calendar::Calendar;
use crate::date::Date;
use crate::year_month::YearMonth;

/// Every calendar day in `[from, to]`, in order. Empty when `to < from`.
fn days(from: Date, to: Date) -> impl Iterator<Item = Date> {
    iter::successors(Some(from), |d| d.next_day()).take_while(move |d| *d <= to)
}

/// The `n`-th business day of `month` in `year` (months are 1-based).
///
/// Counting starts at day 1 of the month and stops as soon as the `n`-th
/// business day is reached. Returns `None` if `n <= 0`, if the month has
/// fewer than `n` business days, or if `(year, month)` is not a valid month.
///
/// # Example
/// ```
/// use bizday_time::{nth_business_day, Date, WeekendsOnly};
///
/// // January 2024 starts on a Monday.
/// let d = nth_business_day(&WeekendsOnly, 2024, 1, 6).unwrap();
/// assert_eq!(d, Date::from_ymd(2024, 1, 8).unwrap());
/// ```
pub fn nth_business_day<C>(calendar: &C, year: u16, month: u8, n: i32) -> Option<Date>
where
    C: Calendar + ?Sized,
{
    let ym = YearMonth::new(year, month).ok()?;
    nth_business_day_of(calendar, ym, n)
}

/// [`nth_business_day`] for an already validated [`YearMonth`].
pub fn nth_business_day_of<C>(calendar: &C, month: YearMonth, n: i32) -> Option<Date>
where
    C: Calendar + ?Sized,
{
    let rank = usize::try_from(n).ok().filter(|&r| r >= 1)?;
    days(month.first_day(), month.last_day())
        .filter(|d| calendar.is_business_day(*d))
        .nth(rank - 1)
}

/// The `n`-th business day of every month overlapping `[start, end]`,
/// keeping only those that themselves fall inside `[start, end]`.
///
/// The result is in chronological order, one date per qualifying month.
/// Returns an empty vector for a reversed range or `n <= 0`.
///
/// Years outside the calendar's holiday coverage are still searched, with no
/// holidays applied; a warning is logged when that happens.
pub fn all_nth_business_days<C>(calendar: &C, start: Date, end: Date, n: i32) -> Vec<Date>
where
    C: Calendar + ?Sized,
{
    if end < start || n <= 0 {
        debug!(%start, %end, n, "empty business-day query");
        return Vec::new();
    }
    let uncovered: Vec<u16> = (start.year()..=end.year())
        .filter(|&y| !calendar.covers_year(y))
        .collect();
    if !uncovered.is_empty() {
        warn!(
            calendar = calendar.name(),
            years = ?uncovered,
            "holiday data does not cover these years; only weekends are excluded"
        );
    }

    let dates: Vec<Date> = YearMonth::span(start, end)
        .filter_map(|ym| nth_business_day_of(calendar, ym, n))
        .filter(|d| (start..=end).contains(d))
        .collect();
    debug!(
        calendar = calendar.name(),
        %start,
        %end,
        n,
        found = dates.len(),
        "resolved n-th business days"
    );
    dates
}

/// Every business day in `[start, end]`, in order.
pub fn all_business_days_between<C>(calendar: &C, start: Date, end: Date) -> Vec<Date>
where
    C: Calendar + ?Sized,
{
    days(start, end)
        .filter(|d| calendar.is_business_day(*d))
        .collect()
}

/// The date reached by stepping forward `count` business days from `start`.
///
/// `start` itself is never counted. Returns `start` when `count <= 0`, and
/// `None` only if the walk runs past [`Date::MAX`].
pub fn date_after_business_days<C>(calendar: &C, start: Date, count: i32) -> Option<Date>
where
    C: Calendar + ?Sized,
{
    let Ok(steps @ 1..) = usize::try_from(count) else {
        return Some(start);
    };
    iter::successors(start.next_day(), |d| d.next_day())
        .filter(|d| calendar.is_business_day(*d))
        .nth(steps - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{HolidayCalendar, WeekendsOnly};
    use crate::holidays::{Holiday, HolidayTable};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    /// Weekends plus New Year's Day 2024 only.
    fn new_year_2024() -> HolidayCalendar {
        HolidayCalendar::from_table(HolidayTable::from_records(
            "New Year",
            [Holiday::new(date(2024, 1, 1), "New Year's Day")],
        ))
    }

    #[test]
    fn seventh_business_day_of_january_2024() {
        let cal = new_year_2024();
        assert_eq!(nth_business_day(&cal, 2024, 1, 1), Some(date(2024, 1, 2)));
        assert_eq!(nth_business_day(&cal, 2024, 1, 7), Some(date(2024, 1, 10)));
        assert_eq!(nth_business_day(&cal, 2024, 1, 22), Some(date(2024, 1, 31)));
        assert_eq!(nth_business_day(&cal, 2024, 1, 23), None);
    }

    #[test]
    fn non_positive_rank_is_none() {
        let cal = WeekendsOnly;
        assert_eq!(nth_business_day(&cal, 2024, 1, 0), None);
        assert_eq!(nth_business_day(&cal, 2024, 1, -3), None);
    }

    #[test]
    fn invalid_month_is_none() {
        assert_eq!(nth_business_day(&WeekendsOnly, 2024, 13, 1), None);
        assert_eq!(nth_business_day(&WeekendsOnly, 2024, 0, 1), None);
    }

    #[test]
    fn february_has_no_25th_business_day() {
        let cal = WeekendsOnly;
        assert_eq!(nth_business_day(&cal, 2024, 2, 21), Some(date(2024, 2, 29)));
        assert_eq!(nth_business_day(&cal, 2024, 2, 25), None);
        let in_range = all_nth_business_days(&cal, date(2024, 1, 1), date(2024, 3, 31), 25);
        assert!(in_range.is_empty());
    }

    #[test]
    fn single_day_range() {
        let cal = new_year_2024();
        let day = date(2024, 1, 10);
        assert_eq!(all_nth_business_days(&cal, day, day, 7), vec![day]);
        assert!(all_nth_business_days(&cal, day, day, 8).is_empty());
    }

    #[test]
    fn partial_months_at_both_ends() {
        let cal = WeekendsOnly;
        // 1st business day of Feb 2024 is Thu Feb 1 (before start);
        // March's is Fri Mar 1; April's is Mon Apr 1 (after end).
        let got = all_nth_business_days(&cal, date(2024, 2, 2), date(2024, 3, 31), 1);
        assert_eq!(got, vec![date(2024, 3, 1)]);
    }

    #[test]
    fn range_crosses_year_end() {
        let cal = WeekendsOnly;
        let got = all_nth_business_days(&cal, date(2023, 11, 1), date(2024, 2, 29), 3);
        assert_eq!(
            got,
            vec![
                date(2023, 11, 3),
                date(2023, 12, 5),
                date(2024, 1, 3),
                date(2024, 2, 5),
            ]
        );
    }

    #[test]
    fn reversed_range_is_empty() {
        let cal = WeekendsOnly;
        assert!(all_nth_business_days(&cal, date(2024, 3, 1), date(2024, 1, 1), 1).is_empty());
        assert!(all_business_days_between(&cal, date(2024, 3, 1), date(2024, 1, 1)).is_empty());
    }

    #[test]
    fn works_through_trait_object() {
        let cal: Box<dyn Calendar> = Box::new(new_year_2024());
        assert_eq!(
            nth_business_day(cal.as_ref(), 2024, 1, 7),
            Some(date(2024, 1, 10))
        );
    }

    #[test]
    fn business_days_of_first_week() {
        let cal = new_year_2024();
        let got = all_business_days_between(&cal, date(2023, 12, 29), date(2024, 1, 8));
        assert_eq!(
            got,
            vec![
                date(2023, 12, 29),
                date(2024, 1, 2),
                date(2024, 1, 3),
                date(2024, 1, 4),
                date(2024, 1, 5),
                date(2024, 1, 8),
            ]
        );
    }

    #[test]
    fn advance_business_days() {
        let cal = new_year_2024();
        let fri = date(2023, 12, 29);
        assert_eq!(date_after_business_days(&cal, fri, 0), Some(fri));
        assert_eq!(date_after_business_days(&cal, fri, -2), Some(fri));
        assert_eq!(date_after_business_days(&cal, fri, 1), Some(date(2024, 1, 2)));
        assert_eq!(date_after_business_days(&cal, fri, 5), Some(date(2024, 1, 8)));
        assert_eq!(date_after_business_days(&cal, Date::MAX, 1), None);
    }
}
