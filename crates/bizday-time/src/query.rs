//! `BusinessDayQuery`, the parameters of an N-th business day search, and
//! `NthBusinessDays`, its ordered result.

use serde::{Deserialize, Serialize};

use crate::business_days::all_nth_business_days;
use crate::calendar::Calendar;
use crate::date::Date;

/// A request for the `n`-th business day of every month in
/// `[start, end]` (inclusive).
///
/// No validation happens here: a reversed range or `n <= 0` resolves to an
/// empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessDayQuery {
    /// First date of the range.
    pub start: Date,
    /// Last date of the range, inclusive.
    pub end: Date,
    /// 1-based rank within each month.
    pub n: i32,
}

impl BusinessDayQuery {
    /// Create a query.
    pub fn new(start: Date, end: Date, n: i32) -> Self {
        Self { start, end, n }
    }

    /// Run the query against `calendar`.
    pub fn resolve(&self, calendar: &dyn Calendar) -> NthBusinessDays {
        NthBusinessDays {
            dates: all_nth_business_days(calendar, self.start, self.end, self.n),
        }
    }
}

/// Chronologically ordered result of a [`BusinessDayQuery`], at most one
/// date per month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NthBusinessDays {
    dates: Vec<Date>,
}

impl NthBusinessDays {
    /// All dates, in order.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if no month qualified.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The earliest date.
    pub fn first(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// The latest date.
    pub fn last(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// Iterate over the dates.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Date>> {
        self.dates.iter().copied()
    }

    /// Consume into the underlying vector.
    pub fn into_vec(self) -> Vec<Date> {
        self.dates
    }
}

impl<'a> IntoIterator for &'a NthBusinessDays {
    type Item = Date;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Date>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WeekendsOnly;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn resolve_quarter() {
        let query = BusinessDayQuery::new(date(2024, 4, 1), date(2024, 6, 30), 1);
        let result = query.resolve(&WeekendsOnly);
        assert_eq!(result.len(), 3);
        assert_eq!(result.first(), Some(date(2024, 4, 1)));
        assert_eq!(result.last(), Some(date(2024, 6, 3)));
        let months: Vec<u8> = result.iter().map(|d| d.month()).collect();
        assert_eq!(months, vec![4, 5, 6]);
    }

    #[test]
    fn degenerate_queries_are_empty() {
        let reversed = BusinessDayQuery::new(date(2024, 6, 30), date(2024, 4, 1), 1);
        assert!(reversed.resolve(&WeekendsOnly).is_empty());
        let zero = BusinessDayQuery::new(date(2024, 4, 1), date(2024, 6, 30), 0);
        assert_eq!(zero.resolve(&WeekendsOnly), NthBusinessDays::default());
    }

    #[test]
    fn query_deserialises_from_json() {
        let query: BusinessDayQuery =
            serde_json::from_str(r#"{ "start": "2024-01-01", "end": "2024-12-31", "n": 7 }"#)
                .unwrap();
        assert_eq!(query.n, 7);
        assert_eq!(query.end, date(2024, 12, 31));
    }
}
