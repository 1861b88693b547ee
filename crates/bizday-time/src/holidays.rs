//! Holiday tables: named non-business dates loaded from data.
//!
//! A [`HolidayTable`] is an immutable set of [`Holiday`] records keyed by
//! calendar date. Tables are built from records or from JSON, so the same
//! search code runs against the bundled Japanese snapshot, a user-supplied
//! file, or a synthetic set in tests.
//!
//! # Coverage
//!
//! Holiday lists are snapshots for specific years, not rules. Every table
//! carries a coverage range of years, either declared in the data or
//! inferred from the records it holds. Outside that range the table simply
//! has no entries: dates there are classified as if no holidays existed.
//! Callers can test [`HolidayTable::covers`] to detect this.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::sync::{Arc, LazyLock};

use bizday_core::ensure;
use bizday_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::date::Date;

/// A single non-business date with a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The calendar date.
    pub date: Date,
    /// Human-readable name, e.g. `"New Year's Day"`.
    pub name: String,
}

impl Holiday {
    /// Create a holiday record.
    pub fn new(date: Date, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

/// Object form of a holiday data file.
#[derive(Debug, Deserialize)]
struct HolidayFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    first_year: Option<u16>,
    #[serde(default)]
    last_year: Option<u16>,
    holidays: Vec<Holiday>,
}

/// An immutable table of holidays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayTable {
    name: String,
    holidays: BTreeMap<Date, Holiday>,
    coverage: Option<RangeInclusive<u16>>,
}

const JAPAN_JSON: &str = include_str!("../data/japan.json");

static JAPAN: LazyLock<Arc<HolidayTable>> = LazyLock::new(|| {
    Arc::new(HolidayTable::from_json_str(JAPAN_JSON).expect("bundled holiday data is valid"))
});

impl HolidayTable {
    /// An empty, unnamed table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from records. Coverage is inferred from the earliest
    /// and latest years present.
    ///
    /// When two records share a date the later one wins.
    pub fn from_records(
        name: impl Into<String>,
        records: impl IntoIterator<Item = Holiday>,
    ) -> Self {
        let holidays: BTreeMap<Date, Holiday> =
            records.into_iter().map(|h| (h.date, h)).collect();
        let coverage = match (holidays.keys().next(), holidays.keys().next_back()) {
            (Some(first), Some(last)) => Some(first.year()..=last.year()),
            _ => None,
        };
        Self {
            name: name.into(),
            holidays,
            coverage,
        }
    }

    /// Replace the coverage range with an explicit one.
    ///
    /// Every record must fall inside `first_year..=last_year`.
    pub fn with_coverage(mut self, first_year: u16, last_year: u16) -> Result<Self> {
        ensure!(
            first_year <= last_year,
            "coverage start {first_year} is after coverage end {last_year}"
        );
        if let Some(outside) = self
            .holidays
            .keys()
            .find(|d| !(first_year..=last_year).contains(&d.year()))
        {
            return Err(Error::InvalidArgument(format!(
                "holiday {outside} lies outside declared coverage {first_year}..={last_year}"
            )));
        }
        self.coverage = Some(first_year..=last_year);
        Ok(self)
    }

    /// Parse a table from JSON.
    ///
    /// Two shapes are accepted:
    /// * an array of records, `[{ "date": "YYYY-MM-DD", "name": "..." }, ...]`;
    /// * an object `{ "name", "first_year", "last_year", "holidays": [...] }`
    ///   where every field except `holidays` is optional.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| Error::Parse(format!("holiday data: {e}")))?;
        if value.is_array() {
            let records: Vec<Holiday> = serde_json::from_value(value)
                .map_err(|e| Error::Parse(format!("holiday records: {e}")))?;
            return Ok(Self::from_records("", records));
        }
        let file: HolidayFile = serde_json::from_value(value)
            .map_err(|e| Error::Parse(format!("holiday table: {e}")))?;
        let table = Self::from_records(file.name.unwrap_or_default(), file.holidays);
        if file.first_year.is_none() && file.last_year.is_none() {
            return Ok(table);
        }
        let inferred = table.coverage();
        let first = file.first_year.or(inferred.as_ref().map(|r| *r.start()));
        let last = file.last_year.or(inferred.as_ref().map(|r| *r.end()));
        match (first, last) {
            (Some(first), Some(last)) => table.with_coverage(first, last),
            _ => Err(Error::InvalidArgument(
                "an empty table needs both first_year and last_year".into(),
            )),
        }
    }

    /// The bundled snapshot of Japanese national holidays.
    ///
    /// Parsed once per process and shared; see [`HolidayTable::coverage`]
    /// for the years it describes.
    pub fn japan() -> Arc<HolidayTable> {
        Arc::clone(&JAPAN)
    }

    /// Table name (may be empty).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return `true` if `date` is listed.
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Look up the record for `date`.
    pub fn get(&self, date: Date) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    /// All records in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.values()
    }

    /// Records falling in `year`, in chronological order.
    pub fn in_year(&self, year: u16) -> impl Iterator<Item = &Holiday> {
        self.iter().filter(move |h| h.date.year() == year)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// The years this table describes, if known.
    pub fn coverage(&self) -> Option<RangeInclusive<u16>> {
        self.coverage.clone()
    }

    /// Return `true` unless `year` lies outside a known coverage range.
    ///
    /// A table without coverage (empty, no declared range) makes no claim
    /// about any year and covers everything.
    pub fn covers(&self, year: u16) -> bool {
        self.coverage.as_ref().map_or(true, |r| r.contains(&year))
    }
}
