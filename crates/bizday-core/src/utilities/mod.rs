//! Miscellaneous string utilities.

/// Formatting of ordinals and clock times.
pub mod data_formatters;

/// Parsing of ISO dates and `HH:MM` times.
pub mod data_parsers;

pub use data_formatters::{format_clock, format_ordinal, ordinal_suffix};
pub use data_parsers::{parse_iso_date, parse_time_of_day};
