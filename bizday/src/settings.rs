//! Settings and configuration structures.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bizday_time::{HolidayCalendar, HolidayTable, TimeOfDay};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Main application settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Logging and output
    #[serde(default)]
    pub general: GeneralConfig,
    /// Holiday source
    #[serde(default)]
    pub calendar: CalendarConfig,
    /// Schedule defaults
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

impl Settings {
    /// Load settings from a configuration file and environment variables.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `path` if given, otherwise `bizday.toml` in the working directory (optional)
    /// 2. Environment variables prefixed with `BIZDAY__`, e.g. `BIZDAY__SCHEDULE__BUSINESS_DAY=5`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("bizday").required(false),
        };
        let config = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("BIZDAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parse settings from TOML text alone.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Build the holiday calendar these settings describe: the configured
    /// holiday file, or the bundled Japanese table when none is set.
    pub fn calendar(&self) -> Result<HolidayCalendar> {
        let table = match &self.calendar.holidays_file {
            Some(path) => {
                let text =
                    std::fs::read_to_string(path).map_err(|source| CliError::HolidayFile {
                        path: path.clone(),
                        source,
                    })?;
                Arc::new(HolidayTable::from_json_str(&text)?)
            }
            None => HolidayTable::japan(),
        };
        let name = match &self.calendar.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ if !table.name().is_empty() => table.name().to_owned(),
            _ => "Custom".to_owned(),
        };
        Ok(HolidayCalendar::new(name, table))
    }
}

/// Logging and output configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct GeneralConfig {
    /// Log filter directive (`error`, `warn`, `info`, `debug`, `trace`, or
    /// a full `tracing` filter)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory exported calendars are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_log_level() -> String {
    "warn".into()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Holiday source configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CalendarConfig {
    /// JSON holiday file; the bundled Japanese table is used when unset
    #[serde(default)]
    pub holidays_file: Option<PathBuf>,
    /// Display name overriding the one in the holiday data
    #[serde(default)]
    pub name: Option<String>,
}

/// Schedule defaults, each overridable on the command line.
#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
    /// Rank of the business day within each month
    #[serde(default = "default_business_day")]
    pub business_day: i32,
    /// Event start time
    #[serde(default = "default_start_time")]
    pub start_time: TimeOfDay,
    /// Event end time
    #[serde(default = "default_end_time")]
    pub end_time: TimeOfDay,
    /// Dates printed by `list` before the remainder is summarised
    #[serde(default = "default_max_display")]
    pub max_display: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            business_day: default_business_day(),
            start_time: default_start_time(),
            end_time: default_end_time(),
            max_display: default_max_display(),
        }
    }
}

fn default_business_day() -> i32 {
    7
}

fn default_start_time() -> TimeOfDay {
    TimeOfDay::new(10, 0).unwrap_or_else(|_| unreachable!("10:00 is a valid time"))
}

fn default_end_time() -> TimeOfDay {
    TimeOfDay::new(11, 0).unwrap_or_else(|_| unreachable!("11:00 is a valid time"))
}

fn default_max_display() -> usize {
    10
}
