//! Export command implementation
//!
//! Resolves the N-th business days in a range and writes them to an
//! iCalendar file.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use bizday_core::utilities::format_ordinal;
use bizday_ical::{default_file_name, generate_nth_business_day_events};
use bizday_time::BusinessDayQuery;
use clap::Args;
use tracing::info;

use super::{Context, RangeArgs, ScheduleArgs};
use crate::error::{CliError, Result};

/// Write the N-th business days to an iCalendar file.
#[derive(Args, Debug, Clone, Default)]
pub struct CommandArgs {
    /// Date range to search.
    #[command(flatten)]
    pub range: RangeArgs,

    /// Business-day rank and event window.
    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Output file, or a directory to place the default file name in.
    /// Defaults to the configured output directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the export command
pub fn command(args: CommandArgs, ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let path = export(&args, ctx)?;
    writeln!(out, "Wrote {}", path.display())?;
    Ok(())
}

/// Write the calendar file and return where it went.
///
/// Fails with [`CliError::EmptySchedule`] rather than writing a calendar with
/// no events.
pub fn export(args: &CommandArgs, ctx: &Context) -> Result<PathBuf> {
    let (start, end) = ctx.range(&args.range)?;
    let n = ctx.business_day(&args.schedule);
    let window = ctx.window(&args.schedule)?;
    let rank = u32::try_from(n)
        .ok()
        .filter(|&r| r >= 1)
        .ok_or_else(|| {
            CliError::InvalidArgument(format!("business day must be positive, got {n}"))
        })?;
    let dates = BusinessDayQuery::new(start, end, n).resolve(ctx.calendar());
    if dates.is_empty() {
        return Err(CliError::EmptySchedule(format_ordinal(rank)));
    }

    let file_name = default_file_name(rank, window);
    let path = match &args.output {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.clone(),
        None => ctx.settings().general.output_dir.join(file_name),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = generate_nth_business_day_events(dates.dates(), window, rank);
    fs::write(&path, content)?;
    info!(path = %path.display(), events = dates.len(), "exported calendar");
    Ok(path)
}
