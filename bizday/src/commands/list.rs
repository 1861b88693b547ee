//! List command implementation
//!
//! Prints the N-th business day of each month in a range.

use std::io::Write;

use bizday_time::{BusinessDayQuery, NthBusinessDays};
use clap::Args;
use tracing::info;

use super::{format_day, Context, RangeArgs, ScheduleArgs};
use crate::error::Result;

/// Print the N-th business day of each month in a range.
#[derive(Args, Debug, Clone, Default)]
pub struct CommandArgs {
    /// Date range to search.
    #[command(flatten)]
    pub range: RangeArgs,

    /// Business-day rank and event window.
    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Dates to print before summarising the rest.
    #[arg(long)]
    pub max_display: Option<usize>,
}

/// Run the list command
pub fn command(args: CommandArgs, ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let (start, end) = ctx.range(&args.range)?;
    let n = ctx.business_day(&args.schedule);
    let dates = BusinessDayQuery::new(start, end, n).resolve(ctx.calendar());
    info!(%start, %end, n, found = dates.len(), "listing n-th business days");

    let max_display = args
        .max_display
        .unwrap_or(ctx.settings().schedule.max_display);
    write_listing(out, &dates, max_display)
}

/// Write at most `max_display` dates, a count of the rest, then the total.
pub fn write_listing(
    out: &mut dyn Write,
    dates: &NthBusinessDays,
    max_display: usize,
) -> Result<()> {
    if dates.is_empty() {
        writeln!(out, "No matching business days")?;
        return Ok(());
    }
    for date in dates.iter().take(max_display) {
        writeln!(out, "{}", format_day(date))?;
    }
    if dates.len() > max_display {
        writeln!(out, "... and {} more", dates.len() - max_display)?;
    }
    writeln!(out, "Total: {}", dates.len())?;
    Ok(())
}
