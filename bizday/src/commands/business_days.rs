//! Business-days command implementation
//!
//! Prints every business day in a range.

use std::io::Write;

use bizday_time::all_business_days_between;
use clap::Args;

use super::{format_day, Context, RangeArgs};
use crate::error::Result;

/// Print every business day in a range.
#[derive(Args, Debug, Clone, Default)]
pub struct CommandArgs {
    /// Date range to scan.
    #[command(flatten)]
    pub range: RangeArgs,
}

/// Run the business-days command
pub fn command(args: CommandArgs, ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let (start, end) = ctx.range(&args.range)?;
    let days = all_business_days_between(ctx.calendar(), start, end);
    for day in &days {
        writeln!(out, "{}", format_day(*day))?;
    }
    writeln!(out, "Total: {}", days.len())?;
    Ok(())
}
