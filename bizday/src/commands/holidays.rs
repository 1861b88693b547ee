//! Holidays command implementation
//!
//! Prints the holiday table in use and the years it covers.

use std::io::Write;

use bizday_time::{Calendar, Holiday};
use clap::Args;

use super::{format_day, Context};
use crate::error::Result;

/// Print the holiday table.
#[derive(Args, Debug, Clone, Default)]
pub struct CommandArgs {
    /// Only show holidays in this year.
    #[arg(long)]
    pub year: Option<u16>,
}

/// Run the holidays command
pub fn command(args: CommandArgs, ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let calendar = ctx.calendar();
    let table = calendar.holidays();

    writeln!(out, "Calendar: {}", calendar.name())?;
    match table.coverage() {
        Some(years) => writeln!(out, "Coverage: {}-{}", years.start(), years.end())?,
        None => writeln!(out, "Coverage: none declared")?,
    }

    let holidays: Vec<&Holiday> = match args.year {
        Some(year) => {
            if !calendar.covers_year(year) {
                writeln!(
                    out,
                    "Warning: {year} is outside the holiday data; only weekends are non-business days"
                )?;
            }
            table.in_year(year).collect()
        }
        None => table.iter().collect(),
    };
    for holiday in &holidays {
        writeln!(out, "{}  {}", format_day(holiday.date), holiday.name)?;
    }
    writeln!(out, "Total: {}", holidays.len())?;
    Ok(())
}
