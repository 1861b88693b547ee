//! Command-line definition.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::commands::{self, Context};
use crate::error::Result;
use crate::settings::Settings;

/// Find the N-th business day of every month and export it as an iCalendar
/// schedule.
#[derive(Parser, Debug, Clone)]
#[command(name = "bizday", version, about, long_about = None)]
pub struct Cli {
    /// Options shared by every sub-command.
    #[clap(flatten)]
    pub global_opts: GlobalOpts,

    /// The sub-command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Options accepted by every sub-command.
#[derive(Clone, Debug, Args, Default)]
pub struct GlobalOpts {
    /// Settings file (TOML). Defaults to `bizday.toml` in the working
    /// directory, if present.
    #[arg(global = true, long)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `info` or `bizday_time=debug`.
    ///
    /// Overrides the settings file; `RUST_LOG` overrides both.
    #[arg(global = true, long)]
    pub log_level: Option<String>,

    /// Holiday data file (JSON) replacing the bundled Japanese holidays.
    #[arg(global = true, long)]
    pub holidays: Option<PathBuf>,
}

impl GlobalOpts {
    /// Load settings and apply the flags on top of them.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load(self.config.as_deref())?;
        self.apply(&mut settings);
        Ok(settings)
    }

    /// Overwrite the settings the flags set.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(level) = &self.log_level {
            settings.general.log_level = level.clone();
        }
        if let Some(path) = &self.holidays {
            settings.calendar.holidays_file = Some(path.clone());
        }
    }
}

/// Sub-commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the N-th business day of each month in a range.
    List(commands::list::CommandArgs),
    /// Write the N-th business days to an iCalendar file.
    Export(commands::export::CommandArgs),
    /// Print every business day in a range.
    BusinessDays(commands::business_days::CommandArgs),
    /// Print the holiday table and the years it covers.
    Holidays(commands::holidays::CommandArgs),
}

impl Commands {
    /// Run the command, writing its report to `out`.
    pub fn execute(self, ctx: &Context, out: &mut dyn Write) -> Result<()> {
        debug!(command = ?self, calendar = ctx.calendar().holidays().name(), "running command");
        match self {
            Commands::List(args) => commands::list::command(args, ctx, out),
            Commands::Export(args) => commands::export::command(args, ctx, out),
            Commands::BusinessDays(args) => commands::business_days::command(args, ctx, out),
            Commands::Holidays(args) => commands::holidays::command(args, ctx, out),
        }
    }
}
