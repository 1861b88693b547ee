use std::io;
use std::process::ExitCode;

use bizday::time::Date;
use bizday::{Cli, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = cli.global_opts.settings()?;
    init_tracing(&settings.general.log_level);
    debug!(?settings, "effective settings");

    let today = Date::try_from(chrono::Local::now().date_naive())?;
    let ctx = Context::new(settings, today)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli.command.execute(&ctx, &mut out)
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
