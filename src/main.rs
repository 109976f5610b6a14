mod constants;
mod elo;
mod input;
mod report;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use constants::*;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Adjusts the ratings of two competitors after one or more games.
#[derive(Parser)]
#[command(name = "elo-adjust", version)]
struct Args {
    /// <A> <aA> <B> <aB> <q> [<n>]: ratings in 0..=3000, activity flags,
    /// A's performance in 0..=100 and the number of games (default 1)
    #[arg(value_name = "ARGS", num_args = 0.., allow_hyphen_values = true)]
    values: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log intermediate values to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).wrap_err("failed to initialize logging")
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.verbose)?;

    let encounter = match input::parse_encounter(args.values.as_slice()) {
        Ok(encounter) => encounter,
        Err(err) => {
            tracing::debug!(rejected = ?err.rejected_value(), "rejected input");
            println!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let adjustment = elo::update_ratings(&encounter);

    let mut out = BufWriter::new(io::stdout().lock());
    if args.json {
        report::write_json(&mut out, &adjustment)?;
    } else {
        report::write_text(&mut out, &adjustment)?;
    }
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
