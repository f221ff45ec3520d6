//! # Intdiv CLI Application
//!
//! Terminal interface for the integer division engine.
//!
//! - `intdiv 7 2` prints every rounding variant of `7 / 2`
//! - `intdiv --mode ties-even 7 2` prints the quotient and remainder for one policy
//! - `intdiv` with no operands opens a live Ratatui view that re-evaluates as you type

mod app;
mod config;
mod oneshot;
mod result;
mod tui;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use intdiv_core::RoundingMode;
use log::error;

use crate::app::App;
use crate::oneshot::OneShotOptions;
use crate::result::CliResult;

#[derive(Debug, Parser)]
#[command(author, version, about, allow_negative_numbers = true)]
struct Args {
    /// The dividend. Decimal with optional sign, or 0x / 0o / 0b prefixed.
    ///
    /// Leave out both operands to start the interactive view.
    #[arg(requires = "y")]
    x: Option<String>,

    /// The divisor.
    y: Option<String>,

    /// Print the quotient and remainder for this policy only.
    #[arg(long, value_enum, requires = "x")]
    mode: Option<RoundingMode>,

    /// Print JSON instead of text.
    #[arg(long, requires = "x")]
    json: bool,

    /// JSON file with display settings (shown field groups, initial operands).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Log debug messages.
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file. The interactive view logs nowhere otherwise.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> CliResult<()> {
    let args = Args::parse();

    match (&args.x, &args.y) {
        (Some(x), Some(y)) => {
            config::configure_logging_stderr(args.verbose);
            let settings = config::load_settings(args.settings.as_deref())?;
            let options = OneShotOptions {
                mode: args.mode,
                json: args.json,
            };
            oneshot::print_evaluation(&mut io::stdout().lock(), x, y, &settings, options)
        }
        _ => {
            config::configure_logging_tui(args.verbose, args.log_file.as_deref())?;
            let settings = config::load_settings(args.settings.as_deref())?;
            tui::run(App::new(settings))
        }
    }
}
