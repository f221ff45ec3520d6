//! Non-interactive output: evaluate once and print.

use std::io::Write;

use intdiv_core::{evaluate, DisplaySettings, Readout, RoundingMode};
use log::debug;

use crate::result::CliResult;

/// Output options for a single evaluation
#[derive(Debug, Clone, Copy)]
pub(crate) struct OneShotOptions {
    pub(crate) mode: Option<RoundingMode>,
    pub(crate) json: bool,
}

/// Evaluate `x / y` and write the result to `out`.
///
/// Evaluation errors are printed like any other result; only I/O and
/// serialization failures are returned as errors.
pub(crate) fn print_evaluation(
    out: &mut impl Write,
    x: &str,
    y: &str,
    settings: &DisplaySettings,
    options: OneShotOptions,
) -> CliResult<()> {
    match options.mode {
        Some(mode) => print_single_mode(out, x, y, mode, options.json),
        None => print_all(out, x, y, settings, options.json),
    }
}

fn print_all(out: &mut impl Write, x: &str, y: &str, settings: &DisplaySettings, json: bool) -> CliResult<()> {
    let outcome = evaluate(x, y);
    if let Err(e) = &outcome {
        debug!("evaluation failed: {}", e);
    }

    if json {
        let text = match &outcome {
            Ok(result) => serde_json::to_string_pretty(result)?,
            Err(e) => serde_json::to_string_pretty(e)?,
        };
        writeln!(out, "{}", text)?;
        return Ok(());
    }

    let readout = Readout::from_outcome(&outcome);
    writeln!(out, "x = {}", x.trim())?;
    writeln!(out, "y = {}", y.trim())?;
    for cell in settings.visible(&readout) {
        writeln!(out, "{:<12} {}", cell.field.id(), cell.text)?;
    }
    Ok(())
}

fn print_single_mode(out: &mut impl Write, x: &str, y: &str, mode: RoundingMode, json: bool) -> CliResult<()> {
    let outcome = evaluate(x, y).map(|result| result.div_rem(mode));
    debug!("{} under {}: {:?}", x, mode, outcome);

    match (&outcome, json) {
        (Ok(r), true) => writeln!(out, "{}", serde_json::to_string_pretty(r)?)?,
        (Err(e), true) => writeln!(out, "{}", serde_json::to_string_pretty(e)?)?,
        (Ok(r), false) => {
            writeln!(out, "{} / {} ({})", x.trim(), y.trim(), mode.description())?;
            writeln!(out, "quotient  = {}", r.quotient)?;
            writeln!(out, "remainder = {}", r.remainder)?;
        }
        (Err(e), false) => {
            writeln!(out, "quotient  = {}", e.label())?;
            writeln!(out, "remainder = {}", e.label())?;
        }
    }
    Ok(())
}
