//! Settings file loading and logger setup.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use intdiv_core::DisplaySettings;
use log::{info, LevelFilter};

use crate::result::{CliError, CliResult};

/// Read [`DisplaySettings`] from a JSON file, or the defaults when no path is given.
pub(crate) fn load_settings(path: Option<&Path>) -> CliResult<DisplaySettings> {
    let Some(path) = path else {
        return Ok(DisplaySettings::default());
    };

    let text = std::fs::read_to_string(path).map_err(|e| CliError::settings(path.display(), e))?;
    let settings = serde_json::from_str(&text).map_err(|e| CliError::settings(path.display(), e))?;
    info!("Loaded settings from {}", path.display());
    Ok(settings)
}

fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// One-shot mode logs to stderr so stdout stays parseable.
pub(crate) fn configure_logging_stderr(verbose: bool) {
    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level_filter(verbose))
        .target(env_logger::Target::Stderr)
        .init();
}

/// The TUI owns the terminal, so logs go to a file or nowhere.
pub(crate) fn configure_logging_tui(verbose: bool, log_file: Option<&Path>) -> CliResult<()> {
    let mut builder = env_logger::Builder::new();
    builder.format(move |buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .filter_level(level_filter(verbose))
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }

    builder.init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(load_settings(None).unwrap(), DisplaySettings::default());
    }

    #[test]
    fn test_missing_file_is_a_settings_error() {
        let err = load_settings(Some(Path::new("/nonexistent/intdiv-settings.json"))).unwrap_err();
        assert!(matches!(err, CliError::Settings { .. }));
    }

    #[test]
    fn test_reads_json_file() {
        let path = std::env::temp_dir().join(format!("intdiv-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"show_ties": false, "initial_x": "-9"}"#).unwrap();
        let settings = load_settings(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(!settings.show_ties);
        assert_eq!(settings.initial_x, "-9");
    }
}
